/// Errors reported by the board and the game state machine.
///
/// Everything here is recoverable for the process: construction errors fail
/// that construction attempt, placement errors reject the call without
/// mutating the board or the turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("win length must be between 1 and {min_dimension}, got {win_length}")]
    InvalidWinLength {
        win_length: usize,
        min_dimension: usize,
    },

    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("game is already over")]
    GameAlreadyFinished,
}
