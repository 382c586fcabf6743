use crate::board::Board;
use crate::bot;
use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::types::{GameStatus, Mark, Position};
use crate::win_detector;

/// One game of gridmark: the board, whose turn it is, and the outcome so
/// far. X always opens. The session owns all of its state; callers interact
/// only through these methods and poll the accessors to render.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    win_length: usize,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    ai_enabled: bool,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Result<Self, GameError> {
        settings.validate()?;
        let board = Board::new(settings.field_width, settings.field_height)?;
        Ok(Self {
            board,
            win_length: settings.win_length,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            ai_enabled: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
    }

    /// Place the current player's mark at (row, col).
    ///
    /// A rejected placement leaves the board and the turn untouched. A
    /// successful one is evaluated immediately: a win or a draw freezes the
    /// session, otherwise the turn passes to the other player.
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.status.is_finished() {
            return Err(GameError::GameAlreadyFinished);
        }

        self.board.set(row, col, self.current_mark)?;
        let pos = Position::new(row, col);
        self.last_move = Some(pos);

        self.status = win_detector::evaluate(&self.board, pos, self.current_mark, self.win_length);

        if !self.status.is_finished()
            && let Some(next) = self.current_mark.opponent()
        {
            self.current_mark = next;
        }

        Ok(())
    }

    /// Let the automated opponent play for whoever is on turn. Picks
    /// uniformly among the empty cells and places through [`place_mark`].
    /// Returns the chosen position, or `None` when the game is over or no
    /// empty cell remains.
    ///
    /// [`place_mark`]: GameState::place_mark
    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Option<Position> {
        if self.status.is_finished() {
            return None;
        }
        let pos = bot::random_move(&self.board, rng)?;
        self.place_mark(pos.row, pos.col).ok()?;
        Some(pos)
    }

    /// Start a fresh game on the same board dimensions. Always legal and
    /// idempotent; the automated-opponent flag survives a reset.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(width: usize, height: usize, win_length: usize) -> GameState {
        GameState::new(&GameSettings {
            field_width: width,
            field_height: height,
            win_length,
        })
        .unwrap()
    }

    #[test]
    fn test_new_game_starts_with_x_in_progress() {
        let state = state(6, 6, 4);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move(), None);
        assert!(!state.board().is_full());
        assert!(!state.ai_enabled());
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let result = GameState::new(&GameSettings {
            field_width: 3,
            field_height: 3,
            win_length: 4,
        });
        assert_eq!(
            result.err(),
            Some(GameError::InvalidWinLength {
                win_length: 4,
                min_dimension: 3
            })
        );
    }

    #[test]
    fn test_turn_alternates_on_successful_placement() {
        let mut state = state(6, 6, 4);
        state.place_mark(0, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.place_mark(1, 0).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_failed_placement_keeps_turn_and_board() {
        let mut state = state(6, 6, 4);
        state.place_mark(0, 0).unwrap();

        assert_eq!(
            state.place_mark(0, 0),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().get(0, 0).unwrap(), Mark::X);

        assert_eq!(
            state.place_mark(9, 9),
            Err(GameError::OutOfBounds { row: 9, col: 9 })
        );
        assert_eq!(state.current_mark(), Mark::O);
        assert_eq!(state.board().empty_cells().len(), 35);
    }

    #[test]
    fn test_diagonal_win_with_cells() {
        let mut state = state(4, 4, 3);
        state.place_mark(0, 0).unwrap(); // X
        state.place_mark(0, 1).unwrap(); // O
        state.place_mark(1, 1).unwrap(); // X
        state.place_mark(0, 2).unwrap(); // O
        state.place_mark(2, 2).unwrap(); // X completes the diagonal

        match state.status() {
            GameStatus::Won { mark, cells } => {
                assert_eq!(*mark, Mark::X);
                assert_eq!(cells.len(), 3);
                assert!(cells.contains(&Position::new(0, 0)));
                assert!(cells.contains(&Position::new(1, 1)));
                assert!(cells.contains(&Position::new(2, 2)));
            }
            other => panic!("expected a win, got {:?}", other),
        }
        // no turn flip once the game is over
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_placement_after_finish_rejected_without_mutation() {
        let mut state = state(4, 4, 3);
        state.place_mark(0, 0).unwrap();
        state.place_mark(3, 3).unwrap();
        state.place_mark(0, 1).unwrap();
        state.place_mark(3, 2).unwrap();
        state.place_mark(0, 2).unwrap(); // X wins the top row

        assert!(state.status().is_finished());
        let board_before = state.board().clone();
        assert_eq!(state.place_mark(2, 2), Err(GameError::GameAlreadyFinished));
        assert_eq!(*state.board(), board_before);
    }

    #[test]
    fn test_full_board_without_run_is_draw() {
        let mut state = state(3, 3, 3);
        // X: (0,0) (0,2) (1,0) (2,1) (2,2) / O: (0,1) (1,1) (1,2) (2,0)
        for &(row, col) in &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            state.place_mark(row, col).unwrap();
        }
        assert_eq!(*state.status(), GameStatus::Draw);
        assert!(state.board().is_full());
    }

    #[test]
    fn test_reset_restores_fresh_game_and_is_idempotent() {
        let mut state = state(4, 4, 3);
        state.set_ai_enabled(true);
        state.place_mark(0, 0).unwrap();
        state.place_mark(1, 0).unwrap();

        state.reset();
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.board().empty_cells().len(), 16);
        // the opponent toggle is not part of the game state proper
        assert!(state.ai_enabled());

        state.reset();
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().empty_cells().len(), 16);
    }

    #[test]
    fn test_bot_move_takes_last_empty_cell() {
        let mut state = state(2, 2, 2);
        // leave exactly one empty cell without finishing the game
        let mut state3 = state3_with_one_gap();
        let mut rng = SessionRng::new(99);
        let pos = state3.play_bot_move(&mut rng).unwrap();
        assert_eq!(pos, Position::new(2, 2));

        // and a finished game never produces a move
        state.place_mark(0, 0).unwrap();
        state.place_mark(1, 0).unwrap();
        state.place_mark(0, 1).unwrap(); // X wins row 0 with win length 2
        assert!(state.status().is_finished());
        assert_eq!(state.play_bot_move(&mut rng), None);
    }

    // 3x3 game, win length 3, eight moves played, only (2,2) free, no win yet
    fn state3_with_one_gap() -> GameState {
        let mut state = state(3, 3, 3);
        for &(row, col) in &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
        ] {
            state.place_mark(row, col).unwrap();
        }
        assert_eq!(*state.status(), GameStatus::InProgress);
        state
    }

    #[test]
    fn test_bot_move_deterministic_under_seed() {
        let settings = GameSettings::default();
        let mut first = GameState::new(&settings).unwrap();
        let mut second = GameState::new(&settings).unwrap();
        let mut rng_a = SessionRng::new(2024);
        let mut rng_b = SessionRng::new(2024);

        for _ in 0..10 {
            let a = first.play_bot_move(&mut rng_a);
            let b = second.play_bot_move(&mut rng_b);
            assert_eq!(a, b);
        }
    }
}
