use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::Position;

/// Uniform random move over the currently empty cells.
///
/// Enumerates the empty cells first and picks one index; sampling positions
/// until an empty one turns up would not terminate on a full board.
pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..moves.len());
    Some(moves[index])
}
