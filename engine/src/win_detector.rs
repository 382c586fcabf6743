use crate::board::Board;
use crate::types::{GameStatus, Mark, Position};

/// The four axes a run can lie on. Each axis is a straight line through the
/// origin, walked in the step direction and its opposite.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Number of consecutive cells holding `mark`, starting at `origin`
/// (inclusive) and stepping by `step` until the first mismatch or the board
/// edge. Returns 0 when the origin itself does not hold `mark`.
pub fn count_run(board: &Board, origin: Position, mark: Mark, step: (isize, isize)) -> usize {
    if mark == Mark::Empty {
        return 0;
    }
    match board.get(origin.row, origin.col) {
        Ok(cell) if cell == mark => 1 + half_line(board, origin, mark, step).len(),
        _ => 0,
    }
}

/// Cells holding `mark` strictly beyond `origin` in the `step` direction,
/// ordered outward. The walk leaves the board after at most
/// `max(width, height)` steps, so termination does not depend on cell
/// contents.
fn half_line(
    board: &Board,
    origin: Position,
    mark: Mark,
    (d_row, d_col): (isize, isize),
) -> Vec<Position> {
    let mut cells = Vec::new();
    if d_row == 0 && d_col == 0 {
        return cells;
    }

    let mut row = origin.row as isize;
    let mut col = origin.col as isize;
    loop {
        row += d_row;
        col += d_col;
        if row < 0 || col < 0 {
            break;
        }
        let (row, col) = (row as usize, col as usize);
        if !board.contains(row, col) {
            break;
        }
        match board.get(row, col) {
            Ok(cell) if cell == mark => cells.push(Position::new(row, col)),
            _ => break,
        }
    }
    cells
}

/// Classify the board after `mark` was just placed at `last_move`.
///
/// Every axis whose run through `last_move` reaches `win_length` contributes
/// its full contiguous run to the winning-cell set; axes are not ranked, a
/// multi-axis win reports the union. With no qualifying axis the result is
/// `Draw` on a full board and `InProgress` otherwise.
pub fn evaluate(
    board: &Board,
    last_move: Position,
    mark: Mark,
    win_length: usize,
) -> GameStatus {
    let origin_holds_mark = mark != Mark::Empty
        && board
            .get(last_move.row, last_move.col)
            .map(|cell| cell == mark)
            .unwrap_or(false);
    if !origin_holds_mark {
        return if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }

    let mut winning: Vec<Position> = Vec::new();
    for &(d_row, d_col) in &AXES {
        let forward = half_line(board, last_move, mark, (d_row, d_col));
        let backward = half_line(board, last_move, mark, (-d_row, -d_col));

        if 1 + forward.len() + backward.len() >= win_length {
            let run = backward
                .iter()
                .rev()
                .chain(std::iter::once(&last_move))
                .chain(forward.iter());
            for &pos in run {
                if !winning.contains(&pos) {
                    winning.push(pos);
                }
            }
        }
    }

    if !winning.is_empty() {
        GameStatus::Won {
            mark,
            cells: winning,
        }
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
