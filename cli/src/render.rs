use gridmark_engine::{Board, GameStatus, Mark, Position};

/// Text rendering of the board. Winning cells are bracketed so the final
/// run stands out without color codes.
pub fn render_board(board: &Board, highlight: &[Position]) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..board.width() {
        out.push_str(&format!("{:^3}", col));
    }
    out.push('\n');

    for row in 0..board.height() {
        out.push_str(&format!("{:>3} ", row));
        for col in 0..board.width() {
            let symbol = match board.get(row, col) {
                Ok(Mark::X) => 'X',
                Ok(Mark::O) => 'O',
                _ => '.',
            };
            if highlight.contains(&Position::new(row, col)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }

    out
}

pub fn winning_cells(status: &GameStatus) -> &[Position] {
    match status {
        GameStatus::Won { cells, .. } => cells,
        _ => &[],
    }
}

pub fn describe_status(status: &GameStatus, current_mark: Mark) -> String {
    match status {
        GameStatus::InProgress => match current_mark {
            Mark::X => "X to move".to_string(),
            Mark::O => "O to move".to_string(),
            Mark::Empty => String::new(),
        },
        GameStatus::Won { mark, cells } => {
            let cells: Vec<String> = cells
                .iter()
                .map(|pos| format!("({}, {})", pos.row, pos.col))
                .collect();
            let winner = if *mark == Mark::X { "X" } else { "O" };
            format!("{} wins: {}", winner, cells.join(" "))
        }
        GameStatus::Draw => "Draw - the board is full".to_string(),
    }
}
