mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use gridmark_engine::{GameError, GameSettings, GameState, Mark, SessionRng, log};

#[derive(Parser, Debug)]
#[command(
    name = "gridmark",
    about = "Two-player grid-marking game with an optional random opponent"
)]
struct Args {
    /// YAML settings file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long)]
    win_length: Option<usize>,

    /// Let the random opponent play O
    #[arg(long)]
    ai: bool,

    /// Seed for the opponent's move selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    gridmark_engine::logger::init_logger(None);
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings(path)?,
        None => GameSettings::default(),
    };
    if let Some(width) = args.width {
        settings.field_width = width;
    }
    if let Some(height) = args.height {
        settings.field_height = height;
    }
    if let Some(win_length) = args.win_length {
        settings.win_length = win_length;
    }

    let mut game = GameState::new(&settings).map_err(|e| e.to_string())?;
    game.set_ai_enabled(args.ai);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "New {}x{} game, win length {}, seed {}",
        settings.field_width,
        settings.field_height,
        settings.win_length,
        rng.seed()
    );

    println!("Commands: <row> <col> to place, 'ai' to toggle the opponent, 'new' to restart, 'quit' to exit.");
    print_state(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::New) => {
                game.reset();
                log!("Board reset");
                print_state(&game);
            }
            Some(Command::ToggleAi) => {
                game.set_ai_enabled(!game.ai_enabled());
                println!(
                    "Automated opponent {}",
                    if game.ai_enabled() { "on" } else { "off" }
                );
                // flipping the switch while O is on turn hands the move
                // to the opponent right away
                if game.ai_enabled() {
                    maybe_play_opponent(&mut game, &mut rng);
                    print_state(&game);
                }
            }
            Some(Command::Place { row, col }) => match game.place_mark(row, col) {
                Ok(()) => {
                    if !game.status().is_finished() {
                        maybe_play_opponent(&mut game, &mut rng);
                    }
                    print_state(&game);
                }
                Err(GameError::GameAlreadyFinished) => {
                    println!("Game is over - type 'new' to start another one.");
                }
                Err(e) => println!("{}", e),
            },
            None => println!("Could not parse that - enter two numbers, 'ai', 'new' or 'quit'."),
        }
    }

    Ok(())
}

enum Command {
    Place { row: usize, col: usize },
    ToggleAi,
    New,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    match trimmed {
        "quit" | "q" | "exit" => return Some(Command::Quit),
        "new" | "reset" => return Some(Command::New),
        "ai" => return Some(Command::ToggleAi),
        _ => {}
    }

    let mut parts = trimmed.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place { row, col })
}

fn maybe_play_opponent(game: &mut GameState, rng: &mut SessionRng) {
    if game.ai_enabled()
        && game.current_mark() == Mark::O
        && let Some(pos) = game.play_bot_move(rng)
    {
        println!("Opponent plays ({}, {})", pos.row, pos.col);
    }
}

fn print_state(game: &GameState) {
    let highlight = render::winning_cells(game.status());
    print!("{}", render::render_board(game.board(), highlight));
    println!("{}", render::describe_status(game.status(), game.current_mark()));
    if game.status().is_finished() {
        println!("Type 'new' for another game.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place_command() {
        assert!(matches!(
            parse_command("2 3\n"),
            Some(Command::Place { row: 2, col: 3 })
        ));
        assert!(matches!(parse_command("  0   0  "), Some(Command::Place { .. })));
    }

    #[test]
    fn test_parse_keywords() {
        assert!(matches!(parse_command("ai\n"), Some(Command::ToggleAi)));
        assert!(matches!(parse_command("new"), Some(Command::New)));
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(parse_command("one two").is_none());
        assert!(parse_command("1 2 3").is_none());
        assert!(parse_command("").is_none());
    }
}
