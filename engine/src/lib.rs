pub mod logger;

mod board;
mod bot;
mod error;
mod game_state;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::random_move;
pub use error::GameError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use types::{GameStatus, Mark, Position};
pub use win_detector::{count_run, evaluate};
