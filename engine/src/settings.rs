use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Board geometry for one session. The defaults are the classic 6x6 board
/// with four in a row to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub win_length: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 6,
            field_height: 6,
            win_length: 4,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.field_width,
                height: self.field_height,
            });
        }
        let min_dimension = self.field_width.min(self.field_height);
        if self.win_length == 0 || self.win_length > min_dimension {
            return Err(GameError::InvalidWinLength {
                win_length: self.win_length,
                min_dimension,
            });
        }
        Ok(())
    }
}
