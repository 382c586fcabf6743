use crate::error::GameError;
use crate::types::{Mark, Position};

/// Fixed-size grid of marks. Dimensions are set at construction and never
/// change; cells only move from `Empty` to a mark, or all back to `Empty`
/// via [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    width: usize,
    height: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![Mark::Empty; width * height],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Mark, GameError> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        let index = self.index(row, col);
        if self.cells[index] != Mark::Empty {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[index] = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(i, _)| Position::new(i / self.width, i % self.width))
            .collect()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }
}
