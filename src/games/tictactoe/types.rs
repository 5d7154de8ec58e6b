//! Core domain types for Monkey vs Banana.

use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// The Monkey always exists as "Mark A" and the Banana as "Mark B".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Mark {
    /// The monkey (moves first by default).
    Monkey,
    /// The banana.
    Banana,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Monkey => Mark::Banana,
            Mark::Banana => Mark::Monkey,
        }
    }

    /// Emoji glyph drawn on the board.
    pub fn glyph(self) -> &'static str {
        match self {
            Mark::Monkey => "🐵",
            Mark::Banana => "🍌",
        }
    }

    /// Display name used in banners and the scoreboard.
    pub fn name(self) -> &'static str {
        match self {
            Mark::Monkey => "Monkey",
            Mark::Banana => "Banana",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board, row-major, always exactly nine cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a layout string of nine characters.
    ///
    /// `M` is a monkey, `B` a banana, anything else an empty cell.
    /// Whitespace is skipped so rows can be written on separate lines.
    /// Returns `None` unless exactly nine cells are described.
    pub fn from_layout(layout: &str) -> Option<Self> {
        let cells: Vec<Cell> = layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'M' | 'm' => Cell::Occupied(Mark::Monkey),
                'B' | 'b' => Cell::Occupied(Mark::Banana),
                _ => Cell::Empty,
            })
            .collect();
        let cells: [Cell; 9] = cells.try_into().ok()?;
        Some(Self { cells })
    }

    /// Gets the cell at `index` (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if `index` is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Writes `mark` into `index`. Callers validate first.
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Formats the board as plain text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => format!(" {} ", index + 1),
                    Cell::Occupied(mark) => format!(" {}", mark.glyph()),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_needs_nine_cells() {
        assert!(Board::from_layout("MB.").is_none());
        let board = Board::from_layout("MB. ... ..M").unwrap();
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::Monkey)));
        assert_eq!(board.get(1), Some(Cell::Occupied(Mark::Banana)));
        assert_eq!(board.filled(), 3);
    }

    #[test]
    fn mark_parses_case_insensitively() {
        assert_eq!("Banana".parse::<Mark>().unwrap(), Mark::Banana);
        assert_eq!("monkey".parse::<Mark>().unwrap(), Mark::Monkey);
        assert!("gorilla".parse::<Mark>().is_err());
    }

    #[test]
    fn out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(board.is_empty(8));
        assert!(!board.is_empty(9));
    }
}
