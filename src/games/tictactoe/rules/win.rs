//! Win detection.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board positions that win the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// The eight winning lines, rows first, then columns, then diagonals.
pub const LINES: [Line; 8] = {
    use Position::*;
    [
        // Rows
        Line([TopLeft, TopCenter, TopRight]),
        Line([MiddleLeft, Center, MiddleRight]),
        Line([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        Line([TopLeft, MiddleLeft, BottomLeft]),
        Line([TopCenter, Center, BottomCenter]),
        Line([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        Line([TopLeft, Center, BottomRight]),
        Line([TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first completed line in [`LINES`] order with its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.indices();
        match (board.get(a)?, board.get(b)?, board.get(c)?) {
            (Cell::Occupied(x), Cell::Occupied(y), Cell::Occupied(z)) if x == y && y == z => {
                Some((x, *line))
            }
            _ => None,
        }
    })
}
