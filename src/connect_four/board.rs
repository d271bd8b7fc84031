use std::fmt;

use crate::game_state::Player;

/// Number of rows; row 0 is the top, row `ROWS - 1` the bottom
pub const ROWS: usize = 6;
/// Number of columns
pub const COLS: usize = 7;

/// Content of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Fixed-size grid with gravity-drop semantics
///
/// Cell `(col, row)` is occupied iff it lies within the bottom `height[col]`
/// rows of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a position, or `None` outside the board
    ///
    /// Coordinates are signed so that pattern scans can probe past the edges.
    pub fn get(&self, col: isize, row: isize) -> Option<Cell> {
        if !Self::in_bounds(col, row) {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Check whether a position lies on the board
    pub fn in_bounds(col: isize, row: isize) -> bool {
        (0..COLS as isize).contains(&col) && (0..ROWS as isize).contains(&row)
    }

    /// Drop a piece into a column
    ///
    /// Out-of-range or full columns are left untouched.
    pub fn put(&mut self, col: usize, player: Player) {
        if let Some(row) = self.next_drop_row(col) {
            self.cells[row][col] = Cell::Occupied(player);
            self.heights[col] += 1;
        }
    }

    /// Clear the topmost piece of a column
    ///
    /// Out-of-range or empty columns are left untouched.
    pub fn remove(&mut self, col: usize) {
        if let Some(row) = self.top_row(col) {
            self.cells[row][col] = Cell::Empty;
            self.heights[col] -= 1;
        }
    }

    /// Row the next piece dropped into `col` would land on
    ///
    /// `None` if the column is full or out of range.
    pub fn next_drop_row(&self, col: usize) -> Option<usize> {
        let height = *self.heights.get(col)?;
        (ROWS - 1).checked_sub(height)
    }

    /// Row of the topmost piece in `col`, if any
    pub fn top_row(&self, col: usize) -> Option<usize> {
        match self.heights.get(col) {
            Some(&height) if height > 0 => Some(ROWS - height),
            _ => None,
        }
    }

    /// Number of pieces stacked in `col`
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == ROWS)
    }

    /// Columns that can still take a piece, left to right
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.heights[col] < ROWS).collect()
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, "| ")?,
                    Cell::Occupied(player) => write!(f, "|{}", player)?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
