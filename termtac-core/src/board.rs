//! Board geometry and fixed screen layout
//!
//! The board occupies terminal rows 1-11 of a 17 x 14 window. Cells are
//! numbered 0 (top-left) to 8 (bottom-right), row-major, and each cell's
//! label in the template sits exactly where its glyph is drawn.

use termtac_protocol::ansi::{FG_GREEN, FG_RED};

use crate::error::TermError;

/// Terminal window width in characters
pub const WINDOW_COLS: u8 = 17;

/// Terminal window height in characters
pub const WINDOW_ROWS: u8 = 14;

/// Number of cells on the board
pub const CELL_COUNT: u8 = 9;

/// Terminal row of each board row (1-based)
pub const CELL_ROWS: [u8; 3] = [2, 6, 10];

/// Terminal column of each board column (1-based)
pub const CELL_COLS: [u8; 3] = [3, 9, 15];

/// Status message row
pub const STATUS_ROW: u8 = 12;

/// Status message column
pub const STATUS_COL: u8 = 1;

/// Board template drawn once from the home position
pub const BOARD_TEMPLATE: &str = "     |     |\n\r  0  |  1  |  2\n\r     |     |\n\r-----|-----|-----\n\r     |     |\n\r  3  |  4  |  5 \n\r     |     |\n\r-----|-----|-----\n\r     |     |\n\r  6  |  7  |  8\n\r     |     |\n\n\n\r";

/// Startup instructions printed before the board is drawn
pub const BANNER: &str = "### TIC-TAC-TOE ###\n\rPlease set terminal to 17 x 14\n\r";

/// Terminal coordinate, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// One of the nine board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell(u8);

impl Cell {
    /// Validate a raw cell index
    pub fn new(index: u8) -> Result<Self, TermError> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(TermError::InvalidCell(index))
        }
    }

    /// Raw index 0..=8
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Where this cell's glyph is drawn
    pub const fn position(self) -> Position {
        Position {
            row: CELL_ROWS[(self.0 / 3) as usize],
            col: CELL_COLS[(self.0 % 3) as usize],
        }
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell)
    }
}

impl TryFrom<u8> for Cell {
    type Error = TermError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Cell::new(index)
    }
}

/// Mark drawn in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    X,
    O,
}

impl Glyph {
    /// Character written to the terminal
    pub const fn as_byte(self) -> u8 {
        match self {
            Glyph::X => b'X',
            Glyph::O => b'O',
        }
    }

    /// Foreground color sequence
    pub const fn color(self) -> &'static [u8] {
        match self {
            Glyph::X => FG_GREEN,
            Glyph::O => FG_RED,
        }
    }
}
