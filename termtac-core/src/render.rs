//! Terminal renderer
//!
//! Every draw is fire-and-forget: the renderer keeps no copy of the board,
//! so drawing the same thing twice emits the same bytes twice.

use termtac_protocol::ansi::{
    cursor_position, BG_BLACK, CLEAR_SCREEN, CURSOR_HIDE, CURSOR_HOME, FG_BLUE, FG_YELLOW,
    SGR_BLINK, SGR_BOLD, SGR_RESET, SGR_REVERSE,
};

use crate::board::{Cell, Glyph, BANNER, BOARD_TEMPLATE, STATUS_COL, STATUS_ROW};
use crate::error::TermError;
use crate::message::UserMessage;
use crate::traits::Terminal;

/// Draws the board, glyphs and status messages on a [`Terminal`]
pub struct Renderer<T> {
    terminal: T,
}

impl<T: Terminal> Renderer<T> {
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_inner(self) -> T {
        self.terminal
    }

    /// Print the startup instructions, switch the terminal to raw output
    /// and hide the cursor
    pub fn write_banner(&mut self) -> Result<(), TermError> {
        self.terminal.write_str(BANNER)?;
        self.terminal.set_passthrough()?;
        self.terminal.write(CURSOR_HIDE)
    }

    /// Black background, yellow text, cleared screen, cursor home
    pub fn configure_screen(&mut self) -> Result<(), TermError> {
        self.terminal.write(BG_BLACK)?;
        self.terminal.write(FG_YELLOW)?;
        self.terminal.write(CLEAR_SCREEN)?;
        self.terminal.write(CURSOR_HOME)
    }

    /// Draw the empty board template from the current cursor position
    pub fn draw_board(&mut self) -> Result<(), TermError> {
        self.terminal.write_str(BOARD_TEMPLATE)
    }

    /// Draw a glyph at a raw cell index
    ///
    /// Indices outside 0..=8 are rejected before anything is written.
    pub fn write_cell(&mut self, index: u8, glyph: Glyph) -> Result<(), TermError> {
        let cell = Cell::new(index)?;
        self.draw_glyph(cell, glyph)
    }

    /// Draw a glyph at a cell
    pub fn draw_glyph(&mut self, cell: Cell, glyph: Glyph) -> Result<(), TermError> {
        let pos = cell.position();

        self.terminal.write(SGR_RESET)?;
        self.terminal.write(BG_BLACK)?;
        self.terminal.write(SGR_BOLD)?;
        self.terminal.write(glyph.color())?;
        self.terminal.write(&cursor_position(pos.row, pos.col))?;
        self.terminal.write(&[glyph.as_byte()])
    }

    /// Draw a status message, reverse video on blue, across the status row
    pub fn write_user_message(&mut self, message: UserMessage) -> Result<(), TermError> {
        self.terminal.write(&cursor_position(STATUS_ROW, STATUS_COL))?;
        self.terminal.write(SGR_RESET)?;
        self.terminal.write(FG_BLUE)?;
        self.terminal.write(SGR_REVERSE)?;
        if message.blinks() {
            self.terminal.write(SGR_BLINK)?;
        }
        self.terminal.write_str(message.text())
    }

    /// Wait for everything drawn so far to reach the terminal
    pub fn flush(&mut self) -> Result<(), TermError> {
        self.terminal.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CELL_COLS, CELL_ROWS};
    use crate::testing::CaptureTerminal;
    use proptest::prelude::*;

    fn renderer() -> Renderer<CaptureTerminal> {
        Renderer::new(CaptureTerminal::default())
    }

    #[test]
    fn test_write_cell_x() {
        let mut r = renderer();
        r.write_cell(0, Glyph::X).unwrap();
        assert_eq!(
            r.terminal().bytes.as_slice(),
            b"\x1b[0m\x1b[40m\x1b[1m\x1b[32m\x1b[2;3HX"
        );
    }

    #[test]
    fn test_write_cell_o() {
        let mut r = renderer();
        r.write_cell(8, Glyph::O).unwrap();
        assert_eq!(
            r.terminal().bytes.as_slice(),
            b"\x1b[0m\x1b[40m\x1b[1m\x1b[31m\x1b[10;15HO"
        );
    }

    #[test]
    fn test_write_cell_rejects_out_of_range() {
        let mut r = renderer();
        assert_eq!(r.write_cell(9, Glyph::X), Err(TermError::InvalidCell(9)));
        assert!(r.terminal().bytes.is_empty());
    }

    #[test]
    fn test_remote_move_message() {
        let mut r = renderer();
        r.write_user_message(UserMessage::RemoteMove).unwrap();
        assert_eq!(
            r.terminal().bytes.as_slice(),
            b"\x1b[12;1H\x1b[0m\x1b[34m\x1b[7m    THEIR TURN   "
        );
    }

    #[test]
    fn test_only_local_move_blinks() {
        for message in UserMessage::ALL {
            let mut r = renderer();
            r.write_user_message(message).unwrap();
            assert_eq!(r.terminal().contains(SGR_BLINK), message.blinks());
            assert!(r.terminal().bytes.ends_with(message.text().as_bytes()));
        }
    }

    #[test]
    fn test_banner_hides_cursor_and_sets_passthrough() {
        let mut r = renderer();
        r.write_banner().unwrap();
        let term = r.into_inner();
        assert!(term.passthrough);
        assert!(term.bytes.starts_with(b"### TIC-TAC-TOE ###"));
        assert!(term.bytes.ends_with(b"\x1b[?25l"));
    }

    #[test]
    fn test_configure_screen_sequence() {
        let mut r = renderer();
        r.configure_screen().unwrap();
        assert_eq!(
            r.terminal().bytes.as_slice(),
            b"\x1b[40m\x1b[33m\x1b[2J\x1b[H"
        );
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut r = Renderer::new(CaptureTerminal {
            broken: true,
            ..Default::default()
        });
        assert_eq!(r.draw_board(), Err(TermError::Transport));
        assert_eq!(
            r.write_user_message(UserMessage::Waiting),
            Err(TermError::Transport)
        );
    }

    proptest! {
        #[test]
        fn prop_write_cell_positions(index in 0u8..9, x in any::<bool>()) {
            let glyph = if x { Glyph::X } else { Glyph::O };
            let mut r = renderer();
            r.write_cell(index, glyph).unwrap();

            let row = CELL_ROWS[(index / 3) as usize];
            let col = CELL_COLS[(index % 3) as usize];
            let cup = cursor_position(row, col);
            let term = r.terminal();
            prop_assert!(term.contains(&cup));
            prop_assert!(term.contains(glyph.color()));
            prop_assert_eq!(*term.bytes.last().unwrap(), glyph.as_byte());
        }

        #[test]
        fn prop_write_cell_is_idempotent(index in 0u8..9, x in any::<bool>()) {
            let glyph = if x { Glyph::X } else { Glyph::O };
            let mut r = renderer();
            r.write_cell(index, glyph).unwrap();
            let first = r.terminal_mut().take();
            r.write_cell(index, glyph).unwrap();
            prop_assert_eq!(first, r.terminal_mut().take());
        }

        #[test]
        fn prop_write_cell_rejects(index in 9u8..=255) {
            let mut r = renderer();
            prop_assert_eq!(r.write_cell(index, Glyph::O), Err(TermError::InvalidCell(index)));
            prop_assert!(r.terminal().bytes.is_empty());
        }
    }
}
