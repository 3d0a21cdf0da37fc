//! ANSI escape sequence constants and builders
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | `ESC [ row ; col H` | CUP (Cursor Position, 1-indexed) |
//! | `ESC [ 2 J` | ED (Erase Display) |
//! | `ESC [ H` | Cursor home |
//! | `ESC [ ? 25 l` | Hide cursor (DECTCEM) |

use heapless::Vec;

/// Escape byte that starts every control sequence
pub const ESC: u8 = 0x1b;

/// Control Sequence Introducer: `ESC [`
pub const CSI: &[u8] = b"\x1b[";

// SGR attributes
pub const SGR_RESET: &[u8] = b"\x1b[0m";
pub const SGR_BOLD: &[u8] = b"\x1b[1m";
pub const SGR_BLINK: &[u8] = b"\x1b[5m";
pub const SGR_REVERSE: &[u8] = b"\x1b[7m";

// SGR colors
pub const FG_RED: &[u8] = b"\x1b[31m";
pub const FG_GREEN: &[u8] = b"\x1b[32m";
pub const FG_YELLOW: &[u8] = b"\x1b[33m";
pub const FG_BLUE: &[u8] = b"\x1b[34m";
pub const BG_BLACK: &[u8] = b"\x1b[40m";

// Screen and cursor control
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Longest possible CUP sequence: `ESC [ 255 ; 255 H`
pub const MAX_CUP_LEN: usize = 2 + 3 + 1 + 3 + 1;

/// Encoded cursor position sequence
pub type CursorSequence = Vec<u8, MAX_CUP_LEN>;

/// Build `ESC [ row ; col H`
///
/// Coordinates are 1-based terminal character units and are written
/// without leading zeros.
pub fn cursor_position(row: u8, col: u8) -> CursorSequence {
    let mut buf = [0u8; MAX_CUP_LEN];
    buf[..2].copy_from_slice(CSI);
    let mut len = 2;
    len += write_u8_dec(&mut buf[len..], row);
    buf[len] = b';';
    len += 1;
    len += write_u8_dec(&mut buf[len..], col);
    buf[len] = b'H';
    len += 1;

    let mut seq = Vec::new();
    // Cannot overflow: `len` is bounded by MAX_CUP_LEN
    let _ = seq.extend_from_slice(&buf[..len]);
    seq
}

/// Write `n` as decimal ASCII, returning the number of digits written
fn write_u8_dec(buf: &mut [u8], n: u8) -> usize {
    if n >= 100 {
        buf[0] = b'0' + n / 100;
        buf[1] = b'0' + (n / 10) % 10;
        buf[2] = b'0' + n % 10;
        3
    } else if n >= 10 {
        buf[0] = b'0' + n / 10;
        buf[1] = b'0' + n % 10;
        2
    } else {
        buf[0] = b'0' + n;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_position_board_cells() {
        assert_eq!(cursor_position(2, 3).as_slice(), b"\x1b[2;3H");
        assert_eq!(cursor_position(6, 9).as_slice(), b"\x1b[6;9H");
        assert_eq!(cursor_position(10, 15).as_slice(), b"\x1b[10;15H");
    }

    #[test]
    fn test_cursor_position_status_row() {
        assert_eq!(cursor_position(12, 1).as_slice(), b"\x1b[12;1H");
    }

    #[test]
    fn test_cursor_position_max_len() {
        let seq = cursor_position(255, 255);
        assert_eq!(seq.as_slice(), b"\x1b[255;255H");
        assert_eq!(seq.len(), MAX_CUP_LEN);
    }

    #[test]
    fn test_sgr_constants_are_well_formed() {
        for seq in [
            SGR_RESET, SGR_BOLD, SGR_BLINK, SGR_REVERSE, FG_RED, FG_GREEN, FG_YELLOW, FG_BLUE,
            BG_BLACK,
        ] {
            assert_eq!(seq[0], ESC);
            assert_eq!(seq[1], b'[');
            assert_eq!(*seq.last().unwrap(), b'm');
        }
    }

    proptest! {
        #[test]
        fn prop_cursor_position_parses_back(row in any::<u8>(), col in any::<u8>()) {
            let seq = cursor_position(row, col);
            let text = core::str::from_utf8(&seq[2..seq.len() - 1]).unwrap();
            let (r, c) = text.split_once(';').unwrap();
            prop_assert_eq!(r.parse::<u8>().unwrap(), row);
            prop_assert_eq!(c.parse::<u8>().unwrap(), col);
            prop_assert_eq!(seq[seq.len() - 1], b'H');
        }
    }
}
