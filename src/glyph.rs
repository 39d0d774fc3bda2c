//! 7-segment glyphs and digit selection
//!
//! Segment layout and bit assignment on the segment port:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD   DP
//!
//!   bit:  7 6 5 4 3 2 1 0
//!   seg:  A B C D E F G DP
//! ```

use embedded_hal::digital::PinState;

use crate::config::DIGIT_COUNT;

/// Segment bit masks
pub mod segment {
    /// Top horizontal
    pub const A: u8 = 0b1000_0000;
    /// Top right vertical
    pub const B: u8 = 0b0100_0000;
    /// Bottom right vertical
    pub const C: u8 = 0b0010_0000;
    /// Bottom horizontal
    pub const D: u8 = 0b0001_0000;
    /// Bottom left vertical
    pub const E: u8 = 0b0000_1000;
    /// Top left vertical
    pub const F: u8 = 0b0000_0100;
    /// Middle horizontal
    pub const G: u8 = 0b0000_0010;
    /// Decimal point
    pub const DP: u8 = 0b0000_0001;
}

/// All segments dark
pub const BLANK: u8 = 0x00;

/// Glyph for each decimal digit, indexed by digit value (segment lit = 1)
pub const GLYPHS: [u8; 10] = [
    0xFC, // 0
    0x60, // 1
    0xDA, // 2
    0xF2, // 3
    0x66, // 4
    0xB6, // 5
    0xBE, // 6
    0xE0, // 7
    0xFE, // 8
    0xF6, // 9
];

/// Select-line levels activating each digit position, row `i` lights
/// position `i` (most significant first). A digit is selected when its line
/// is low.
pub const DIGIT_SELECT: [[PinState; DIGIT_COUNT]; DIGIT_COUNT] = {
    use PinState::{High as H, Low as L};
    [
        [L, H, H, H],
        [H, L, H, H],
        [H, H, L, H],
        [H, H, H, L],
    ]
};

/// Select-line levels with no digit position active
pub const DESELECT_ALL: [PinState; DIGIT_COUNT] = [PinState::High; DIGIT_COUNT];

/// Glyph for a digit value, `None` above 9
pub fn glyph(digit: u8) -> Option<u8> {
    GLYPHS.get(usize::from(digit)).copied()
}

/// Glyph for an ASCII digit character, `None` outside `'0'..='9'`
pub fn glyph_for_ascii(character: u8) -> Option<u8> {
    glyph(character.checked_sub(b'0')?)
}

/// How a segment pattern maps to output levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum SegmentPolarity {
    /// Segment lit when its line is high (common cathode)
    ActiveHigh,
    /// Segment lit when its line is low (common anode)
    ActiveLow,
}

impl SegmentPolarity {
    /// Converts a glyph (segment lit = 1) into the port value for this wiring
    pub const fn apply(self, pattern: u8) -> u8 {
        match self {
            SegmentPolarity::ActiveHigh => pattern,
            SegmentPolarity::ActiveLow => !pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::segment::*;
    use super::*;

    #[test]
    fn glyph_is_direct_table_index() {
        for digit in 0..10u8 {
            assert_eq!(glyph(digit), Some(GLYPHS[usize::from(digit)]));
        }
        assert_eq!(glyph(10), None);
        assert_eq!(glyph(u8::MAX), None);
    }

    #[test]
    fn glyphs_match_segment_layout() {
        assert_eq!(glyph(0), Some(A | B | C | D | E | F));
        assert_eq!(glyph(1), Some(B | C));
        assert_eq!(glyph(4), Some(B | C | F | G));
        assert_eq!(glyph(7), Some(A | B | C));
        assert_eq!(glyph(8), Some(A | B | C | D | E | F | G));
        assert!(GLYPHS.iter().all(|g| g & DP == 0));
    }

    #[test]
    fn ascii_lookup_subtracts_base() {
        assert_eq!(glyph_for_ascii(b'0'), Some(0xFC));
        assert_eq!(glyph_for_ascii(b'9'), Some(0xF6));
        assert_eq!(glyph_for_ascii(b'/'), None);
        assert_eq!(glyph_for_ascii(b':'), None);
        assert_eq!(glyph_for_ascii(0), None);
    }

    #[test]
    fn each_select_row_is_one_hot_low() {
        for (position, row) in DIGIT_SELECT.iter().enumerate() {
            let low: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, level)| **level == PinState::Low)
                .map(|(line, _)| line)
                .collect();
            assert_eq!(low, [position]);
        }
        assert!(DESELECT_ALL.iter().all(|level| *level == PinState::High));
    }

    #[test]
    fn polarity_inverts_for_common_anode() {
        assert_eq!(SegmentPolarity::ActiveHigh.apply(0xFC), 0xFC);
        assert_eq!(SegmentPolarity::ActiveLow.apply(0xFC), 0x03);
        assert_eq!(SegmentPolarity::ActiveLow.apply(BLANK), 0xFF);
    }
}
