//! Display multiplexer
//!
//! Four digit positions share one segment port. Each display-timer tick
//! lights exactly one position with its glyph and moves on to the next;
//! cycling fast enough makes all four appear lit at once.

use crate::config::DIGIT_COUNT;
use crate::digits::SharedDigits;
use crate::glyph::{glyph_for_ascii, SegmentPolarity, BLANK, DESELECT_ALL, DIGIT_SELECT};
use crate::port::{DigitSelect, SegmentPort};

/// Renders one digit position per [`tick`](Self::tick)
pub struct DisplayMultiplexer<'a, P, S> {
    digits: &'a SharedDigits,
    segments: P,
    selects: S,
    polarity: SegmentPolarity,
    /// Next position to light, always below [`DIGIT_COUNT`]
    cursor: usize,
}

impl<'a, P, S> DisplayMultiplexer<'a, P, S>
where
    P: SegmentPort,
    S: DigitSelect,
{
    /// Takes over the outputs and blanks the display
    pub fn new(
        digits: &'a SharedDigits,
        segments: P,
        selects: S,
        polarity: SegmentPolarity,
    ) -> Self {
        let mut multiplexer = Self {
            digits,
            segments,
            selects,
            polarity,
            cursor: 0,
        };
        multiplexer.blank();
        multiplexer
    }

    /// Deselects every position and turns all segments off
    pub fn blank(&mut self) {
        self.selects.select(&DESELECT_ALL);
        self.segments.write(self.polarity.apply(BLANK));
    }

    /// Lights the position under the cursor and advances it.
    ///
    /// Returns the position that was lit.
    pub fn tick(&mut self) -> usize {
        let position = self.cursor;

        self.selects.select(&DIGIT_SELECT[position]);

        let pattern = glyph_for_ascii(self.digits.digit(position)).unwrap_or(BLANK);
        self.segments.write(self.polarity.apply(pattern));

        self.cursor = (position + 1) % DIGIT_COUNT;
        position
    }

    /// Position the next tick will light
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gives the outputs back
    pub fn release(self) -> (P, S) {
        (self.segments, self.selects)
    }
}
