//! Compile-time configuration
//!
//! Timer periods, the increment trigger and the display wiring. All values
//! are checked against each other at compile time.

use core::num::NonZeroU8;

use crate::glyph::SegmentPolarity;

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Count-timer period (µs)
pub const COUNT_PERIOD_US: u64 = 50_000;

/// Count-timer ticks per counter increment (20 x 50ms = 1s)
pub const TRIGGER: NonZeroU8 = match NonZeroU8::new(20) {
    Some(trigger) => trigger,
    None => panic!("trigger must be non-zero"),
};

/// Time between two counter increments (µs)
pub const INCREMENT_PERIOD_US: u64 = COUNT_PERIOD_US * TRIGGER.get() as u64;

/// Display-timer period (µs), one digit position lit per period
pub const DISPLAY_PERIOD_US: u64 = 4_500;

/// Full refresh rate of the display, all positions once (Hz)
pub const REFRESH_RATE_HZ: u64 = 1_000_000 / (DISPLAY_PERIOD_US * DIGIT_COUNT as u64);

/// Lowest full refresh rate that does not flicker visibly (Hz)
pub const MIN_FLICKER_FREE_HZ: u64 = 50;

/// Segment drive polarity of the wired display (common cathode)
pub const SEGMENT_POLARITY: SegmentPolarity = SegmentPolarity::ActiveHigh;

const _: () = assert!(INCREMENT_PERIOD_US == 1_000_000, "counter must advance once per second");
const _: () = assert!(REFRESH_RATE_HZ >= MIN_FLICKER_FREE_HZ, "display refresh too slow");
const _: () = assert!(
    DISPLAY_PERIOD_US < COUNT_PERIOD_US,
    "display must refresh faster than the count timer ticks"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_advances_once_per_second() {
        assert_eq!(TRIGGER.get(), 20);
        assert_eq!(INCREMENT_PERIOD_US, 1_000_000);
    }

    #[test]
    fn refresh_rate_is_flicker_free() {
        // 4.5ms per digit, 18ms per frame
        assert_eq!(REFRESH_RATE_HZ, 55);
        assert!(REFRESH_RATE_HZ >= MIN_FLICKER_FREE_HZ);
    }
}
