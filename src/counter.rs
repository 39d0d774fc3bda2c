//! Counter engine
//!
//! Counts count-timer ticks and advances the displayed digits by one every
//! time the configured trigger is reached. With the default configuration
//! that is 20 ticks of 50ms, so the display counts seconds.

use core::num::NonZeroU8;

use crate::digits::{Digits, SharedDigits};

/// Outcome of a count-timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum TickOutcome {
    /// Still accumulating, holds the ticks seen so far
    Accumulating(u8),
    /// Trigger reached, the counter now shows this value
    Incremented(Digits),
    /// Trigger reached and the counter wrapped from 9999 to 0000
    Wrapped,
}

/// Sole writer of the displayed digits
pub struct CounterEngine<'a> {
    digits: &'a SharedDigits,
    trigger: NonZeroU8,
    /// Ticks since the last increment, always below `trigger`
    ticks: u8,
}

impl<'a> CounterEngine<'a> {
    /// Creates an engine advancing `digits` once every `trigger` ticks
    pub fn new(digits: &'a SharedDigits, trigger: NonZeroU8) -> Self {
        Self {
            digits,
            trigger,
            ticks: 0,
        }
    }

    /// Handles one count-timer tick
    pub fn on_tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        if self.ticks < self.trigger.get() {
            return TickOutcome::Accumulating(self.ticks);
        }

        self.ticks = 0;
        let (digits, wrapped) = self.increment_counter();
        if wrapped {
            TickOutcome::Wrapped
        } else {
            TickOutcome::Incremented(digits)
        }
    }

    /// Adds one to the displayed value with carry, `9999` wraps to `0000`.
    ///
    /// Returns the new digits and whether the value wrapped.
    pub fn increment_counter(&self) -> (Digits, bool) {
        self.digits.update(|digits| {
            let wrapped = digits.increment();
            (*digits, wrapped)
        })
    }

    /// Clears the display to `0000` and restarts the tick accumulation
    pub fn reset_to_zero(&mut self) {
        self.ticks = 0;
        self.digits.update(Digits::reset_to_zero);
    }

    /// Ticks accumulated since the last increment
    pub fn ticks(&self) -> u8 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TRIGGER;

    fn trigger(ticks: u8) -> NonZeroU8 {
        NonZeroU8::new(ticks).unwrap()
    }

    #[test]
    fn trigger_ticks_make_exactly_one_increment() {
        let digits = SharedDigits::new();
        let mut engine = CounterEngine::new(&digits, TRIGGER);

        for tick in 1..TRIGGER.get() {
            assert_eq!(engine.on_tick(), TickOutcome::Accumulating(tick));
            assert_eq!(digits.load(), Digits::ZERO);
        }

        let expected = Digits::from_value(1).unwrap();
        assert_eq!(engine.on_tick(), TickOutcome::Incremented(expected));
        assert_eq!(engine.ticks(), 0);
        assert_eq!(digits.load(), expected);
    }

    #[test]
    fn one_second_of_ticks_per_count() {
        let digits = SharedDigits::new();
        let mut engine = CounterEngine::new(&digits, TRIGGER);

        // 2 minutes 30 seconds worth of 50ms ticks
        let ticks = 150 * u32::from(TRIGGER.get());
        let increments = (0..ticks)
            .filter(|_| matches!(engine.on_tick(), TickOutcome::Incremented(_)))
            .count();

        assert_eq!(increments, 150);
        assert_eq!(digits.load().as_bytes(), b"0150");
    }

    #[test]
    fn trigger_of_one_increments_every_tick() {
        let digits = SharedDigits::new();
        let mut engine = CounterEngine::new(&digits, trigger(1));

        for expected in 1..=12u16 {
            assert_eq!(
                engine.on_tick(),
                TickOutcome::Incremented(Digits::from_value(expected).unwrap())
            );
        }
    }

    #[test]
    fn increment_carries_across_places() {
        let digits = SharedDigits::new();
        let engine = CounterEngine::new(&digits, TRIGGER);

        for _ in 0..99 {
            engine.increment_counter();
        }
        assert_eq!(digits.load().as_bytes(), b"0099");

        let (value, wrapped) = engine.increment_counter();
        assert_eq!(value.as_bytes(), b"0100");
        assert!(!wrapped);
    }

    #[test]
    fn wraps_after_9999() {
        let digits = SharedDigits::new();
        let mut engine = CounterEngine::new(&digits, trigger(2));

        for _ in 0..9_999 {
            engine.increment_counter();
        }
        assert_eq!(digits.load().as_bytes(), b"9999");

        assert_eq!(engine.on_tick(), TickOutcome::Accumulating(1));
        assert_eq!(engine.on_tick(), TickOutcome::Wrapped);
        assert_eq!(digits.load(), Digits::ZERO);
    }

    #[test]
    fn reset_clears_digits_and_ticks() {
        let digits = SharedDigits::new();
        let mut engine = CounterEngine::new(&digits, trigger(3));

        for _ in 0..1_000 {
            engine.on_tick();
        }
        assert_ne!(digits.load(), Digits::ZERO);
        assert_eq!(engine.ticks(), 1);

        engine.reset_to_zero();
        assert_eq!(digits.load().as_bytes(), b"0000");
        assert_eq!(engine.ticks(), 0);

        engine.reset_to_zero();
        assert_eq!(digits.load(), Digits::ZERO);
    }
}
