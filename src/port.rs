//! Display outputs
//!
//! The multiplexer drives two kinds of output: the shared 8-line segment
//! port and the digit-select lines. Both are implemented for arrays of
//! [`OutputPin`]s whose writes cannot fail, which is what the RP2350 GPIO
//! gives us.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::DIGIT_COUNT;

/// Shared segment output, one line per segment
pub trait SegmentPort {
    /// Puts `pattern` on the port, bit 7 is segment A, bit 0 the decimal point
    fn write(&mut self, pattern: u8);
}

/// Digit-select outputs, one line per digit position
pub trait DigitSelect {
    /// Drives every select line to the given level
    fn select(&mut self, levels: &[PinState; DIGIT_COUNT]);
}

/// Pins in segment order A, B, C, D, E, F, G, DP
impl<P> SegmentPort for [P; 8]
where
    P: OutputPin<Error = Infallible>,
{
    fn write(&mut self, pattern: u8) {
        for (bit, pin) in self.iter_mut().enumerate() {
            drive(pin, PinState::from(pattern & (0x80 >> bit) != 0));
        }
    }
}

/// Pins in digit order, most significant position first
impl<P> DigitSelect for [P; DIGIT_COUNT]
where
    P: OutputPin<Error = Infallible>,
{
    fn select(&mut self, levels: &[PinState; DIGIT_COUNT]) {
        for (pin, level) in self.iter_mut().zip(levels) {
            drive(pin, *level);
        }
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, state: PinState) {
    match pin.set_state(state) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
