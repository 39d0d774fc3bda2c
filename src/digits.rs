//! Displayed digits
//!
//! The counter value is kept as four ASCII digit characters, most
//! significant first, so each position can be read on its own by the
//! multiplexer. [`SharedDigits`] is the one cell both components see.

use core::cell::Cell;
use core::fmt;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

use crate::config::DIGIT_COUNT;

/// Largest value the display can show
pub const MAX_VALUE: u16 = 9_999;

/// Four decimal digit characters, each always in `'0'..='9'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits([u8; DIGIT_COUNT]);

impl Digits {
    /// `0000`
    pub const ZERO: Digits = Digits([b'0'; DIGIT_COUNT]);

    /// Builds digits from ASCII characters, `None` if any is not a decimal digit
    pub fn from_ascii(characters: [u8; DIGIT_COUNT]) -> Option<Self> {
        characters
            .iter()
            .all(u8::is_ascii_digit)
            .then_some(Digits(characters))
    }

    /// Builds digits from a number, `None` above [`MAX_VALUE`]
    pub fn from_value(value: u16) -> Option<Self> {
        if value > MAX_VALUE {
            return None;
        }
        let mut characters = [b'0'; DIGIT_COUNT];
        let mut rest = value;
        for place in characters.iter_mut().rev() {
            *place = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        Some(Digits(characters))
    }

    /// Numeric value of the digits
    pub fn value(&self) -> u16 {
        self.0
            .iter()
            .fold(0, |value, place| value * 10 + u16::from(place - b'0'))
    }

    /// The ASCII characters, most significant first
    pub fn as_bytes(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }

    /// Adds one, carrying from the ones place upwards.
    ///
    /// Returns `true` when the value wrapped from `9999` to `0000`.
    pub fn increment(&mut self) -> bool {
        for place in self.0.iter_mut().rev() {
            if *place < b'9' {
                *place += 1;
                return false;
            }
            *place = b'0';
        }
        // every place carried out, all four are back at '0'
        true
    }

    /// Sets all places to `'0'`
    pub fn reset_to_zero(&mut self) {
        *self = Digits::ZERO;
    }
}

impl Default for Digits {
    fn default() -> Self {
        Digits::ZERO
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for place in self.0 {
            write!(f, "{}", char::from(place))?;
        }
        Ok(())
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for Digits {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d] = self.0.map(char::from);
        defmt::write!(f, "{}{}{}{}", a, b, c, d);
    }
}

/// Digits shared between the counter (writer) and the display (reader).
///
/// Every access runs inside a critical section, so the display interrupt
/// can never observe a carry that is only half written.
pub struct SharedDigits {
    inner: Mutex<CriticalSectionRawMutex, Cell<Digits>>,
}

impl SharedDigits {
    /// Creates the cell holding `0000`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Digits::ZERO)),
        }
    }

    /// Snapshot of all four digits
    pub fn load(&self) -> Digits {
        self.inner.lock(Cell::get)
    }

    /// ASCII character at `position` (0 = most significant)
    ///
    /// # Panics
    /// If `position` is not below [`DIGIT_COUNT`].
    pub fn digit(&self, position: usize) -> u8 {
        self.load().0[position]
    }

    /// Read-modify-write of the digits as one atomic step.
    ///
    /// Crate private: only the counter engine writes.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut Digits) -> R) -> R {
        self.inner.lock(|cell| {
            let mut digits = cell.get();
            let result = f(&mut digits);
            cell.set(digits);
            result
        })
    }
}

impl Default for SharedDigits {
    fn default() -> Self {
        Self::new()
    }
}
