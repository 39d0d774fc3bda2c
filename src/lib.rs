//! Multiplexed 7-segment seconds counter
//!
//! Portable core of the firmware: the counter arithmetic, the glyph and
//! digit-select tables and the display multiplexer. Nothing in here touches
//! the RP2350 directly, so the whole library is unit tested on the host.
//!
//! # Components
//! - [`counter::CounterEngine`]: advances the displayed digits once every
//!   [`config::TRIGGER`] count-timer ticks
//! - [`multiplexer::DisplayMultiplexer`]: lights one digit position per
//!   display-timer tick
//!
//! The two share nothing but a [`digits::SharedDigits`] cell.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod counter;
pub mod digits;
pub mod glyph;
pub mod multiplexer;
pub mod port;
