//! Hardware Resource Management
//!
//! Assigns the display pins to the task that drives them. The counter needs
//! no pins of its own: it only talks to the display through the shared
//! digits.
//!
//! # Wiring
//! - Segment port: PIN_2..PIN_9 carry segments A..G and the decimal point
//! - Digit select: PIN_10..PIN_13 select positions 1..4 (active low)

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Multiplexed 4-digit 7-segment display
    display: DisplayResources {
        // Shared segment port, lit = high
        seg_a: PIN_2,
        seg_b: PIN_3,
        seg_c: PIN_4,
        seg_d: PIN_5,
        seg_e: PIN_6,
        seg_f: PIN_7,
        seg_g: PIN_8,
        seg_dp: PIN_9,
        // Digit select lines, most significant position first
        select_1: PIN_10,
        select_2: PIN_11,
        select_3: PIN_12,
        select_4: PIN_13,
    },
}
