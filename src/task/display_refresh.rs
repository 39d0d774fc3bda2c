//! Display refresh task
//!
//! Drives the multiplexed display from the display-timer period: every
//! 4.5ms one digit position is lit, a full pass over the four positions
//! takes 18ms (55Hz), fast enough that no flicker is visible.
//!
//! The ticker re-arms itself for the next period on every `next()`, so a
//! slow iteration never shifts the refresh grid.

use defmt::{info, trace};
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Ticker};
use segment_counter::config::{DISPLAY_PERIOD_US, REFRESH_RATE_HZ, SEGMENT_POLARITY};
use segment_counter::digits::SharedDigits;
use segment_counter::multiplexer::DisplayMultiplexer;

use crate::system::resources::DisplayResources;

/// Display refresh period
const REFRESH_INTERVAL: Duration = Duration::from_micros(DISPLAY_PERIOD_US);

/// Lights one digit position per display-timer period
#[embassy_executor::task]
pub async fn display_refresh(r: DisplayResources, digits: &'static SharedDigits) {
    // Select lines start high so no position is lit before the first tick
    let segments = [
        Output::new(r.seg_a, Level::Low),
        Output::new(r.seg_b, Level::Low),
        Output::new(r.seg_c, Level::Low),
        Output::new(r.seg_d, Level::Low),
        Output::new(r.seg_e, Level::Low),
        Output::new(r.seg_f, Level::Low),
        Output::new(r.seg_g, Level::Low),
        Output::new(r.seg_dp, Level::Low),
    ];
    let selects = [
        Output::new(r.select_1, Level::High),
        Output::new(r.select_2, Level::High),
        Output::new(r.select_3, Level::High),
        Output::new(r.select_4, Level::High),
    ];

    let mut multiplexer = DisplayMultiplexer::new(digits, segments, selects, SEGMENT_POLARITY);
    info!(
        "Display refresh running: {}us per digit, {}Hz, {:?}",
        DISPLAY_PERIOD_US, REFRESH_RATE_HZ, SEGMENT_POLARITY
    );

    let mut ticker = Ticker::every(REFRESH_INTERVAL);
    loop {
        ticker.next().await;
        let position = multiplexer.tick();
        trace!("Refreshed digit {}", position);
    }
}
