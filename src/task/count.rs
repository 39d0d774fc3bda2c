//! Counter task
//!
//! Counts count-timer periods and advances the display once every
//! `TRIGGER` periods (20 x 50ms = 1s).

use defmt::{debug, info};
use embassy_time::{Duration, Ticker};
use segment_counter::config::{COUNT_PERIOD_US, TRIGGER};
use segment_counter::counter::{CounterEngine, TickOutcome};
use segment_counter::digits::SharedDigits;

/// Count-timer period
const COUNT_INTERVAL: Duration = Duration::from_micros(COUNT_PERIOD_US);

/// Advances the displayed counter once per second
#[embassy_executor::task]
pub async fn count(digits: &'static SharedDigits) {
    let mut engine = CounterEngine::new(digits, TRIGGER);

    // No persisted state, every power-up starts at 0000
    engine.reset_to_zero();
    info!(
        "Counter running: {} ticks of {}us per increment",
        TRIGGER.get(),
        COUNT_PERIOD_US
    );

    let mut ticker = Ticker::every(COUNT_INTERVAL);
    loop {
        ticker.next().await;
        match engine.on_tick() {
            TickOutcome::Accumulating(ticks) => debug!("Count tick {}", ticks),
            TickOutcome::Incremented(value) => info!("Count: {}", value),
            TickOutcome::Wrapped => info!("Count wrapped past 9999, back to 0000"),
        }
    }
}
