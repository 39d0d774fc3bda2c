//! Segment counter firmware entry point
//!
//! Starts the two periodic jobs, each on its own interrupt executor, and
//! leaves the thread executor idle.

#![no_std]
#![no_main]

use crate::system::interrupts::{start_count_executor, start_display_executor};
use crate::task::{count::count, display_refresh::display_refresh};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use segment_counter::digits::SharedDigits;
use system::resources::{AssignedResources, DisplayResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Hardware wiring
mod system;
/// Periodic jobs
mod task;

/// Digits on the display, written by the counter and read by the refresh
static DIGITS: SharedDigits = SharedDigits::new();

/// Firmware entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // Display first, so the blanked display is driven before counting starts
    let display_spawner = start_display_executor();
    display_spawner
        .spawn(display_refresh(r.display, &DIGITS))
        .unwrap();

    let count_spawner = start_count_executor();
    count_spawner.spawn(count(&DIGITS)).unwrap();

    info!("Segment counter started");
    // Returning leaves the thread executor idling until the next interrupt
}
