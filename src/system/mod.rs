//! Hardware wiring of the firmware
pub mod interrupts;
pub mod resources;
