//! Interrupt-driven executors
//!
//! Each periodic job gets its own software interrupt and executor, so the
//! display refresh preempts the counter and both preempt the idle thread
//! executor in `main`.
//!
//! | Source          | IRQ       | Priority |
//! |-----------------|-----------|----------|
//! | Display refresh | SWI_IRQ_1 | P1       |
//! | Counter tick    | SWI_IRQ_0 | P2       |
//!
//! Lower priority numbers preempt higher ones. Neither job ever runs
//! longer than its own period, so a source never overlaps itself.

use embassy_executor::{InterruptExecutor, SendSpawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};

/// Executor for the display refresh task
static DISPLAY_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

/// Executor for the counter task
static COUNT_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

/// Display refresh priority, above the counter so the refresh never stalls
const DISPLAY_PRIORITY: Priority = Priority::P1;

/// Counter tick priority
const COUNT_PRIORITY: Priority = Priority::P2;

#[interrupt]
unsafe fn SWI_IRQ_1() {
    DISPLAY_EXECUTOR.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    COUNT_EXECUTOR.on_interrupt()
}

/// Sets the display interrupt priority, enables it and returns its spawner.
///
/// Must be called once, from `main`.
pub fn start_display_executor() -> SendSpawner {
    interrupt::SWI_IRQ_1.set_priority(DISPLAY_PRIORITY);
    DISPLAY_EXECUTOR.start(interrupt::SWI_IRQ_1)
}

/// Sets the counter interrupt priority, enables it and returns its spawner.
///
/// Must be called once, from `main`.
pub fn start_count_executor() -> SendSpawner {
    interrupt::SWI_IRQ_0.set_priority(COUNT_PRIORITY);
    COUNT_EXECUTOR.start(interrupt::SWI_IRQ_0)
}
