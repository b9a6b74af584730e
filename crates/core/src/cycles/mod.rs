//! Cycle calendar module - the biweekly commission accounting periods.

mod cycles_calendar;
mod cycles_model;

pub use cycles_calendar::CycleCalendar;
pub use cycles_model::CommissionCycle;
