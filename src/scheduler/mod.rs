//! Day-by-day allocation engine.
//!
//! `first_fit` places one day's jobs for one site, `dispatcher`
//! drives the day loop over a whole request, and `usage` aggregates
//! which machines ran on which days.
//!
//! # Algorithm
//!
//! Allocation is greedy first-fit over a fixed machine order. It is
//! not optimal; it trades schedule quality for determinism and a
//! single linear scan per job.

mod dispatcher;
mod first_fit;
mod usage;

pub use dispatcher::{DispatchOutcome, DispatchRequest, Dispatcher};
pub use first_fit::{allocate_day, DayAllocation};
pub use usage::MachineUsage;
