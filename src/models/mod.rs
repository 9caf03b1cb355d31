//! Dispatching domain models.
//!
//! Core data types for work-order dispatching: the inputs ([`Job`],
//! [`Machine`]) and the outcome records ([`Assignment`],
//! [`UnassignedJob`], [`DispatchPlan`]). Inputs are immutable for the
//! duration of a run; outcome records are created fresh by every run
//! and have no life beyond the caller's consumption of the result.

mod job;
mod machine;
mod plan;

pub use job::{processing_seconds, Job};
pub use machine::{Machine, DAILY_CAPACITY_SECS};
pub use plan::{Assignment, DispatchPlan, UnassignedJob};
