//! Daily work-order dispatching engine.
//!
//! Assigns production work orders to a machine pool across calendar
//! days under a fixed per-machine daily time budget, with optional
//! category interleaving and priority ordering, and estimates the
//! days or machines needed to clear a target volume.
//!
//! # Modules
//!
//! - **`models`**: Domain types: [`Job`](models::Job),
//!   [`Machine`](models::Machine), [`Assignment`](models::Assignment),
//!   [`UnassignedJob`](models::UnassignedJob),
//!   [`DispatchPlan`](models::DispatchPlan)
//! - **`ordering`**: Pre-allocation job ordering: category
//!   interleaving and [`PriorityList`](ordering::PriorityList) ranking
//! - **`partition`**: Site detection and per-site splitting of jobs
//!   and machines
//! - **`scheduler`**: The day-by-day first-fit allocator, run driver,
//!   and machine-usage aggregation
//! - **`estimate`**: Days-to-complete and required-machines forecasts
//! - **`validation`**: Structural input checks for callers that want
//!   to fail fast
//!
//! # Design
//!
//! Every operation is a pure, synchronous, in-memory transformation:
//! no I/O, no clock reads, no randomness. Given the same inputs in
//! the same order, a run produces an identical plan. Allocation is
//! first-fit over a fixed machine order; capacity budgets reset at
//! every day boundary, so days (and sites within a day) are
//! independent computations.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Johnson (1973), "Near-Optimal Bin Packing Algorithms"

pub mod error;
pub mod estimate;
pub mod models;
pub mod ordering;
pub mod partition;
pub mod scheduler;
pub mod validation;
