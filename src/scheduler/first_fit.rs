//! Per-day first-fit allocation.
//!
//! The central allocation step: one ordered job list for one site and
//! one calendar day is placed onto that site's machines. Each machine
//! starts the day with a full 86,400-second budget; every job goes to
//! the first machine, in pool order, with enough remaining capacity.
//! There is no best-fit search and no balancing between machines.
//!
//! # Reference
//! Johnson (1973), "Near-Optimal Bin Packing Algorithms", Ch. 3
//! (first-fit placement).

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::trace;

use crate::models::{Assignment, Job, Machine, UnassignedJob, DAILY_CAPACITY_SECS};

/// Result of allocating one day for one site.
#[derive(Debug, Clone, Default)]
pub struct DayAllocation {
    /// Jobs placed on a machine, in input order.
    pub assignments: Vec<Assignment>,
    /// Machines that received at least one job, in pool order.
    pub used_machines: Vec<String>,
    /// Jobs no machine could take, in input order.
    pub unassigned: Vec<UnassignedJob>,
}

/// Places one day's ordered jobs onto a machine pool.
///
/// Machines are scanned in pool order and capacity never goes
/// negative; a job that fits nowhere is recorded as unassigned and
/// leaves every capacity untouched. An empty pool yields an
/// all-unassigned result rather than an error.
pub fn allocate_day(jobs: &[Job], machines: &[Machine], day: NaiveDate) -> DayAllocation {
    // Remaining capacity as a positional table parallel to the pool:
    // pool order is the first-fit tie-break, so no map is involved.
    let mut remaining = vec![DAILY_CAPACITY_SECS; machines.len()];
    let mut used = vec![false; machines.len()];
    let midnight = day.and_time(NaiveTime::MIN);

    let mut allocation = DayAllocation::default();

    for job in jobs {
        let duration = job.processing_seconds();

        match remaining.iter().position(|&left| left >= duration) {
            Some(index) => {
                let start_secs = DAILY_CAPACITY_SECS - remaining[index];
                remaining[index] -= duration;
                used[index] = true;

                let start = midnight + Duration::seconds(start_secs);
                allocation.assignments.push(Assignment {
                    job: job.clone(),
                    machine_id: machines[index].id.clone(),
                    duration_secs: duration,
                    start,
                    end: start + Duration::seconds(duration),
                });
            }
            None => {
                trace!(job = %job.id, duration, "no machine with enough remaining capacity");
                allocation.unassigned.push(UnassignedJob { job: job.clone() });
            }
        }
    }

    allocation.used_machines = machines
        .iter()
        .zip(&used)
        .filter(|(_, &was_used)| was_used)
        .map(|(machine, _)| machine.id.clone())
        .collect();

    allocation
}
