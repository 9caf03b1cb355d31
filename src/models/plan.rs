//! Dispatch plan (solution) model.
//!
//! A plan is the complete outcome of a dispatch run. Every input job
//! appears in it exactly once, either as an [`Assignment`] or as an
//! [`UnassignedJob`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::machine::DAILY_CAPACITY_SECS;
use super::Job;

/// A job placed on a machine for a specific time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// The source job, unchanged.
    pub job: Job,
    /// Identifier of the machine the job runs on.
    pub machine_id: String,
    /// Processing duration, in seconds.
    pub duration_secs: i64,
    /// Start of the processing window.
    pub start: NaiveDateTime,
    /// End of the processing window.
    pub end: NaiveDateTime,
}

/// A job no machine could take on its scheduled day.
///
/// Carries no duration and no machine; the job is reported back to the
/// caller as-is rather than deferred to a later day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnassignedJob {
    /// The source job, unchanged.
    pub job: Job,
}

/// A complete dispatch outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// Jobs placed on machines, in allocation order.
    pub assignments: Vec<Assignment>,
    /// Jobs that found no machine on their scheduled day.
    pub unassigned: Vec<UnassignedJob>,
}

impl DispatchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed jobs.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of jobs that found no machine.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Total number of jobs accounted for by this plan.
    pub fn job_count(&self) -> usize {
        self.assignments.len() + self.unassigned.len()
    }

    /// Whether every job was placed.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Assignments for one machine, ordered by day then start time.
    pub fn assignments_for_machine(&self, machine_id: &str) -> Vec<&Assignment> {
        let mut rows: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .collect();
        rows.sort_by_key(|a| (a.job.scheduled_day, a.start));
        rows
    }

    /// Assignments on one calendar day, in allocation order.
    pub fn assignments_on_day(&self, day: NaiveDate) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.job.scheduled_day == day)
            .collect()
    }

    /// Seconds of work placed on a machine for one day.
    pub fn busy_seconds(&self, machine_id: &str, day: NaiveDate) -> i64 {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id && a.job.scheduled_day == day)
            .map(|a| a.duration_secs)
            .sum()
    }

    /// Fraction of a machine's daily budget consumed on one day.
    pub fn utilization(&self, machine_id: &str, day: NaiveDate) -> f64 {
        self.busy_seconds(machine_id, day) as f64 / DAILY_CAPACITY_SECS as f64
    }

    /// Every calendar day named by the plan's jobs, ascending.
    ///
    /// Days whose jobs all went unassigned are included.
    pub fn scheduled_days(&self) -> Vec<NaiveDate> {
        let days: BTreeSet<NaiveDate> = self
            .assignments
            .iter()
            .map(|a| a.job.scheduled_day)
            .chain(self.unassigned.iter().map(|u| u.job.scheduled_day))
            .collect();
        days.into_iter().collect()
    }

    /// Machines holding at least one assignment, sorted by id.
    pub fn machines_used(&self) -> Vec<String> {
        let ids: BTreeSet<&str> = self
            .assignments
            .iter()
            .map(|a| a.machine_id.as_str())
            .collect();
        ids.into_iter().map(str::to_owned).collect()
    }
}
