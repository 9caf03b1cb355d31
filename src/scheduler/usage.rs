//! Daily machine-usage aggregation.
//!
//! Folds a plan's assignments into a machine × day boolean matrix
//! recording which machines ran on which days. Rows are the machines
//! that received at least one assignment, sorted by id; columns are
//! every day named by the plan's jobs (assigned or not), ascending.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::DispatchPlan;

/// A machine × day usage matrix.
#[derive(Debug, Clone, Default)]
pub struct MachineUsage {
    machines: Vec<String>,
    days: Vec<NaiveDate>,
    used: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl MachineUsage {
    /// Builds the usage matrix for a finished plan.
    pub fn calculate(plan: &DispatchPlan) -> Self {
        let mut used: BTreeMap<String, BTreeSet<NaiveDate>> = BTreeMap::new();
        let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

        for assignment in &plan.assignments {
            days.insert(assignment.job.scheduled_day);
            used.entry(assignment.machine_id.clone())
                .or_default()
                .insert(assignment.job.scheduled_day);
        }
        for unassigned in &plan.unassigned {
            days.insert(unassigned.job.scheduled_day);
        }

        Self {
            machines: used.keys().cloned().collect(),
            days: days.into_iter().collect(),
            used,
        }
    }

    /// Machines with at least one assignment, sorted by id.
    pub fn machines(&self) -> &[String] {
        &self.machines
    }

    /// Every scheduled day in the plan, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Whether the machine received at least one assignment that day.
    pub fn was_used(&self, machine_id: &str, day: NaiveDate) -> bool {
        self.used
            .get(machine_id)
            .is_some_and(|days| days.contains(&day))
    }

    /// One matrix row: a flag per day, in [`days`](Self::days) order.
    pub fn row(&self, machine_id: &str) -> Vec<bool> {
        self.days
            .iter()
            .map(|day| self.was_used(machine_id, *day))
            .collect()
    }

    /// Whether no machine was used at all.
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Job, UnassignedJob};
    use chrono::NaiveTime;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn assignment(machine: &str, d: u32) -> Assignment {
        let midnight = day(d).and_time(NaiveTime::MIN);
        Assignment {
            job: Job::new("2A-01", day(d)),
            machine_id: machine.to_string(),
            duration_secs: 900,
            start: midnight,
            end: midnight + chrono::Duration::seconds(900),
        }
    }

    fn sample_plan() -> DispatchPlan {
        DispatchPlan {
            assignments: vec![
                assignment("M2", 1),
                assignment("M1", 1),
                assignment("M1", 2),
            ],
            unassigned: vec![UnassignedJob {
                job: Job::new("2A-09", day(3)),
            }],
        }
    }

    #[test]
    fn test_rows_sorted_and_flags_set() {
        let usage = MachineUsage::calculate(&sample_plan());
        assert_eq!(usage.machines(), ["M1".to_string(), "M2".to_string()]);
        assert!(usage.was_used("M1", day(1)));
        assert!(usage.was_used("M1", day(2)));
        assert!(usage.was_used("M2", day(1)));
        assert!(!usage.was_used("M2", day(2)));
        assert!(!usage.was_used("M9", day(1)));
    }

    #[test]
    fn test_unassigned_only_day_appears_as_column() {
        let usage = MachineUsage::calculate(&sample_plan());
        assert_eq!(usage.days(), [day(1), day(2), day(3)]);
        assert_eq!(usage.row("M1"), vec![true, true, false]);
        assert_eq!(usage.row("M2"), vec![true, false, false]);
    }

    #[test]
    fn test_empty_plan() {
        let usage = MachineUsage::calculate(&DispatchPlan::new());
        assert!(usage.is_empty());
        assert!(usage.days().is_empty());
    }
}
