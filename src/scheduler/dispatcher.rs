//! Run-level dispatch driver.
//!
//! Walks the scheduled days in ascending order and, within each day,
//! allocates each site independently: site partitioning → per-day job
//! grouping → ordering → first-fit allocation. Capacity estimates are
//! computed from the same request when their inputs are present.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::DispatchResult;
use crate::estimate::{DaysEstimate, MachineEstimate};
use crate::models::{DispatchPlan, Job, Machine, UnassignedJob};
use crate::ordering::{self, PriorityList};
use crate::partition::{partition, SiteCodes, SitePartition};

use super::first_fit::allocate_day;
use super::usage::MachineUsage;

/// Input container for a full dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// Work orders to place.
    pub jobs: Vec<Job>,
    /// Machine pool, in scan order.
    pub machines: Vec<Machine>,
    /// Lump quantity for capacity estimation, when requested.
    pub target_quantity: Option<i64>,
    /// Machine count for the days-to-complete estimate.
    pub estimate_machine_count: Option<i64>,
    /// Day count for the required-machines estimate.
    pub estimate_target_days: Option<i64>,
}

impl DispatchRequest {
    /// Creates a request without estimate inputs.
    pub fn new(jobs: Vec<Job>, machines: Vec<Machine>) -> Self {
        Self {
            jobs,
            machines,
            target_quantity: None,
            estimate_machine_count: None,
            estimate_target_days: None,
        }
    }

    /// Sets the lump quantity both estimate modes work from.
    pub fn with_target_quantity(mut self, quantity: i64) -> Self {
        self.target_quantity = Some(quantity);
        self
    }

    /// Requests the days-to-complete estimate for a machine count.
    pub fn with_estimate_machine_count(mut self, count: i64) -> Self {
        self.estimate_machine_count = Some(count);
        self
    }

    /// Requests the required-machines estimate for a day budget.
    pub fn with_estimate_target_days(mut self, days: i64) -> Self {
        self.estimate_target_days = Some(days);
        self
    }
}

/// Complete output of [`Dispatcher::run`].
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Assignments and unassigned jobs for every day.
    pub plan: DispatchPlan,
    /// Machine × day usage matrix.
    pub usage: MachineUsage,
    /// Days-to-complete estimate, when its inputs were supplied and valid.
    pub days_estimate: Option<DaysEstimate>,
    /// Required-machines estimate, when its inputs were supplied and valid.
    pub machine_estimate: Option<MachineEstimate>,
}

/// Greedy day-by-day dispatcher.
///
/// Within each day each site is allocated on its own machine pool
/// with a fresh capacity budget; nothing carries over between days or
/// sites, so repeated runs over the same input produce identical
/// plans.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use order_dispatch::models::{Job, Machine};
/// use order_dispatch::scheduler::Dispatcher;
///
/// let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let jobs = vec![Job::new("2A-0001", day).with_category("G01").with_quantity(250.0)];
/// let machines = vec![Machine::new("M1")];
///
/// let plan = Dispatcher::new().dispatch(&jobs, &machines).unwrap();
/// assert_eq!(plan.assignment_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    site_codes: SiteCodes,
    interleave: bool,
    priority: Option<PriorityList>,
}

impl Dispatcher {
    /// Creates a dispatcher with default site codes and no reordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pair of recognized site codes.
    pub fn with_site_codes(mut self, codes: SiteCodes) -> Self {
        self.site_codes = codes;
        self
    }

    /// Enables or disables category interleaving of each day's jobs.
    pub fn with_interleaving(mut self, enabled: bool) -> Self {
        self.interleave = enabled;
        self
    }

    /// Enables priority ordering by the given category list.
    pub fn with_priority_list(mut self, priority: PriorityList) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Dispatches all jobs onto the machine pool, day by day.
    ///
    /// Fails only on site-tagging configuration errors, before any
    /// allocation has been performed.
    pub fn dispatch(&self, jobs: &[Job], machines: &[Machine]) -> DispatchResult<DispatchPlan> {
        let SitePartition {
            first,
            second,
            unrecognized,
        } = partition(jobs, machines, &self.site_codes)?;

        let mut pools = [
            (first.code, first.machines, group_by_day(first.jobs)),
            (second.code, second.machines, group_by_day(second.jobs)),
        ];
        let mut stray = group_by_day(unrecognized);

        let mut days: BTreeSet<NaiveDate> = stray.keys().copied().collect();
        for (_, _, by_day) in &pools {
            days.extend(by_day.keys().copied());
        }

        let mut plan = DispatchPlan::new();

        for day in days {
            for (code, pool, by_day) in &mut pools {
                let Some(day_jobs) = by_day.remove(&day) else {
                    continue;
                };
                let ordered = self.order_jobs(day_jobs);
                let allocation = allocate_day(&ordered, pool.as_slice(), day);

                debug!(
                    site = %code,
                    %day,
                    assigned = allocation.assignments.len(),
                    machines_used = allocation.used_machines.len(),
                    "day allocated"
                );
                if !allocation.unassigned.is_empty() {
                    warn!(
                        site = %code,
                        %day,
                        count = allocation.unassigned.len(),
                        "jobs left unassigned"
                    );
                }

                plan.assignments.extend(allocation.assignments);
                plan.unassigned.extend(allocation.unassigned);
            }

            if let Some(day_stray) = stray.remove(&day) {
                warn!(
                    %day,
                    count = day_stray.len(),
                    "jobs with unrecognized site code left unassigned"
                );
                plan.unassigned
                    .extend(day_stray.into_iter().map(|job| UnassignedJob { job }));
            }
        }

        Ok(plan)
    }

    /// Runs a full request: allocation, usage matrix, and any
    /// requested capacity estimates.
    ///
    /// An estimate mode with missing inputs is skipped; one with
    /// invalid inputs is reported and omitted without affecting the
    /// allocation or the other mode.
    pub fn run(&self, request: &DispatchRequest) -> DispatchResult<DispatchOutcome> {
        let plan = self.dispatch(&request.jobs, &request.machines)?;
        let usage = MachineUsage::calculate(&plan);

        let days_estimate = match (request.target_quantity, request.estimate_machine_count) {
            (Some(quantity), Some(count)) => match DaysEstimate::calculate(quantity, count) {
                Ok(estimate) => Some(estimate),
                Err(error) => {
                    warn!(%error, "days-to-complete estimate skipped");
                    None
                }
            },
            _ => None,
        };

        let machine_estimate = match (request.target_quantity, request.estimate_target_days) {
            (Some(quantity), Some(days)) => {
                let current = request.machines.len() as i64;
                match MachineEstimate::calculate(quantity, days, current) {
                    Ok(estimate) => Some(estimate),
                    Err(error) => {
                        warn!(%error, "required-machines estimate skipped");
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(DispatchOutcome {
            plan,
            usage,
            days_estimate,
            machine_estimate,
        })
    }

    fn order_jobs(&self, jobs: Vec<Job>) -> Vec<Job> {
        let mut jobs = if self.interleave {
            ordering::interleave_by_category(jobs)
        } else {
            jobs
        };
        if let Some(priority) = &self.priority {
            ordering::sort_by_priority(&mut jobs, priority);
        }
        jobs
    }
}

fn group_by_day(jobs: Vec<Job>) -> BTreeMap<NaiveDate, Vec<Job>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Job>> = BTreeMap::new();
    for job in jobs {
        by_day.entry(job.scheduled_day).or_default().push(job);
    }
    by_day
}
