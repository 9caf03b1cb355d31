//! Site partitioning.
//!
//! Splits a job list and a machine pool into disjoint per-site
//! subsets. Sites are identified by a fixed pair of two-character
//! codes carried as the prefix of each job id; a machine is matched
//! to a site when its free-text tag contains the site code.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Job, Machine};

/// The two site codes recognized by a dispatch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCodes {
    /// Code of the first site.
    pub first: String,
    /// Code of the second site.
    pub second: String,
}

impl Default for SiteCodes {
    fn default() -> Self {
        Self::new("2A", "2B")
    }
}

impl SiteCodes {
    /// Creates a site-code pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Jobs and machines belonging to one site.
#[derive(Debug, Clone, Default)]
pub struct SitePool {
    /// The site code this pool belongs to.
    pub code: String,
    /// Jobs scheduled at this site, in input order.
    pub jobs: Vec<Job>,
    /// Machines available at this site, in input order.
    pub machines: Vec<Machine>,
}

/// The outcome of splitting a run's inputs by site.
#[derive(Debug, Clone)]
pub struct SitePartition {
    /// Pool for the first site code.
    pub first: SitePool,
    /// Pool for the second site code.
    pub second: SitePool,
    /// Jobs whose id prefix matches neither site code, in input order.
    pub unrecognized: Vec<Job>,
}

/// Splits jobs and machines into per-site pools.
///
/// Site presence is detected over the whole job list. When both sites
/// are present, every machine must be tagged for exactly one of them;
/// an untagged or doubly-tagged machine aborts the run before any
/// allocation. When exactly one site is present, all machines serve
/// that site regardless of tag. Jobs matching neither code are
/// returned separately.
pub fn partition(
    jobs: &[Job],
    machines: &[Machine],
    codes: &SiteCodes,
) -> DispatchResult<SitePartition> {
    let mut first = SitePool {
        code: codes.first.clone(),
        ..SitePool::default()
    };
    let mut second = SitePool {
        code: codes.second.clone(),
        ..SitePool::default()
    };
    let mut unrecognized = Vec::new();

    for job in jobs {
        match job.site_code() {
            Some(code) if code == codes.first => first.jobs.push(job.clone()),
            Some(code) if code == codes.second => second.jobs.push(job.clone()),
            _ => unrecognized.push(job.clone()),
        }
    }

    let has_first = !first.jobs.is_empty();
    let has_second = !second.jobs.is_empty();

    if has_first && has_second {
        for machine in machines {
            match (
                machine.matches_site(&codes.first),
                machine.matches_site(&codes.second),
            ) {
                (true, false) => first.machines.push(machine.clone()),
                (false, true) => second.machines.push(machine.clone()),
                (true, true) => {
                    return Err(DispatchError::MachineTagAmbiguous {
                        machine_id: machine.id.clone(),
                        first: codes.first.clone(),
                        second: codes.second.clone(),
                    })
                }
                (false, false) => {
                    return Err(DispatchError::MachineNotTagged {
                        machine_id: machine.id.clone(),
                        first: codes.first.clone(),
                        second: codes.second.clone(),
                    })
                }
            }
        }
    } else if has_first {
        first.machines = machines.to_vec();
    } else if has_second {
        second.machines = machines.to_vec();
    }

    Ok(SitePartition {
        first,
        second,
        unrecognized,
    })
}
