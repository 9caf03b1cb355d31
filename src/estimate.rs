//! Capacity estimation.
//!
//! Two independent forecasts derived from a lump target quantity,
//! usable together or separately and fully independent of the
//! day-by-day allocation:
//!
//! - [`DaysEstimate`]: how many days a given machine count needs to
//!   clear the quantity.
//! - [`MachineEstimate`]: how many machines a given day budget needs.
//!
//! Both apply the single-job duration formula to the whole target
//! quantity at once, modeling one large batch rather than a sum of
//! per-job overheads.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::models::{processing_seconds, DAILY_CAPACITY_SECS};

/// Days-to-complete forecast for a target quantity and machine count.
///
/// Carries its inputs alongside the derived values so the result can
/// be rendered or audited without the original request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysEstimate {
    /// Target lump quantity.
    pub target_quantity: i64,
    /// Machines assumed to run every day.
    pub machine_count: i64,
    /// Daily capacity of a single machine, in seconds.
    pub capacity_per_machine_secs: i64,
    /// Total seconds needed for the whole quantity.
    pub total_seconds: i64,
    /// Combined pool capacity per day, in seconds.
    pub daily_capacity_secs: i64,
    /// Estimated days to complete, rounded up.
    pub estimated_days: i64,
}

impl DaysEstimate {
    /// Forecasts how many days `machine_count` machines need for the
    /// target quantity.
    pub fn calculate(target_quantity: i64, machine_count: i64) -> Result<Self, EstimateError> {
        if target_quantity < 0 {
            return Err(EstimateError::InvalidTargetQuantity(target_quantity));
        }
        if machine_count <= 0 {
            return Err(EstimateError::InvalidMachineCount(machine_count));
        }

        let total_seconds = processing_seconds(target_quantity as f64);
        let daily_capacity_secs = machine_count * DAILY_CAPACITY_SECS;
        let estimated_days = (total_seconds + daily_capacity_secs - 1) / daily_capacity_secs;

        Ok(Self {
            target_quantity,
            machine_count,
            capacity_per_machine_secs: DAILY_CAPACITY_SECS,
            total_seconds,
            daily_capacity_secs,
            estimated_days,
        })
    }
}

/// Required-machine forecast for a target quantity and day budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineEstimate {
    /// Target lump quantity.
    pub target_quantity: i64,
    /// Days the quantity should be cleared in.
    pub target_days: i64,
    /// Total seconds needed for the whole quantity.
    pub total_seconds: i64,
    /// Seconds of work each day must absorb, rounded up.
    pub seconds_per_day: i64,
    /// Daily capacity of a single machine, in seconds.
    pub capacity_per_machine_secs: i64,
    /// Machines needed to absorb the daily workload, rounded up.
    pub required_machines: i64,
    /// Machines currently in the pool.
    pub current_machine_count: i64,
    /// Additional machines needed beyond the current pool, never negative.
    pub machine_gap: i64,
}

impl MachineEstimate {
    /// Forecasts how many machines a `target_days` budget needs for
    /// the target quantity, against the current pool size.
    pub fn calculate(
        target_quantity: i64,
        target_days: i64,
        current_machine_count: i64,
    ) -> Result<Self, EstimateError> {
        if target_quantity < 0 {
            return Err(EstimateError::InvalidTargetQuantity(target_quantity));
        }
        if target_days <= 0 {
            return Err(EstimateError::InvalidTargetDays(target_days));
        }

        let total_seconds = processing_seconds(target_quantity as f64);
        let seconds_per_day = (total_seconds + target_days - 1) / target_days;
        let required_machines = {
            let divisor = target_days * DAILY_CAPACITY_SECS;
            (total_seconds + divisor - 1) / divisor
        };
        let machine_gap = (required_machines - current_machine_count).max(0);

        Ok(Self {
            target_quantity,
            target_days,
            total_seconds,
            seconds_per_day,
            capacity_per_machine_secs: DAILY_CAPACITY_SECS,
            required_machines,
            current_machine_count,
            machine_gap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_estimate() {
        let estimate = DaysEstimate::calculate(2_500, 3).unwrap();
        assert_eq!(estimate.total_seconds, 3_900);
        assert_eq!(estimate.daily_capacity_secs, 259_200);
        assert_eq!(estimate.estimated_days, 1);
    }

    #[test]
    fn test_days_estimate_rounds_up() {
        // 200_000 units → 240_900 s; one machine clears 86_400 s/day.
        let estimate = DaysEstimate::calculate(200_000, 1).unwrap();
        assert_eq!(estimate.total_seconds, 240_900);
        assert_eq!(estimate.estimated_days, 3);
    }

    #[test]
    fn test_days_estimate_rejects_bad_inputs() {
        assert_eq!(
            DaysEstimate::calculate(100, 0),
            Err(EstimateError::InvalidMachineCount(0))
        );
        assert_eq!(
            DaysEstimate::calculate(100, -2),
            Err(EstimateError::InvalidMachineCount(-2))
        );
        assert_eq!(
            DaysEstimate::calculate(-1, 3),
            Err(EstimateError::InvalidTargetQuantity(-1))
        );
    }

    #[test]
    fn test_machine_estimate() {
        let estimate = MachineEstimate::calculate(100_000, 10, 0).unwrap();
        assert_eq!(estimate.total_seconds, 120_900);
        assert_eq!(estimate.seconds_per_day, 12_090);
        assert_eq!(estimate.required_machines, 1);
        assert_eq!(estimate.machine_gap, 1);
    }

    #[test]
    fn test_machine_estimate_gap_never_negative() {
        let estimate = MachineEstimate::calculate(100_000, 10, 5).unwrap();
        assert_eq!(estimate.required_machines, 1);
        assert_eq!(estimate.machine_gap, 0);
    }

    #[test]
    fn test_machine_estimate_multiple_machines() {
        // 2_000_000 units → 2_400_900 s; over 5 days that is
        // 480_180 s/day, needing 6 machines.
        let estimate = MachineEstimate::calculate(2_000_000, 5, 2).unwrap();
        assert_eq!(estimate.seconds_per_day, 480_180);
        assert_eq!(estimate.required_machines, 6);
        assert_eq!(estimate.machine_gap, 4);
    }

    #[test]
    fn test_machine_estimate_rejects_bad_inputs() {
        assert_eq!(
            MachineEstimate::calculate(100, 0, 1),
            Err(EstimateError::InvalidTargetDays(0))
        );
        assert_eq!(
            MachineEstimate::calculate(-5, 10, 1),
            Err(EstimateError::InvalidTargetQuantity(-5))
        );
    }

    #[test]
    fn test_zero_quantity_still_carries_overhead() {
        let estimate = DaysEstimate::calculate(0, 1).unwrap();
        assert_eq!(estimate.total_seconds, 900);
        assert_eq!(estimate.estimated_days, 1);
    }
}
