//! Engine error types.
//!
//! Configuration errors abort a dispatch run before any allocation is
//! performed; estimate errors are scoped to a single estimator mode
//! and never affect allocation or the other mode.

use thiserror::Error;

/// Result alias for dispatch-level operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Fatal configuration errors raised while preparing a dispatch run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Jobs from both sites are present but a machine's tag names
    /// neither site code.
    #[error("machine '{machine_id}' carries no site tag matching '{first}' or '{second}'")]
    MachineNotTagged {
        machine_id: String,
        first: String,
        second: String,
    },

    /// A machine's tag names both site codes at once.
    #[error("machine '{machine_id}' is tagged for both '{first}' and '{second}'")]
    MachineTagAmbiguous {
        machine_id: String,
        first: String,
        second: String,
    },
}

/// Invalid input for one capacity-estimate mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// The lump target quantity is negative.
    #[error("target quantity must be non-negative, got {0}")]
    InvalidTargetQuantity(i64),

    /// The machine count for a days-to-complete estimate is not positive.
    #[error("machine count must be positive, got {0}")]
    InvalidMachineCount(i64),

    /// The day count for a required-machines estimate is not positive.
    #[error("target day count must be positive, got {0}")]
    InvalidTargetDays(i64),
}
