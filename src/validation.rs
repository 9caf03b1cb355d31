//! Input validation for dispatch runs.
//!
//! Structural integrity checks on job and machine records. The engine
//! itself trusts its caller to hand it well-formed inputs; these
//! checks are for callers that want to fail fast on malformed pools
//! before dispatching. Detects:
//! - Duplicate machine identifiers
//! - Empty identifiers
//! - Job ids too short to carry a site code

use std::collections::HashSet;

use crate::models::{Job, Machine};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two machines share the same identifier.
    DuplicateMachineId,
    /// A machine has an empty identifier.
    EmptyMachineId,
    /// A job has an empty identifier.
    EmptyJobId,
    /// A job id is too short to carry a two-character site code.
    MissingSiteCode,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a dispatch run.
///
/// Checks:
/// 1. Machine identifiers are unique within the pool
/// 2. No machine has an empty identifier
/// 3. No job has an empty identifier
/// 4. Every job id is long enough to carry a site code
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], machines: &[Machine]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut machine_ids = HashSet::new();
    for machine in machines {
        if machine.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMachineId,
                "machine with empty identifier",
            ));
        } else if !machine_ids.insert(machine.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMachineId,
                format!("duplicate machine ID: {}", machine.id),
            ));
        }
    }

    for job in jobs {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJobId,
                "job with empty identifier",
            ));
        } else if job.site_code().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSiteCode,
                format!("job '{}' is too short to carry a site code", job.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
