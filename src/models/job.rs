//! Job (work order) model.
//!
//! A job is a single work order to be dispatched: an order id whose
//! two-character prefix names the producing site, a category code used
//! for interleaving and priority ordering, the calendar day it is
//! scheduled on, and the queued quantity its processing time is
//! derived from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quantity units processed per machine cycle.
const UNITS_PER_CYCLE: f64 = 25.0;
/// Seconds one machine cycle takes.
const SECONDS_PER_CYCLE: f64 = 30.0;
/// Fixed per-job overhead, in seconds.
const OVERHEAD_SECONDS: f64 = 900.0;

/// A work order to be dispatched.
///
/// The engine never mutates a job's source fields; derived values
/// (duration, machine, start/end) are attached to the resulting
/// [`Assignment`](super::Assignment) instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Order identifier. Its two-character prefix is the site code.
    pub id: String,
    /// Category code used for grouping (interleaving, priority rank).
    pub category: String,
    /// Calendar day the job is scheduled on.
    pub scheduled_day: NaiveDate,
    /// Queued quantity; drives the processing duration.
    pub quantity: f64,
    /// Domain-specific key-value metadata, passed through untouched.
    pub attributes: HashMap<String, String>,
}

impl Job {
    /// Creates a new job scheduled on the given day.
    pub fn new(id: impl Into<String>, scheduled_day: NaiveDate) -> Self {
        Self {
            id: id.into(),
            category: String::new(),
            scheduled_day,
            quantity: 0.0,
            attributes: HashMap::new(),
        }
    }

    /// Sets the category code.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the queued quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The two-character site prefix of the order id, if present.
    pub fn site_code(&self) -> Option<&str> {
        self.id.get(..2)
    }

    /// Processing duration of this job, in seconds.
    pub fn processing_seconds(&self) -> i64 {
        processing_seconds(self.quantity)
    }
}

/// Converts a queued quantity into a processing duration in seconds.
///
/// Every 25 units take 30 seconds, plus a fixed 900-second overhead,
/// rounded up to whole seconds. A non-finite or negative quantity is
/// treated as zero, leaving only the overhead.
pub fn processing_seconds(quantity: f64) -> i64 {
    let quantity = if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    };
    ((quantity / UNITS_PER_CYCLE) * SECONDS_PER_CYCLE + OVERHEAD_SECONDS).ceil() as i64
}
