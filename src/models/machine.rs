//! Machine model.
//!
//! A machine is a dispatch target with a fixed daily time budget.
//! Site membership is read from a free-text tag: a machine belongs to
//! a site when its tag contains the site code as a substring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Daily processing capacity of a single machine, in seconds.
pub const DAILY_CAPACITY_SECS: i64 = 86_400;

/// A machine that can take job assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// Identifier, unique within a machine pool.
    pub id: String,
    /// Free-text remark carrying the site code, when tagged.
    pub site_tag: Option<String>,
    /// Domain-specific key-value metadata, passed through untouched.
    pub attributes: HashMap<String, String>,
}

impl Machine {
    /// Creates a new untagged machine.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            site_tag: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the site tag.
    pub fn with_site_tag(mut self, tag: impl Into<String>) -> Self {
        self.site_tag = Some(tag.into());
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this machine's tag names the given site code.
    pub fn matches_site(&self, code: &str) -> bool {
        self.site_tag.as_deref().is_some_and(|tag| tag.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_builder() {
        let machine = Machine::new("M1")
            .with_site_tag("hall 2A east")
            .with_attribute("vendor", "Keyence");

        assert_eq!(machine.id, "M1");
        assert_eq!(machine.site_tag.as_deref(), Some("hall 2A east"));
        assert_eq!(machine.attributes.get("vendor"), Some(&"Keyence".to_string()));
    }

    #[test]
    fn test_matches_site_by_containment() {
        let machine = Machine::new("M1").with_site_tag("hall 2A east");
        assert!(machine.matches_site("2A"));
        assert!(!machine.matches_site("2B"));
    }

    #[test]
    fn test_untagged_machine_matches_nothing() {
        let machine = Machine::new("M1");
        assert!(!machine.matches_site("2A"));
        assert!(!machine.matches_site("2B"));
    }
}
