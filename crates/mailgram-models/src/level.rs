//! The four-tier urgency scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier shared by derived priority, derived severity, and the
/// AI urgency signal.
///
/// Ordering is by urgency, so `Level::Critical > Level::Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Informational or low-urgency traffic.
    Low,
    /// Normal traffic with no urgency marker.
    #[default]
    Medium,
    /// Elevated urgency, should be seen soon.
    High,
    /// Page-worthy, drop-everything urgency.
    Critical,
}

impl Level {
    /// Returns the lowercase string form used in grammar segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Critical => "critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
