//! Hub configuration.

use serde::{Deserialize, Serialize};

/// What the hub does when a listener fails during dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing listener and return its error to the caller.
    #[default]
    Propagate,
    /// Log the failure and keep delivering to the remaining listeners.
    Isolate,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Propagate => write!(f, "propagate"),
            Self::Isolate => write!(f, "isolate"),
        }
    }
}

/// Configuration for the event hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Behaviour on listener failure.
    pub failure_policy: FailurePolicy,
    /// Listener count per event above which a warning is logged (0 disables).
    pub max_listeners: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Propagate,
            max_listeners: 10,
        }
    }
}
