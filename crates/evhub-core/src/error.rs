//! Error handling for evhub
//!
//! Listeners report failure through [`ListenerError`], a boxed error so any
//! error type can be returned with `?`. The hub wraps the first failure of a
//! dispatch into [`HubError`] when the failure policy propagates.

use thiserror::Error;

/// Error returned by a listener callback.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of every listener callback.
pub type ListenerResult = std::result::Result<(), ListenerError>;

/// Hub error type
///
/// Unknown event names are never errors; the only failure the hub reports
/// is a listener that failed while being dispatched to.
#[derive(Error, Debug)]
pub enum HubError {
    /// A listener returned an error and delivery stopped
    #[error("Listener #{position} for event '{event}' failed: {source}")]
    ListenerFailed {
        /// The event being dispatched.
        event: String,
        /// Zero-based position of the failing listener in the dispatch snapshot.
        position: usize,
        /// The error the listener returned.
        #[source]
        source: ListenerError,
    },
}

impl HubError {
    /// Name of the event whose dispatch failed
    pub fn event(&self) -> &str {
        match self {
            HubError::ListenerFailed { event, .. } => event,
        }
    }

    /// Position of the failing listener within its dispatch
    pub fn position(&self) -> usize {
        match self {
            HubError::ListenerFailed { position, .. } => *position,
        }
    }
}

/// Result type using HubError
pub type Result<T> = std::result::Result<T, HubError>;
