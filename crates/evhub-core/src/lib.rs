//! # evhub Core
//!
//! Core types for evhub: the event hub, listener handles, hub
//! configuration and error types.

pub mod args;
pub mod error;
pub mod hub;

pub use args::Args;

pub use error::{HubError, ListenerError, ListenerResult, Result};

pub use hub::{DynHub, EventHub, FailurePolicy, HubConfig, Listener, SubscriptionId};
