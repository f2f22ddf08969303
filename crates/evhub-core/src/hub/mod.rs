//! # Event Hub Module
//!
//! In-process publish/subscribe: callers register listeners under an event
//! name and other callers emit that name with arguments.
//!
//! ## Overview
//!
//! - Listeners for one event run in registration order, on the emitting thread
//! - Each emit works on a snapshot, so listeners may subscribe or
//!   unsubscribe while being dispatched to without affecting that emit
//! - `once` listeners are removed before they run
//! - Removal by listener is identity based; removal by [`SubscriptionId`]
//!   also reaches `once` listeners
//!
//! ## Usage
//!
//! ```rust,ignore
//! use evhub_core::{EventHub, Listener};
//!
//! let hub: EventHub<String> = EventHub::new();
//! let log = Listener::infallible(|url: &String| println!("fetching {url}"));
//!
//! hub.on("AJAX-CALL", log.clone());
//! hub.emit("AJAX-CALL", &"/api/items".to_string())?;
//!
//! hub.off("AJAX-CALL", &log);
//! ```

mod bus;
mod config;
mod listener;

pub use bus::*;
pub use config::*;
pub use listener::{Listener, SubscriptionId};
