//! Event Hub implementation.
//!
//! Provides the core EventHub struct: a registry of named events, each with
//! an ordered sequence of listeners, and synchronous dispatch over a
//! snapshot of that sequence.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

use super::config::{FailurePolicy, HubConfig};
use super::listener::{Entry, Listener, SubscriptionId};
use crate::args::Args;
use crate::error::{HubError, Result};

struct Registry<A> {
    events: HashMap<String, Vec<Entry<A>>>,
    /// Events that already logged a listener-limit warning.
    warned: HashSet<String>,
}

/// In-process publish/subscribe hub
///
/// Listeners run on the caller's thread, in registration order. The
/// registry lock is never held while a listener runs, so a listener may
/// call back into the hub, including a nested `emit`.
pub struct EventHub<A> {
    registry: RwLock<Registry<A>>,
    config: HubConfig,
}

/// Hub whose listeners receive a dynamic argument list
pub type DynHub = EventHub<Args>;

impl<A> EventHub<A> {
    /// Create a new, empty hub with default configuration
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Create a new, empty hub with custom configuration
    pub fn with_config(config: HubConfig) -> Self {
        Self {
            registry: RwLock::new(Registry {
                events: HashMap::new(),
                warned: HashSet::new(),
            }),
            config,
        }
    }

    /// Register a listener at the end of `event`'s sequence
    pub fn on(&self, event: &str, listener: Listener<A>) -> SubscriptionId {
        self.insert(event, Entry::persistent(listener))
    }

    /// Register a listener that is removed before its first invocation
    ///
    /// `off` with the same listener does not match the once entry; use the
    /// returned id with `unsubscribe` to cancel it before it fires.
    pub fn once(&self, event: &str, listener: Listener<A>) -> SubscriptionId {
        self.insert(event, Entry::once(listener))
    }

    /// Remove the first plain registration of `listener` from `event`
    ///
    /// Returns true if an entry was removed. Unknown events and listeners
    /// are ignored.
    pub fn off(&self, event: &str, listener: &Listener<A>) -> bool {
        self.remove_where(event, |entry| entry.matches_plain(listener))
    }

    /// Remove the entry identified by `id` from `event`
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, event: &str, id: SubscriptionId) -> bool {
        self.remove_where(event, |entry| entry.id == id)
    }

    /// Invoke every listener registered for `event` with `args`
    ///
    /// The listener sequence is snapshotted first; changes made by
    /// listeners during this call affect later dispatches only. With the
    /// propagate policy, the first failure stops delivery and is returned.
    pub fn emit(&self, event: &str, args: &A) -> Result<()> {
        let snapshot: Vec<Entry<A>> = match self.registry.read().events.get(event) {
            Some(entries) => entries.clone(),
            None => return Ok(()),
        };

        tracing::trace!("Emitting '{}' to {} listener(s)", event, snapshot.len());

        for (position, entry) in snapshot.iter().enumerate() {
            if let Some(guard) = &entry.once {
                if !guard.claim() {
                    continue;
                }
                self.remove_where(event, |e| e.id == entry.id);
            }

            if let Err(source) = entry.listener.call(args) {
                match self.config.failure_policy {
                    FailurePolicy::Propagate => {
                        return Err(HubError::ListenerFailed {
                            event: event.to_string(),
                            position,
                            source,
                        });
                    }
                    FailurePolicy::Isolate => {
                        tracing::warn!(
                            "Listener {} for '{}' failed: {}",
                            entry.id,
                            event,
                            source
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Remove one event's listeners, or every event when `event` is None
    pub fn clear(&self, event: Option<&str>) {
        match event {
            Some(name) => self.clear_event(name),
            None => self.clear_all(),
        }
    }

    /// Drop `event` and all of its listeners
    pub fn clear_event(&self, event: &str) {
        let mut registry = self.registry.write();
        registry.warned.remove(event);
        if let Some(entries) = registry.events.remove(event) {
            tracing::debug!("Cleared {} listener(s) from '{}'", entries.len(), event);
        }
    }

    /// Reset the hub to empty
    pub fn clear_all(&self) {
        let mut registry = self.registry.write();
        registry.events.clear();
        registry.warned.clear();
        tracing::debug!("Cleared all events");
    }

    /// Number of listeners currently registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry.read().events.get(event).map_or(0, Vec::len)
    }

    /// Number of listeners across all events
    pub fn total_listener_count(&self) -> usize {
        self.registry.read().events.values().map(Vec::len).sum()
    }

    /// Whether `event` has at least one listener
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }

    /// Names of all events present in the registry, sorted
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.read().events.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether the registry holds no events
    pub fn is_empty(&self) -> bool {
        self.registry.read().events.is_empty()
    }

    /// Get the current configuration
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    fn insert(&self, event: &str, entry: Entry<A>) -> SubscriptionId {
        let id = entry.id;
        let mut registry = self.registry.write();
        let entries = registry.events.entry(event.to_string()).or_default();
        entries.push(entry);
        let count = entries.len();

        let limit = self.config.max_listeners;
        if limit > 0 && count > limit && registry.warned.insert(event.to_string()) {
            tracing::warn!(
                "Event '{}' has {} listeners (limit {}); possible listener leak",
                event,
                count,
                limit
            );
        }

        tracing::debug!("Subscription {} added to '{}'", id, event);
        id
    }

    fn remove_where<F>(&self, event: &str, predicate: F) -> bool
    where
        F: Fn(&Entry<A>) -> bool,
    {
        let mut registry = self.registry.write();
        let Some(entries) = registry.events.get_mut(event) else {
            return false;
        };
        match entries.iter().position(predicate) {
            Some(index) => {
                let removed = entries.remove(index);
                tracing::debug!("Subscription {} removed from '{}'", removed.id, event);
                true
            }
            None => false,
        }
    }
}

impl<A> Default for EventHub<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for EventHub<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("events", &self.event_names())
            .field("listeners", &self.total_listener_count())
            .field("config", &self.config)
            .finish()
    }
}
