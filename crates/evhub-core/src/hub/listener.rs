//! Listener handles and registry entries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ListenerResult;

/// Subscription handle returned by `on` and `once`
///
/// Identifies exactly one registry entry and can be passed to
/// `EventHub::unsubscribe` to remove it, including once entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

type Callback<A> = dyn Fn(&A) -> ListenerResult + Send + Sync;

/// A callable registered on the hub
///
/// Identity is the underlying allocation: clones of one `Listener` are the
/// same listener, two listeners built from identical closures are not.
pub struct Listener<A> {
    callback: Arc<Callback<A>>,
}

impl<A> Listener<A> {
    /// Create a listener from a fallible callback
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&A) -> ListenerResult + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Create a listener from a callback that cannot fail
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self::new(move |args| {
            callback(args);
            Ok(())
        })
    }

    /// Invoke the callback
    pub fn call(&self, args: &A) -> ListenerResult {
        (self.callback)(args)
    }

    /// Whether both handles refer to the same listener
    pub fn same_as(&self, other: &Listener<A>) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A> std::fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("ptr", &Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// Shared flag that lets a once entry fire a single time across snapshots
#[derive(Debug, Clone, Default)]
pub(crate) struct OnceGuard(Arc<AtomicBool>);

impl OnceGuard {
    /// Returns true for the first caller only.
    pub(crate) fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }
}

/// One slot in an event's listener sequence
pub(crate) struct Entry<A> {
    pub(crate) id: SubscriptionId,
    pub(crate) listener: Listener<A>,
    pub(crate) once: Option<OnceGuard>,
}

impl<A> Entry<A> {
    pub(crate) fn persistent(listener: Listener<A>) -> Self {
        Self {
            id: SubscriptionId::new(),
            listener,
            once: None,
        }
    }

    pub(crate) fn once(listener: Listener<A>) -> Self {
        Self {
            id: SubscriptionId::new(),
            listener,
            once: Some(OnceGuard::default()),
        }
    }

    /// Plain entries are the only ones `off` may match.
    pub(crate) fn matches_plain(&self, listener: &Listener<A>) -> bool {
        self.once.is_none() && self.listener.same_as(listener)
    }
}

impl<A> Clone for Entry<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            listener: self.listener.clone(),
            once: self.once.clone(),
        }
    }
}
