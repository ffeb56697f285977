//! Emitter<I> — named-event registry with synchronous, prioritized dispatch.
//!
//! Snapshot-on-fire semantics mean:
//!   - A listener removed *during* a dispatch still runs in that pass if it
//!     was already in the snapshot (except `once` entries, which are guarded).
//!   - A listener added *during* a dispatch is NOT called until the next fire.
//!
//! Panics inside a listener propagate to the caller of `fire` and skip the
//! remaining listeners of that pass.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`).
//! The lock is never held while a listener runs, so listeners can call
//! `on` / `off` / `fire` on the same emitter without deadlocking.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::{EmitterError, Result};

use super::event::{Event, FireResult, Frame};
use super::listener::{Listener, ListenerOptions, Reply};
use super::registry::{split_names, Entry, Registry};

// ============================================================================
// Subscription
// ============================================================================

/// Handle returned by `on` / `once`; [`Subscription::off`] removes exactly the
/// registration(s) made by that call.
///
/// Holds a weak reference: once the emitter is dropped the handle is inert.
pub struct Subscription<I> {
    registry: Weak<Mutex<Registry<I>>>,
    names: Vec<String>,
    listener: Listener<I>,
}

impl<I> Subscription<I> {
    /// Remove the listener from every event name this handle covers.
    pub fn off(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.lock();
        for name in &self.names {
            registry.remove(name, &self.listener);
        }
    }

    /// Event names covered by this handle.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn listener(&self) -> &Listener<I> {
        &self.listener
    }

    /// Whether the listener is still registered under any covered name.
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let registry = registry.lock();
        let active = self
            .names
            .iter()
            .any(|name| registry.contains(name, &self.listener));
        active
    }
}

impl<I> fmt::Debug for Subscription<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("names", &self.names)
            .field("listener", &self.listener)
            .finish()
    }
}

// ============================================================================
// Emitter
// ============================================================================

/// Typed synchronous event emitter keyed by event name.
///
/// `I` is the payload type passed to `fire` and seen by listeners as
/// `event.info`.
pub struct Emitter<I> {
    registry: Arc<Mutex<Registry<I>>>,
}

impl<I> Emitter<I> {
    /// Create a new, empty emitter.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Register `listener` under each whitespace-separated name in `names`
    /// with default options.
    ///
    /// Returns `None` when `names` holds no event name. Registering a
    /// listener that is already present is a no-op that still returns a handle.
    pub fn on(&self, names: &str, listener: &Listener<I>) -> Option<Subscription<I>> {
        self.on_with(names, listener, ListenerOptions::default())
    }

    /// [`Emitter::on`] with explicit scope, data and priority.
    pub fn on_with(
        &self,
        names: &str,
        listener: &Listener<I>,
        options: ListenerOptions,
    ) -> Option<Subscription<I>> {
        self.register(names, listener, options, false).ok()
    }

    /// Strict form of [`Emitter::on`].
    pub fn try_on(&self, names: &str, listener: &Listener<I>) -> Result<Subscription<I>> {
        self.register(names, listener, ListenerOptions::default(), false)
    }

    /// Strict form of [`Emitter::on_with`].
    pub fn try_on_with(
        &self,
        names: &str,
        listener: &Listener<I>,
        options: ListenerOptions,
    ) -> Result<Subscription<I>> {
        self.register(names, listener, options, false)
    }

    /// Like [`Emitter::on`], but the registration removes itself right before
    /// its first invocation and never runs twice.
    pub fn once(&self, names: &str, listener: &Listener<I>) -> Option<Subscription<I>> {
        self.once_with(names, listener, ListenerOptions::default())
    }

    pub fn once_with(
        &self,
        names: &str,
        listener: &Listener<I>,
        options: ListenerOptions,
    ) -> Option<Subscription<I>> {
        self.register(names, listener, options, true).ok()
    }

    pub fn try_once(&self, names: &str, listener: &Listener<I>) -> Result<Subscription<I>> {
        self.register(names, listener, ListenerOptions::default(), true)
    }

    pub fn try_once_with(
        &self,
        names: &str,
        listener: &Listener<I>,
        options: ListenerOptions,
    ) -> Result<Subscription<I>> {
        self.register(names, listener, options, true)
    }

    fn register(
        &self,
        names: &str,
        listener: &Listener<I>,
        options: ListenerOptions,
        once: bool,
    ) -> Result<Subscription<I>> {
        let split = split_names(names);
        if split.is_empty() {
            tracing::debug!(names = %names, "ignoring registration without an event name");
            return Err(EmitterError::EmptyName);
        }

        let mut registry = self.registry.lock();
        for name in &split {
            let entry = Entry::new(listener.clone(), options.clone(), once);
            let priority = entry.priority;
            let added = registry.insert(name, entry);
            tracing::trace!(event = %name, priority, once, added, "register listener");
        }
        drop(registry);

        Ok(Subscription {
            registry: Arc::downgrade(&self.registry),
            names: split.into_iter().map(str::to_string).collect(),
            listener: listener.clone(),
        })
    }

    // ------------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------------

    /// Remove `listener` from each whitespace-separated name in `names`.
    ///
    /// Does nothing for names it is not registered under.
    pub fn off(&self, names: &str, listener: &Listener<I>) {
        let split = split_names(names);
        if split.is_empty() {
            tracing::debug!(names = %names, "ignoring off() without an event name");
            return;
        }
        let mut registry = self.registry.lock();
        for name in split {
            let removed = registry.remove(name, listener);
            tracing::trace!(event = %name, removed, "remove listener");
        }
    }

    /// Remove every listener under each whitespace-separated name in `names`.
    pub fn offs(&self, names: &str) {
        let split = split_names(names);
        if split.is_empty() {
            tracing::debug!(names = %names, "ignoring offs() without an event name");
            return;
        }
        let mut registry = self.registry.lock();
        for name in split {
            let removed = registry.remove_list(name);
            tracing::trace!(event = %name, removed, "remove all listeners for event");
        }
    }

    /// Remove every listener under every name.
    pub fn off_all(&self) {
        self.registry.lock().clear();
        tracing::trace!("remove all listeners");
    }

    /// Single-name removal used by [`Event::off`].
    pub(crate) fn remove_one(&self, name: &str, listener: &Listener<I>) {
        self.registry.lock().remove(name, listener);
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Fire `name` with an optional payload.
    ///
    /// Listeners run in ascending priority order. A listener can cancel
    /// (`Reply::Cancel` or [`Event::cancel`]), stop ([`Event::stop`]) or
    /// replace the payload (`Reply::Replace`). The result is
    /// [`FireResult::Canceled`] if canceled, otherwise the final payload as
    /// [`FireResult::Info`], or [`FireResult::Done`] if there is none.
    ///
    /// `name` is a single event name; it is not split on whitespace.
    pub fn fire(&self, name: &str, info: impl Into<Option<I>>) -> FireResult<I> {
        // Snapshot under the lock; the guard is a temporary and is released
        // before any listener runs.
        let snapshot = self.registry.lock().snapshot(name);
        tracing::trace!(event = %name, listeners = snapshot.len(), "fire");

        let mut frame = Frame::default();
        let mut info = info.into();

        for entry in &snapshot {
            if entry.is_once() {
                if !entry.claim() {
                    continue;
                }
                self.registry.lock().remove_entry(name, entry);
            }

            let mut event = Event::new(name, info.take(), self, entry, &mut frame);
            let reply = entry.listener.call(&mut event);
            info = event.info;

            match reply {
                Reply::Continue => {}
                Reply::Cancel => frame.canceled = true,
                Reply::Replace(value) => info = Some(value),
            }

            if frame.halted() {
                tracing::trace!(
                    event = %name,
                    canceled = frame.canceled,
                    stopped = frame.stopped,
                    "dispatch halted"
                );
                break;
            }
        }

        FireResult::from_frame(&frame, info)
    }

    /// [`Emitter::fire`], then drop every listener under `name` regardless
    /// of the outcome.
    pub fn fire_once(&self, name: &str, info: impl Into<Option<I>>) -> FireResult<I> {
        let result = self.fire(name, info);
        self.registry.lock().remove_list(name);
        result
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// Whether `listener` is registered under exactly `name`.
    pub fn has_listener(&self, name: &str, listener: &Listener<I>) -> bool {
        self.registry.lock().contains(name, listener)
    }

    /// Whether at least one listener is registered under `name`.
    pub fn has_listeners(&self, name: &str) -> bool {
        self.registry.lock().len(name) > 0
    }

    /// Number of listeners registered under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.registry.lock().len(name)
    }

    /// Names with at least one listener, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.registry.lock().names()
    }
}

impl<I> Default for Emitter<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for Emitter<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        let mut lists: Vec<(&str, usize)> = registry
            .lists()
            .map(|list| (list.name.as_str(), list.len()))
            .collect();
        lists.sort_unstable();
        f.debug_struct("Emitter").field("listeners", &lists).finish()
    }
}
