//! Listener handles, listener replies and registration options.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::event::Event;

/// Priority used when [`ListenerOptions::priority`] is `None`.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Shared, type-erased value attached to a registration (scope or data).
pub type Shared = Arc<dyn Any + Send + Sync>;

/// Closure type stored for every listener.
pub type ListenerFn<I> = dyn Fn(&mut Event<'_, I>) -> Reply<I> + Send + Sync;

// ============================================================================
// Reply
// ============================================================================

/// What a listener tells the dispatcher after it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<I> {
    /// Keep the current payload (including in-place edits to `event.info`).
    Continue,
    /// Cancel the dispatch: `fire` returns [`FireResult::Canceled`](super::FireResult::Canceled).
    Cancel,
    /// Replace the payload seen by the remaining listeners and by the caller.
    Replace(I),
}

impl<I> From<()> for Reply<I> {
    fn from(_: ()) -> Self {
        Reply::Continue
    }
}

/// `false` cancels, `true` continues.
impl<I> From<bool> for Reply<I> {
    fn from(proceed: bool) -> Self {
        if proceed {
            Reply::Continue
        } else {
            Reply::Cancel
        }
    }
}

/// `Some(v)` replaces the payload, `None` leaves it alone.
impl<I> From<Option<I>> for Reply<I> {
    fn from(value: Option<I>) -> Self {
        match value {
            Some(v) => Reply::Replace(v),
            None => Reply::Continue,
        }
    }
}

// ============================================================================
// Listener
// ============================================================================

/// A registered callback and its identity.
///
/// Clones share the same identity: `off` and `has_listener` compare by
/// pointer, so keep a clone of the listener you registered if you want to
/// remove it by name later.
pub struct Listener<I> {
    callback: Arc<ListenerFn<I>>,
}

impl<I> Listener<I> {
    /// Wrap `f`. The closure may return anything convertible into a
    /// [`Reply`]: `()`, `bool`, `Option<I>` or a `Reply` itself.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&mut Event<'_, I>) -> R + Send + Sync + 'static,
        R: Into<Reply<I>>,
    {
        let callback: Arc<ListenerFn<I>> =
            Arc::new(move |event: &mut Event<'_, I>| -> Reply<I> { f(event).into() });
        Self { callback }
    }

    pub(crate) fn call(&self, event: &mut Event<'_, I>) -> Reply<I> {
        (self.callback)(event)
    }

    /// Whether `self` and `other` are the same registration key.
    pub fn same_as(&self, other: &Listener<I>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callback), Arc::as_ptr(&other.callback))
    }
}

impl<I> Clone for Listener<I> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<I> PartialEq for Listener<I> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<I> Eq for Listener<I> {}

impl<I> fmt::Debug for Listener<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

// ============================================================================
// ListenerOptions
// ============================================================================

/// Per-registration settings for `on_with` / `once_with`.
#[derive(Debug, Clone, Default)]
pub struct ListenerOptions {
    /// Value exposed as [`Event::scope`] (default: none; the emitter itself
    /// is always reachable through [`Event::sender`]).
    pub scope: Option<Shared>,
    /// Value exposed as [`Event::data`] (default: none).
    pub data: Option<Shared>,
    /// Ordering key, lower runs earlier (default: [`DEFAULT_PRIORITY`]).
    pub priority: Option<i32>,
}

impl ListenerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Shared) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_data<T: Any + Send + Sync>(mut self, data: T) -> Self {
        self.data = Some(Arc::new(data));
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(crate) fn resolved_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
