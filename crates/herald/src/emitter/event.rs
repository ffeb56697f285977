//! Event — the value each listener receives — and the outcome of `fire`.

use std::any::Any;
use std::fmt;

use super::emitter::Emitter;
use super::listener::Shared;
use super::registry::Entry;

/// Cancel/stop state of one `fire` call. Lives on that call's stack, so a
/// nested `fire` from inside a listener starts from a clean frame and leaves
/// the outer one untouched.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    pub(crate) canceled: bool,
    pub(crate) stopped: bool,
}

impl Frame {
    pub(crate) fn halted(&self) -> bool {
        self.canceled || self.stopped
    }
}

/// Delivered to every listener invocation.
pub struct Event<'a, I> {
    /// Current payload. Edits made here are seen by later listeners and by
    /// the caller of `fire`.
    pub info: Option<I>,
    name: &'a str,
    sender: &'a Emitter<I>,
    entry: &'a Entry<I>,
    frame: &'a mut Frame,
}

impl<'a, I> Event<'a, I> {
    pub(crate) fn new(
        name: &'a str,
        info: Option<I>,
        sender: &'a Emitter<I>,
        entry: &'a Entry<I>,
        frame: &'a mut Frame,
    ) -> Self {
        Self {
            info,
            name,
            sender,
            entry,
            frame,
        }
    }

    /// The event name being fired.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The emitter this event was fired on.
    pub fn sender(&self) -> &'a Emitter<I> {
        self.sender
    }

    /// Registration data, if it was set and is a `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.entry.data.as_deref()?.downcast_ref::<T>()
    }

    /// Registration scope, if it was set and is a `T`.
    pub fn scope<T: Any>(&self) -> Option<&T> {
        self.entry.scope.as_deref()?.downcast_ref::<T>()
    }

    /// Registration scope as the shared handle it was registered with.
    pub fn scope_shared(&self) -> Option<&Shared> {
        self.entry.scope.as_ref()
    }

    pub fn priority(&self) -> i32 {
        self.entry.priority
    }

    /// Make `fire` return [`FireResult::Canceled`] and skip the remaining listeners.
    pub fn cancel(&mut self) {
        self.frame.canceled = true;
    }

    /// Skip the remaining listeners without canceling.
    pub fn stop(&mut self) {
        self.frame.stopped = true;
    }

    pub fn is_canceled(&self) -> bool {
        self.frame.canceled
    }

    pub fn is_stopped(&self) -> bool {
        self.frame.stopped
    }

    /// Deregister the listener currently running from this event name.
    pub fn off(&self) {
        self.sender.remove_one(self.name, &self.entry.listener);
    }
}

impl<I: fmt::Debug> fmt::Debug for Event<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("info", &self.info)
            .field("priority", &self.entry.priority)
            .field("canceled", &self.frame.canceled)
            .field("stopped", &self.frame.stopped)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// FireResult
// ============================================================================

/// Outcome of `fire` / `fire_once`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireResult<I> {
    /// A listener canceled the dispatch.
    Canceled,
    /// Not canceled, and there is no payload.
    Done,
    /// Not canceled; the (possibly transformed) payload.
    Info(I),
}

impl<I> FireResult<I> {
    pub(crate) fn from_frame(frame: &Frame, info: Option<I>) -> Self {
        if frame.canceled {
            return FireResult::Canceled;
        }
        match info {
            Some(info) => FireResult::Info(info),
            None => FireResult::Done,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, FireResult::Canceled)
    }

    /// `false` when canceled, `true` otherwise.
    pub fn as_bool(&self) -> bool {
        !self.is_canceled()
    }

    pub fn info(&self) -> Option<&I> {
        match self {
            FireResult::Info(info) => Some(info),
            _ => None,
        }
    }

    pub fn into_info(self) -> Option<I> {
        match self {
            FireResult::Info(info) => Some(info),
            _ => None,
        }
    }
}
