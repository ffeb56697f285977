//! Event layer — named-event registry and synchronous dispatch.
//!
//! # Overview
//!
//! [`Emitter<I>`] keeps one priority-ordered listener list per event name and
//! dispatches `I` payloads to them synchronously. [`Observable`] lends the
//! whole operation set to any host type that owns an emitter.
//!
//! # Modules
//!
//! - [`listener`] — [`Listener<I>`], [`Reply<I>`], [`ListenerOptions`].
//! - [`event`] — [`Event`] delivered to listeners and [`FireResult<I>`].
//! - [`registry`] — per-name ordered lists (crate-internal).
//! - [`emitter`] — [`Emitter<I>`] and [`Subscription<I>`].
//! - [`observable`] — the [`Observable`] trait and [`impl_observable!`](crate::impl_observable).

#[allow(clippy::module_inception)]
pub mod emitter;
pub mod event;
pub mod listener;
pub mod observable;
pub(crate) mod registry;

pub use emitter::{Emitter, Subscription};
pub use event::{Event, FireResult};
pub use listener::{Listener, ListenerOptions, Reply, DEFAULT_PRIORITY};
pub use observable::Observable;
