//! herald — named-event publish/subscribe for any host type.
//!
//! A host owns an [`Emitter`] and implements [`Observable`] (or uses
//! [`impl_observable!`]) to expose `on` / `once` / `off` / `offs` / `off_all`
//! / `fire` / `fire_once` / `has_listener` / `has_listeners` as its own
//! methods. Dispatch is synchronous, ordered by priority, and re-entrant.

pub mod emitter;
pub mod error;

pub use emitter::{
    Emitter, Event, FireResult, Listener, ListenerOptions, Observable, Reply, Subscription,
    DEFAULT_PRIORITY,
};
pub use error::{EmitterError, Result};

/// Crate version, `MAJOR.MINOR.PATCH`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Class description string, e.g. `"[class herald::Emitter] v1.0.1"`.
pub fn class_info() -> String {
    format!("[class herald::Emitter] v{VERSION}")
}
