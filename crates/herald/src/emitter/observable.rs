//! Observable — lends the emitter operation set to a host type.
//!
//! A host owns an [`Emitter`] and implements the single accessor
//! [`Observable::emitter`]; every other method is a default that delegates to
//! it. Method resolution prefers a host's inherent methods over trait
//! methods, so a host that already has e.g. its own `fire` keeps it, and any
//! default can also be overridden inside the `impl`.

use super::emitter::{Emitter, Subscription};
use super::event::FireResult;
use super::listener::{Listener, ListenerOptions};
use crate::error::Result;

pub trait Observable {
    /// Payload type of the events this host fires.
    type Info;

    /// The emitter backing this host.
    fn emitter(&self) -> &Emitter<Self::Info>;

    fn on(&self, names: &str, listener: &Listener<Self::Info>) -> Option<Subscription<Self::Info>> {
        self.emitter().on(names, listener)
    }

    fn on_with(
        &self,
        names: &str,
        listener: &Listener<Self::Info>,
        options: ListenerOptions,
    ) -> Option<Subscription<Self::Info>> {
        self.emitter().on_with(names, listener, options)
    }

    fn try_on(&self, names: &str, listener: &Listener<Self::Info>) -> Result<Subscription<Self::Info>> {
        self.emitter().try_on(names, listener)
    }

    fn once(&self, names: &str, listener: &Listener<Self::Info>) -> Option<Subscription<Self::Info>> {
        self.emitter().once(names, listener)
    }

    fn once_with(
        &self,
        names: &str,
        listener: &Listener<Self::Info>,
        options: ListenerOptions,
    ) -> Option<Subscription<Self::Info>> {
        self.emitter().once_with(names, listener, options)
    }

    fn try_once(&self, names: &str, listener: &Listener<Self::Info>) -> Result<Subscription<Self::Info>> {
        self.emitter().try_once(names, listener)
    }

    fn off(&self, names: &str, listener: &Listener<Self::Info>) {
        self.emitter().off(names, listener);
    }

    fn offs(&self, names: &str) {
        self.emitter().offs(names);
    }

    fn off_all(&self) {
        self.emitter().off_all();
    }

    fn fire(&self, name: &str, info: impl Into<Option<Self::Info>>) -> FireResult<Self::Info> {
        self.emitter().fire(name, info)
    }

    fn fire_once(&self, name: &str, info: impl Into<Option<Self::Info>>) -> FireResult<Self::Info> {
        self.emitter().fire_once(name, info)
    }

    fn has_listener(&self, name: &str, listener: &Listener<Self::Info>) -> bool {
        self.emitter().has_listener(name, listener)
    }

    fn has_listeners(&self, name: &str) -> bool {
        self.emitter().has_listeners(name)
    }
}

/// Implement [`Observable`] for a host type by naming its emitter field.
///
/// ```
/// use herald::{impl_observable, Emitter, Observable};
///
/// struct Door {
///     events: Emitter<String>,
/// }
///
/// impl_observable!(Door, events, String);
///
/// let door = Door { events: Emitter::new() };
/// assert!(door.fire("open", None).as_bool());
/// ```
#[macro_export]
macro_rules! impl_observable {
    ($host:ty, $field:ident, $info:ty) => {
        impl $crate::Observable for $host {
            type Info = $info;

            fn emitter(&self) -> &$crate::Emitter<$info> {
                &self.$field
            }
        }
    };
}
