//! Registry — per-name listener lists kept in ascending priority order.
//!
//! Entries are stored as `Arc<Entry<I>>` so a dispatch snapshot is a handful
//! of ref-count bumps. Lists are created on first insert and dropped once
//! they are empty.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::listener::{Listener, ListenerOptions, Shared};

/// Split a possibly multi-name argument (`"open close"`) into event names.
pub(crate) fn split_names(names: &str) -> Vec<&str> {
    names.split_whitespace().collect()
}

// ============================================================================
// Entry
// ============================================================================

pub(crate) struct Entry<I> {
    pub(crate) listener: Listener<I>,
    pub(crate) priority: i32,
    pub(crate) scope: Option<Shared>,
    pub(crate) data: Option<Shared>,
    /// Present for `once` registrations; set by the first invocation.
    once: Option<AtomicBool>,
}

impl<I> Entry<I> {
    pub(crate) fn new(listener: Listener<I>, options: ListenerOptions, once: bool) -> Self {
        Self {
            priority: options.resolved_priority(),
            listener,
            scope: options.scope,
            data: options.data,
            once: once.then(|| AtomicBool::new(false)),
        }
    }

    pub(crate) fn is_once(&self) -> bool {
        self.once.is_some()
    }

    /// Returns `false` if this is a `once` entry that already ran.
    pub(crate) fn claim(&self) -> bool {
        match &self.once {
            Some(fired) => !fired.swap(true, Ordering::AcqRel),
            None => true,
        }
    }
}

// ============================================================================
// ListenerList
// ============================================================================

pub(crate) struct ListenerList<I> {
    pub(crate) name: String,
    entries: Vec<Arc<Entry<I>>>,
}

impl<I> ListenerList<I> {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn index_of(&self, listener: &Listener<I>) -> Option<usize> {
        self.entries.iter().position(|e| e.listener.same_as(listener))
    }

    /// Insert after the last entry whose priority is `<=` the new one, or at
    /// the front. Keeps ascending priority with registration order on ties.
    fn insert(&mut self, entry: Entry<I>) -> bool {
        if self.index_of(&entry.listener).is_some() {
            return false;
        }
        let at = self
            .entries
            .iter()
            .rposition(|e| e.priority <= entry.priority)
            .map_or(0, |i| i + 1);
        self.entries.insert(at, Arc::new(entry));
        true
    }

    fn remove(&mut self, listener: &Listener<I>) -> bool {
        match self.index_of(listener) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

pub(crate) struct Registry<I> {
    lists: HashMap<String, ListenerList<I>>,
}

impl<I> Registry<I> {
    pub(crate) fn new() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }

    /// Returns `false` when the listener was already registered under `name`.
    pub(crate) fn insert(&mut self, name: &str, entry: Entry<I>) -> bool {
        self.lists
            .entry(name.to_string())
            .or_insert_with(|| ListenerList::new(name))
            .insert(entry)
    }

    pub(crate) fn remove(&mut self, name: &str, listener: &Listener<I>) -> bool {
        let Some(list) = self.lists.get_mut(name) else {
            return false;
        };
        let removed = list.remove(listener);
        if list.entries.is_empty() {
            self.lists.remove(name);
        }
        removed
    }

    /// Remove exactly `entry` (by allocation), leaving a newer registration of
    /// the same listener alone.
    pub(crate) fn remove_entry(&mut self, name: &str, entry: &Arc<Entry<I>>) {
        let Some(list) = self.lists.get_mut(name) else {
            return;
        };
        list.entries.retain(|e| !Arc::ptr_eq(e, entry));
        if list.entries.is_empty() {
            self.lists.remove(name);
        }
    }

    /// Drop every listener registered under `name`. Returns how many were dropped.
    pub(crate) fn remove_list(&mut self, name: &str) -> usize {
        self.lists.remove(name).map_or(0, |list| list.entries.len())
    }

    pub(crate) fn clear(&mut self) {
        self.lists.clear();
    }

    pub(crate) fn snapshot(&self, name: &str) -> Vec<Arc<Entry<I>>> {
        self.lists
            .get(name)
            .map(|list| list.entries.clone())
            .unwrap_or_default()
    }

    pub(crate) fn contains(&self, name: &str, listener: &Listener<I>) -> bool {
        self.lists
            .get(name)
            .is_some_and(|list| list.index_of(listener).is_some())
    }

    pub(crate) fn len(&self, name: &str) -> usize {
        self.lists.get(name).map_or(0, |list| list.entries.len())
    }

    pub(crate) fn lists(&self) -> impl Iterator<Item = &ListenerList<I>> {
        self.lists.values()
    }

    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lists.keys().cloned().collect();
        names.sort();
        names
    }
}
