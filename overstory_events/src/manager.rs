// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered event dispatch over a caller-owned context.
//!
//! [`EventManager`] holds an ordered list of [`EventEntry`] configurations.
//! [`EventManager::handle`] walks the list in registration order and fires
//! **every** entry whose matcher accepts the event. This multiple-dispatch
//! rule is load-bearing: composite widgets register overlapping bindings
//! (for example a printable-character matcher next to a space-key matcher)
//! and rely on all of them running for a single event.
//!
//! Events here are plain data. Instead of mutating a toolkit event object,
//! `handle` folds each fired entry's `prevent_default` / `stop_propagation`
//! flags into a [`Handled`] value that the host applies to its real event.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Union of the dispatch flags of every entry that fired for one event.
///
/// Returned by [`EventManager::handle`]. The host is responsible for
/// translating these into calls on its own event object (or ignoring them
/// in environments without default actions or propagation).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Handled {
    /// At least one fired entry asked for the event's default action to be
    /// suppressed.
    pub prevent_default: bool,
    /// At least one fired entry asked for propagation to stop.
    pub stop_propagation: bool,
}

/// A single dispatch configuration: a matcher, a handler, and flags.
///
/// Entries are inert until added to an [`EventManager`]. The handler receives
/// an exclusive borrow of the manager's context type `Cx`, which is how
/// pattern state is threaded through dispatch without shared ownership.
pub struct EventEntry<E, Cx> {
    matcher: Box<dyn Fn(&E) -> bool>,
    handler: Box<dyn FnMut(&mut Cx, &E)>,
    /// Whether this entry requests `prevent_default` when it fires.
    pub prevent_default: bool,
    /// Whether this entry requests `stop_propagation` when it fires.
    pub stop_propagation: bool,
}

impl<E, Cx> EventEntry<E, Cx> {
    /// Create an entry with both flags off.
    pub fn new(
        matcher: impl Fn(&E) -> bool + 'static,
        handler: impl FnMut(&mut Cx, &E) + 'static,
    ) -> Self {
        Self {
            matcher: Box::new(matcher),
            handler: Box::new(handler),
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// Set the `prevent_default` flag.
    #[must_use]
    pub fn with_prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }

    /// Set the `stop_propagation` flag.
    #[must_use]
    pub fn with_stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = stop_propagation;
        self
    }
}

impl<E, Cx> core::fmt::Debug for EventEntry<E, Cx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventEntry")
            .field("prevent_default", &self.prevent_default)
            .field("stop_propagation", &self.stop_propagation)
            .finish_non_exhaustive()
    }
}

/// An ordered list of [`EventEntry`] configurations for events of type `E`,
/// dispatching over a context of type `Cx`.
///
/// ## Usage
///
/// - Register entries with [`EventManager::add`]; registration order is
///   dispatch order.
/// - Call [`EventManager::handle`] once per input event with an exclusive
///   borrow of the context. All matching entries fire.
///
/// ## Minimal example
///
/// ```
/// use overstory_events::{EventEntry, EventManager};
///
/// // Events are whatever the host feeds in; here, a bare code.
/// struct Input(u32);
///
/// let mut manager: EventManager<Input, Vec<u32>> = EventManager::new();
/// manager
///     .add(EventEntry::new(|e: &Input| e.0 < 10, |log: &mut Vec<u32>, e| log.push(e.0)))
///     .add(EventEntry::new(|e: &Input| e.0 % 2 == 0, |log: &mut Vec<u32>, e| log.push(e.0 * 100)));
///
/// let mut log = Vec::new();
/// // Both entries match 4, so both fire, in registration order.
/// let handled = manager.handle(&mut log, &Input(4));
/// assert!(handled.is_some());
/// assert_eq!(log, vec![4, 400]);
///
/// // Nothing matches 11.
/// assert!(manager.handle(&mut log, &Input(11)).is_none());
/// ```
pub struct EventManager<E, Cx> {
    entries: Vec<EventEntry<E, Cx>>,
}

impl<E, Cx> EventManager<E, Cx> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry; entries fire in the order they were added.
    pub fn add(&mut self, entry: EventEntry<E, Cx>) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dispatch one event to every matching entry, in registration order.
    ///
    /// Returns `None` when no entry matched, otherwise the union of the
    /// fired entries' flags. A panicking handler is not caught; it unwinds
    /// to the caller.
    pub fn handle(&mut self, cx: &mut Cx, event: &E) -> Option<Handled> {
        let mut handled: Option<Handled> = None;
        for entry in &mut self.entries {
            if (entry.matcher)(event) {
                (entry.handler)(cx, event);
                let flags = handled.get_or_insert_default();
                flags.prevent_default |= entry.prevent_default;
                flags.stop_propagation |= entry.stop_propagation;
            }
        }
        handled
    }
}

impl<E, Cx> Default for EventManager<E, Cx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Cx> core::fmt::Debug for EventManager<E, Cx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventManager")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
