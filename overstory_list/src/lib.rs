// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory List: headless list interaction state machines.
//!
//! This crate models the behavior of a list widget — where the active item
//! is, which values are selected, what the user has typed so far, and what
//! the host should focus — without knowing anything about rendering,
//! accessibility attributes, or any particular UI framework.
//!
//! The pieces layer bottom-up:
//!
//! - [`ListNavigation`]: an active-index cursor over an ordered item
//!   sequence, with wrap-around and disabled-item skipping.
//! - [`ListSelection`]: a set of selected item values layered on navigation
//!   state, with single/multi select, toggling, select-all, and anchored
//!   range selection with shrink/grow updates.
//! - [`ListTypeahead`]: an accumulating text query over a host-timed window
//!   that moves navigation to the best-matching item.
//! - [`ListFocus`]: pure derivations of focus bookkeeping (active-descendant
//!   id, list/item tabindex, focus target) under roving-tabindex or
//!   active-descendant conventions.
//!
//! Items are host-owned: every operation takes an `items: &[ListItem<K, V>]`
//! snapshot, so the host remains free to create and destroy items as its
//! views change. The state machines hold only their own cursor, selection,
//! and query state. Time is host-supplied as millisecond timestamps; nothing
//! here schedules or blocks.
//!
//! Invalid input never panics: navigating an empty list, selecting a
//! disabled item, or searching past the end all degrade to no-ops that
//! report `false`.
//!
//! ## Minimal example
//!
//! ```rust
//! use overstory_list::{ListItem, ListNavigation, ListSelection};
//!
//! let items = vec![
//!     ListItem::new(0_u32, "apple"),
//!     ListItem::new(1_u32, "banana").with_disabled(true),
//!     ListItem::new(2_u32, "cherry"),
//! ];
//!
//! let mut navigation = ListNavigation::new();
//! let mut selection: ListSelection<&str> = ListSelection::new();
//!
//! // The disabled item is skipped; wrap-around returns to the start.
//! assert!(navigation.next(&items));
//! assert_eq!(navigation.active_index(), 2);
//! assert!(navigation.next(&items));
//! assert_eq!(navigation.active_index(), 0);
//!
//! // Selection follows the active item and rejects duplicates.
//! assert!(selection.select(&items, &navigation));
//! assert!(!selection.select(&items, &navigation));
//! assert!(selection.is_selected(&"apple"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

mod focus;
mod navigation;
mod selection;
mod typeahead;

pub use focus::{FocusMode, ListFocus};
pub use navigation::ListNavigation;
pub use selection::ListSelection;
pub use typeahead::{DEFAULT_TYPEAHEAD_DELAY_MS, ListTypeahead};

/// A single participant in a list.
///
/// Items are owned by the host, which passes the current ordered sequence
/// into every operation. The patterns never create, destroy, or reorder
/// items.
///
/// The two identity fields serve different layers: `id` is a small copyable
/// handle for focus bookkeeping (typically mirroring a host node id), while
/// `value` is the application-level identity that selection tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem<K, V> {
    /// Stable per-view handle, used for focus and active-descendant output.
    pub id: K,
    /// Application-level identity, used for selection membership.
    pub value: V,
    /// Disabled items are skipped by navigation (configurable) and always
    /// rejected by selection.
    pub disabled: bool,
    /// Label matched by typeahead, case-insensitively.
    pub search_term: String,
}

impl<K, V> ListItem<K, V> {
    /// Create an enabled item with an empty search term.
    pub fn new(id: K, value: V) -> Self {
        Self {
            id,
            value,
            disabled: false,
            search_term: String::new(),
        }
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the typeahead search term.
    #[must_use]
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }
}
