// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-index cursor over an ordered item sequence.

use crate::ListItem;

/// Moves an active-index cursor over a host-owned item sequence.
///
/// The cursor remembers the previously active index, which range selection
/// uses as its pivot. Two public options shape movement:
///
/// - `wrap`: stepping past either end continues from the other end.
/// - `skip_disabled`: disabled items are not focusable and are stepped over.
///   With `skip_disabled` off, disabled items can be landed on (some hosts
///   keep disabled options reachable so assistive technology can announce
///   them); selection still rejects them.
///
/// Every operation returns whether the cursor moved. Operations on an empty
/// sequence, or with no reachable focusable item, are no-ops that return
/// `false`; the scan in [`ListNavigation::next`] / [`ListNavigation::prev`]
/// stops after one full circle, so a fully disabled list cannot loop
/// forever.
///
/// ## Minimal example
///
/// ```
/// use overstory_list::{ListItem, ListNavigation};
///
/// let items = vec![
///     ListItem::new(0_u32, 'a'),
///     ListItem::new(1_u32, 'b').with_disabled(true),
///     ListItem::new(2_u32, 'c'),
/// ];
///
/// let mut navigation = ListNavigation::new();
/// assert!(navigation.next(&items));
/// // The disabled item was skipped.
/// assert_eq!(navigation.active_index(), 2);
/// assert_eq!(navigation.prev_active_index(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListNavigation {
    active_index: usize,
    prev_active_index: usize,
    /// Whether stepping past either end wraps to the other end.
    pub wrap: bool,
    /// Whether disabled items are skipped during movement.
    pub skip_disabled: bool,
}

impl ListNavigation {
    /// Create a cursor at index 0 with wrapping and disabled-skipping on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_index: 0,
            prev_active_index: 0,
            wrap: true,
            skip_disabled: true,
        }
    }

    /// Create a cursor at index 0 with explicit options.
    #[must_use]
    pub const fn with_options(wrap: bool, skip_disabled: bool) -> Self {
        Self {
            active_index: 0,
            prev_active_index: 0,
            wrap,
            skip_disabled,
        }
    }

    /// The currently active index.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// The active index before the most recent successful move.
    #[must_use]
    pub const fn prev_active_index(&self) -> usize {
        self.prev_active_index
    }

    /// Overwrite the active index without focusability checks.
    ///
    /// For host resynchronization after the item sequence changes (for
    /// example, restoring a persisted cursor). Movement operations keep the
    /// index in bounds themselves.
    pub const fn set_active_index(&mut self, index: usize) {
        self.active_index = index;
    }

    /// The currently active item, if the index is in bounds.
    #[must_use]
    pub fn active<'a, K, V>(&self, items: &'a [ListItem<K, V>]) -> Option<&'a ListItem<K, V>> {
        items.get(self.active_index)
    }

    /// Whether `item` can become the active item.
    #[must_use]
    pub fn is_focusable<K, V>(&self, item: &ListItem<K, V>) -> bool {
        !item.disabled || !self.skip_disabled
    }

    /// Move the cursor to `index` if that item is focusable.
    ///
    /// On success the outgoing index is recorded as the previous active
    /// index. Out-of-bounds or non-focusable targets are no-ops.
    pub fn goto<K, V>(&mut self, items: &[ListItem<K, V>], index: usize) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };
        if !self.is_focusable(item) {
            return false;
        }
        self.prev_active_index = self.active_index;
        self.active_index = index;
        true
    }

    /// Advance to the next focusable item.
    pub fn next<K, V>(&mut self, items: &[ListItem<K, V>]) -> bool {
        self.advance(items, true)
    }

    /// Advance to the previous focusable item.
    pub fn prev<K, V>(&mut self, items: &[ListItem<K, V>]) -> bool {
        self.advance(items, false)
    }

    /// Jump to the first focusable item in sequence order.
    pub fn first<K, V>(&mut self, items: &[ListItem<K, V>]) -> bool {
        match items.iter().position(|item| self.is_focusable(item)) {
            Some(index) => self.goto(items, index),
            None => false,
        }
    }

    /// Jump to the last focusable item in sequence order.
    pub fn last<K, V>(&mut self, items: &[ListItem<K, V>]) -> bool {
        match items.iter().rposition(|item| self.is_focusable(item)) {
            Some(index) => self.goto(items, index),
            None => false,
        }
    }

    fn advance<K, V>(&mut self, items: &[ListItem<K, V>], forward: bool) -> bool {
        let len = items.len();
        if len == 0 {
            return false;
        }
        let wrap = self.wrap;
        let start = self.active_index.min(len - 1);
        let mut index = start;
        loop {
            index = match step(index, len, forward, wrap) {
                Some(next) => next,
                None => return false,
            };
            if index == start {
                // Full circle with no focusable candidate.
                return false;
            }
            if self.is_focusable(&items[index]) {
                return self.goto(items, index);
            }
        }
    }
}

impl Default for ListNavigation {
    fn default() -> Self {
        Self::new()
    }
}

const fn step(index: usize, len: usize, forward: bool, wrap: bool) -> Option<usize> {
    if forward {
        if index + 1 < len {
            Some(index + 1)
        } else if wrap {
            Some(0)
        } else {
            None
        }
    } else if index > 0 {
        Some(index - 1)
    } else if wrap {
        Some(len - 1)
    } else {
        None
    }
}
