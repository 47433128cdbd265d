// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selected-value tracking layered on navigation state.

use hashbrown::HashSet;

use crate::{ListItem, ListNavigation};

/// Tracks which item values are selected, layered on a [`ListNavigation`]
/// cursor.
///
/// Selection identity is the item **value** (`V: Clone + Eq + Hash`), so
/// membership survives reordering of the host's item sequence. Two
/// invariants hold in every reachable state:
///
/// - a disabled item's value is never a member of the selection, and
/// - with `multi` off, the selection holds at most one value (enforced by
///   deselecting everything before a single-select insert).
///
/// Range selection pivots on an anchor pair: `range_start_index` is where
/// the current range began (set by [`ListSelection::begin_range`] or by an
/// anchoring select) and `range_end_index` is where it last ended.
/// [`ListSelection::select_range`] updates only the delta between the old
/// and new range — shrinking a shift-selection deselects exactly the items
/// that left the range.
///
/// ## Minimal example
///
/// ```
/// use overstory_list::{ListItem, ListNavigation, ListSelection};
///
/// let items = vec![
///     ListItem::new(0_u32, "a"),
///     ListItem::new(1_u32, "b"),
///     ListItem::new(2_u32, "c"),
///     ListItem::new(3_u32, "d"),
/// ];
/// let mut nav = ListNavigation::new();
/// let mut selection: ListSelection<&str> = ListSelection::new().with_multi(true);
///
/// // Select the active item (anchoring a range there), move, extend.
/// selection.select(&items, &nav);
/// nav.goto(&items, 2);
/// selection.select_from_anchor(&items, &nav);
/// let mut picked: Vec<_> = selection.values().copied().collect();
/// picked.sort_unstable();
/// assert_eq!(picked, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct ListSelection<V> {
    selected: HashSet<V>,
    range_start_index: usize,
    range_end_index: usize,
    /// Whether more than one value may be selected at a time.
    pub multi: bool,
}

impl<V> ListSelection<V>
where
    V: Clone + Eq + core::hash::Hash,
{
    /// Create an empty single-select selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
            range_start_index: 0,
            range_end_index: 0,
            multi: false,
        }
    }

    /// Set the multi-select flag.
    #[must_use]
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Whether `value` is currently selected.
    #[must_use]
    pub fn is_selected(&self, value: &V) -> bool {
        self.selected.contains(value)
    }

    /// Iterate the selected values (unordered).
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.selected.iter()
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop every selected value, including values no longer backed by any
    /// item. [`ListSelection::deselect_all`] is the item-aware variant.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Index where the current range began.
    #[must_use]
    pub fn range_start_index(&self) -> usize {
        self.range_start_index
    }

    /// Index where the current range last ended.
    #[must_use]
    pub fn range_end_index(&self) -> usize {
        self.range_end_index
    }

    /// Reset both range endpoints to `index`, beginning a fresh range.
    pub fn begin_range(&mut self, index: usize) {
        self.range_start_index = index;
        self.range_end_index = index;
    }

    /// Select the active item, anchoring a new range at it.
    ///
    /// No-op when the item is disabled or its value is already selected.
    /// With `multi` off, everything else is deselected first.
    pub fn select<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) -> bool {
        self.select_index(items, nav.active_index(), true)
    }

    /// Select the item at `index`; `anchor` controls whether a new range
    /// begins there.
    pub fn select_index<K>(
        &mut self,
        items: &[ListItem<K, V>],
        index: usize,
        anchor: bool,
    ) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };
        if item.disabled || self.selected.contains(&item.value) {
            return false;
        }
        if !self.multi {
            self.deselect_all(items);
        }
        if anchor {
            self.begin_range(index);
        }
        self.selected.insert(item.value.clone());
        true
    }

    /// Deselect the active item. No-op when the item is disabled.
    pub fn deselect<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) -> bool {
        self.deselect_index(items, nav.active_index())
    }

    /// Deselect the item at `index`. No-op when the item is disabled.
    pub fn deselect_index<K>(&mut self, items: &[ListItem<K, V>], index: usize) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };
        if item.disabled {
            return false;
        }
        self.selected.remove(&item.value)
    }

    /// Select the active item if unselected, deselect it otherwise.
    pub fn toggle<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) -> bool {
        let index = nav.active_index();
        let Some(item) = items.get(index) else {
            return false;
        };
        if self.selected.contains(&item.value) {
            self.deselect_index(items, index)
        } else {
            self.select_index(items, index, true)
        }
    }

    /// Like [`ListSelection::toggle`], but selecting goes through
    /// [`ListSelection::select_one`] so everything else is cleared first.
    pub fn toggle_one<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) -> bool {
        let index = nav.active_index();
        let Some(item) = items.get(index) else {
            return false;
        };
        if self.selected.contains(&item.value) {
            self.deselect_index(items, index)
        } else {
            self.select_one(items, nav)
        }
    }

    /// Select every non-disabled item. Gated on `multi`.
    pub fn select_all<K>(&mut self, items: &[ListItem<K, V>]) -> bool {
        if !self.multi {
            return false;
        }
        let mut changed = false;
        for index in 0..items.len() {
            changed |= self.select_index(items, index, false);
        }
        changed
    }

    /// Deselect every non-disabled item.
    pub fn deselect_all<K>(&mut self, items: &[ListItem<K, V>]) -> bool {
        let mut changed = false;
        for index in 0..items.len() {
            changed |= self.deselect_index(items, index);
        }
        changed
    }

    /// Deselect everything, then select the active item.
    pub fn select_one<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) -> bool {
        self.deselect_all(items);
        self.select(items, nav)
    }

    /// If every non-disabled item is selected, deselect all; otherwise
    /// select all. Gated on `multi`.
    pub fn toggle_all<K>(&mut self, items: &[ListItem<K, V>]) -> bool {
        if !self.multi {
            return false;
        }
        let all_selected = items
            .iter()
            .filter(|item| !item.disabled)
            .all(|item| self.selected.contains(&item.value));
        if all_selected {
            self.deselect_all(items);
        } else {
            self.select_all(items);
        }
        true
    }

    /// Select every non-disabled item between the range start and the active
    /// index, inclusive, in list order. Gated on `multi`.
    pub fn select_from_anchor<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) {
        if !self.multi {
            return;
        }
        let (lower, upper) = ordered(self.range_start_index, nav.active_index());
        for index in lower..=upper {
            self.select_index(items, index, false);
        }
        self.range_end_index = nav.active_index();
    }

    /// Apply toggle semantics across the anchor range: if the active item is
    /// selected the whole range deselects, otherwise it selects. Gated on
    /// `multi`.
    pub fn toggle_from_anchor<K>(&mut self, items: &[ListItem<K, V>], nav: &ListNavigation) {
        if !self.multi {
            return;
        }
        let deselecting = nav
            .active(items)
            .is_some_and(|item| self.selected.contains(&item.value));
        let (lower, upper) = ordered(self.range_start_index, nav.active_index());
        for index in lower..=upper {
            if deselecting {
                self.deselect_index(items, index);
            } else {
                self.select_index(items, index, false);
            }
        }
        self.range_end_index = nav.active_index();
    }

    /// Move the range to end at the active index, updating only the delta.
    ///
    /// Items between the old end and the new end that left the range are
    /// deselected; items inside the new range are selected. When `anchor` is
    /// set and the cursor is departing from the range start (the usual
    /// shift-arrow / shift-click case), a fresh range is begun at the
    /// departure point first. Gated on `multi`.
    pub fn select_range<K>(
        &mut self,
        items: &[ListItem<K, V>],
        nav: &ListNavigation,
        anchor: bool,
    ) {
        if !self.multi {
            return;
        }
        if anchor && nav.prev_active_index() == self.range_start_index {
            self.begin_range(nav.prev_active_index());
        }
        let active = nav.active_index();
        let (in_lower, in_upper) = ordered(self.range_start_index, active);
        let (out_lower, out_upper) = ordered(self.range_end_index, active);
        for index in out_lower..=out_upper {
            if index < in_lower || index > in_upper {
                self.deselect_index(items, index);
            }
        }
        for index in in_lower..=in_upper {
            self.select_index(items, index, false);
        }
        self.range_end_index = active;
    }
}

impl<V> Default for ListSelection<V>
where
    V: Clone + Eq + core::hash::Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

const fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}
