// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus bookkeeping derived from navigation state.

use crate::{ListItem, ListNavigation};

/// How a list exposes keyboard focus to the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusMode {
    /// Real focus roves between items: the active item is tabbable and the
    /// container is not.
    #[default]
    Roving,
    /// Focus stays on the container, which advertises the active item
    /// through an active-descendant id.
    ActiveDescendant,
}

/// Pure focus derivations over a [`ListNavigation`] cursor.
///
/// This type owns no cursor state of its own; every query recomputes from
/// the navigation state and item sequence passed in. Rather than touching a
/// toolkit, [`ListFocus::focus_target`] returns the id the host should
/// focus (or `None` when focus belongs on the container).
///
/// ## Minimal example
///
/// ```
/// use overstory_list::{FocusMode, ListFocus, ListItem, ListNavigation};
///
/// let items = vec![ListItem::new(10_u32, 'a'), ListItem::new(11_u32, 'b')];
/// let mut nav = ListNavigation::new();
/// nav.goto(&items, 1);
///
/// let roving = ListFocus::new(FocusMode::Roving);
/// assert_eq!(roving.focus_target(&items, &nav), Some(11));
/// assert_eq!(roving.active_descendant(&items, &nav), None);
/// assert_eq!(roving.list_tabindex(), -1);
/// assert_eq!(roving.item_tabindex(&nav, 1), 0);
///
/// let descendant = ListFocus::new(FocusMode::ActiveDescendant);
/// assert_eq!(descendant.focus_target(&items, &nav), None);
/// assert_eq!(descendant.active_descendant(&items, &nav), Some(11));
/// assert_eq!(descendant.list_tabindex(), 0);
/// assert_eq!(descendant.item_tabindex(&nav, 1), -1);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFocus {
    /// The focus convention in use.
    pub mode: FocusMode,
}

impl ListFocus {
    /// Create focus bookkeeping for `mode`.
    #[must_use]
    pub const fn new(mode: FocusMode) -> Self {
        Self { mode }
    }

    /// The id to expose as the container's active descendant.
    ///
    /// `None` under roving focus (the focused item speaks for itself) or
    /// when the active index has no item.
    #[must_use]
    pub fn active_descendant<K: Copy, V>(
        &self,
        items: &[ListItem<K, V>],
        nav: &ListNavigation,
    ) -> Option<K> {
        match self.mode {
            FocusMode::Roving => None,
            FocusMode::ActiveDescendant => nav.active(items).map(|item| item.id),
        }
    }

    /// Tabindex for the list container itself.
    #[must_use]
    pub const fn list_tabindex(&self) -> i32 {
        match self.mode {
            FocusMode::ActiveDescendant => 0,
            FocusMode::Roving => -1,
        }
    }

    /// Tabindex for the item at `index`.
    ///
    /// Items never take real focus under active-descendant mode; under
    /// roving focus exactly the active item is tabbable.
    #[must_use]
    pub const fn item_tabindex(&self, nav: &ListNavigation, index: usize) -> i32 {
        match self.mode {
            FocusMode::ActiveDescendant => -1,
            FocusMode::Roving => {
                if nav.active_index() == index {
                    0
                } else {
                    -1
                }
            }
        }
    }

    /// The id of the item the host should focus, if any.
    ///
    /// `None` under active-descendant mode (the container keeps focus) or
    /// when the active index has no item.
    #[must_use]
    pub fn focus_target<K: Copy, V>(
        &self,
        items: &[ListItem<K, V>],
        nav: &ListNavigation,
    ) -> Option<K> {
        match self.mode {
            FocusMode::ActiveDescendant => None,
            FocusMode::Roving => nav.active(items).map(|item| item.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn items() -> Vec<ListItem<u32, u32>> {
        (0..3).map(|i| ListItem::new(i + 100, i)).collect()
    }

    #[test]
    fn roving_mode_exposes_the_active_item_for_focus() {
        let items = items();
        let mut nav = ListNavigation::new();
        nav.goto(&items, 2);
        let focus = ListFocus::new(FocusMode::Roving);

        assert_eq!(focus.focus_target(&items, &nav), Some(102));
        assert_eq!(focus.active_descendant(&items, &nav), None);
        assert_eq!(focus.list_tabindex(), -1);
        assert_eq!(focus.item_tabindex(&nav, 2), 0);
        assert_eq!(focus.item_tabindex(&nav, 0), -1);
    }

    #[test]
    fn active_descendant_mode_keeps_focus_on_the_container() {
        let items = items();
        let mut nav = ListNavigation::new();
        nav.goto(&items, 1);
        let focus = ListFocus::new(FocusMode::ActiveDescendant);

        assert_eq!(focus.focus_target(&items, &nav), None);
        assert_eq!(focus.active_descendant(&items, &nav), Some(101));
        assert_eq!(focus.list_tabindex(), 0);
        // Items never take real tab focus, the active one included.
        assert_eq!(focus.item_tabindex(&nav, 0), -1);
        assert_eq!(focus.item_tabindex(&nav, 1), -1);
        assert_eq!(focus.item_tabindex(&nav, 2), -1);
    }

    #[test]
    fn empty_lists_have_no_focus_target() {
        let items: Vec<ListItem<u32, u32>> = Vec::new();
        let nav = ListNavigation::new();

        let roving = ListFocus::new(FocusMode::Roving);
        assert_eq!(roving.focus_target(&items, &nav), None);
        let descendant = ListFocus::new(FocusMode::ActiveDescendant);
        assert_eq!(descendant.active_descendant(&items, &nav), None);
    }
}
