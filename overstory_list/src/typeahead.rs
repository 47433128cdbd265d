// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulating text query that drives navigation.

use alloc::string::String;

use crate::{ListItem, ListNavigation};

/// Default width of the typeahead window, in milliseconds.
pub const DEFAULT_TYPEAHEAD_DELAY_MS: u64 = 500;

/// Accumulates typed characters into a query and moves navigation to the
/// first matching item.
///
/// There is no timer: the host passes a monotonic millisecond timestamp into
/// [`ListTypeahead::search`] and the query expires when the next input (or an
/// [`ListTypeahead::is_typing`] probe) arrives past the deadline. Each
/// keystroke re-arms the deadline, so the query survives as long as
/// consecutive characters land within `delay_ms` of each other.
///
/// Matching scans forward from one past the index where the query began,
/// wraps to the items before it when the navigation cursor wraps, and
/// finally considers the start item itself, so repeated single-character
/// queries cycle through items sharing a prefix.
///
/// A lone space is ignored unless a query is already pending: hosts
/// typically reserve space for selection, and only treat it as text once the
/// user is visibly mid-search.
///
/// ## Minimal example
///
/// ```
/// use overstory_list::{ListItem, ListNavigation, ListTypeahead};
///
/// let items = vec![
///     ListItem::new(0_u32, 0).with_search_term("Apple"),
///     ListItem::new(1_u32, 1).with_search_term("Banana"),
///     ListItem::new(2_u32, 2).with_search_term("Blueberry"),
/// ];
/// let mut nav = ListNavigation::new();
/// let mut typeahead = ListTypeahead::new();
///
/// // "bl" within the window narrows to Blueberry.
/// assert!(typeahead.search(&items, &mut nav, 'b', 0));
/// assert_eq!(nav.active_index(), 1);
/// assert!(typeahead.search(&items, &mut nav, 'l', 100));
/// assert_eq!(nav.active_index(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ListTypeahead {
    query: String,
    start_index: Option<usize>,
    deadline: Option<u64>,
    /// Width of the typeahead window in milliseconds.
    pub delay_ms: u64,
}

impl ListTypeahead {
    /// Create a typeahead with the default window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            start_index: None,
            deadline: None,
            delay_ms: DEFAULT_TYPEAHEAD_DELAY_MS,
        }
    }

    /// Create a typeahead with an explicit window width.
    #[must_use]
    pub const fn with_delay(delay_ms: u64) -> Self {
        Self {
            query: String::new(),
            start_index: None,
            deadline: None,
            delay_ms,
        }
    }

    /// Whether a query is pending and its window has not expired at
    /// `now_ms`.
    #[must_use]
    pub fn is_typing(&self, now_ms: u64) -> bool {
        !self.query.is_empty() && self.deadline.is_some_and(|deadline| now_ms < deadline)
    }

    /// The pending query (possibly expired; see
    /// [`ListTypeahead::is_typing`]).
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Drop the pending query and its window.
    pub fn reset(&mut self) {
        self.query.clear();
        self.start_index = None;
        self.deadline = None;
    }

    /// Feed one typed character at time `now_ms`.
    ///
    /// Returns `true` when the (possibly grown) query matched an item and
    /// navigation moved to it.
    pub fn search<K, V>(
        &mut self,
        items: &[ListItem<K, V>],
        nav: &mut ListNavigation,
        c: char,
        now_ms: u64,
    ) -> bool {
        self.expire_if_due(now_ms);
        if self.query.is_empty() && c == ' ' {
            return false;
        }
        if self.start_index.is_none() {
            self.start_index = Some(nav.active_index());
        }
        for lower in c.to_lowercase() {
            self.query.push(lower);
        }
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));

        match self.find_match(items, nav) {
            Some(index) => nav.goto(items, index),
            None => false,
        }
    }

    fn expire_if_due(&mut self, now_ms: u64) {
        if self.deadline.is_some_and(|deadline| now_ms >= deadline) {
            self.reset();
        }
    }

    /// First focusable item, in scan order, whose search term starts with
    /// the query.
    fn find_match<K, V>(&self, items: &[ListItem<K, V>], nav: &ListNavigation) -> Option<usize> {
        let len = items.len();
        if len == 0 {
            return None;
        }
        let start = self.start_index.unwrap_or(nav.active_index()).min(len - 1);
        let before = if nav.wrap { 0..start } else { 0..0 };
        (start + 1..len)
            .chain(before)
            .chain(core::iter::once(start))
            .find(|&index| {
                nav.is_focusable(&items[index])
                    && starts_with_ignore_case(&items[index].search_term, &self.query)
            })
    }
}

impl Default for ListTypeahead {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive prefix test; `query` is already lowercased.
fn starts_with_ignore_case(term: &str, query: &str) -> bool {
    let mut term_chars = term.chars().flat_map(char::to_lowercase);
    for expected in query.chars() {
        match term_chars.next() {
            Some(actual) if actual == expected => {}
            _ => return false,
        }
    }
    true
}
