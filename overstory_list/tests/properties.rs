// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the navigation and selection invariants.

use overstory_list::{ListItem, ListNavigation, ListSelection};
use proptest::collection::vec;
use proptest::prelude::*;

fn make_items(disabled: &[bool]) -> Vec<ListItem<usize, usize>> {
    disabled
        .iter()
        .enumerate()
        .map(|(i, &d)| ListItem::new(i, i).with_disabled(d))
        .collect()
}

#[derive(Clone, Debug)]
enum Op {
    Next,
    Prev,
    First,
    Last,
    Goto(usize),
    Select,
    Deselect,
    Toggle,
    ToggleOne,
    SelectOne,
    SelectAll,
    DeselectAll,
    ToggleAll,
    BeginRange(usize),
    SelectFromAnchor,
    ToggleFromAnchor,
    SelectRange(bool),
}

fn op_strategy(max_index: usize) -> impl Strategy<Value = Op> {
    let movement = prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::First),
        Just(Op::Last),
        (0..=max_index).prop_map(Op::Goto),
    ];
    let selection = prop_oneof![
        Just(Op::Select),
        Just(Op::Deselect),
        Just(Op::Toggle),
        Just(Op::ToggleOne),
        Just(Op::SelectOne),
        Just(Op::SelectAll),
        Just(Op::DeselectAll),
        Just(Op::ToggleAll),
    ];
    let ranges = prop_oneof![
        (0..=max_index).prop_map(Op::BeginRange),
        Just(Op::SelectFromAnchor),
        Just(Op::ToggleFromAnchor),
        any::<bool>().prop_map(Op::SelectRange),
    ];
    prop_oneof![movement, selection, ranges]
}

fn apply(
    op: &Op,
    items: &[ListItem<usize, usize>],
    nav: &mut ListNavigation,
    selection: &mut ListSelection<usize>,
) {
    match *op {
        Op::Next => {
            nav.next(items);
        }
        Op::Prev => {
            nav.prev(items);
        }
        Op::First => {
            nav.first(items);
        }
        Op::Last => {
            nav.last(items);
        }
        Op::Goto(index) => {
            nav.goto(items, index);
        }
        Op::Select => {
            selection.select(items, nav);
        }
        Op::Deselect => {
            selection.deselect(items, nav);
        }
        Op::Toggle => {
            selection.toggle(items, nav);
        }
        Op::ToggleOne => {
            selection.toggle_one(items, nav);
        }
        Op::SelectOne => {
            selection.select_one(items, nav);
        }
        Op::SelectAll => {
            selection.select_all(items);
        }
        Op::DeselectAll => {
            selection.deselect_all(items);
        }
        Op::ToggleAll => {
            selection.toggle_all(items);
        }
        Op::BeginRange(index) => selection.begin_range(index),
        Op::SelectFromAnchor => selection.select_from_anchor(items, nav),
        Op::ToggleFromAnchor => selection.toggle_from_anchor(items, nav),
        Op::SelectRange(anchor) => selection.select_range(items, nav, anchor),
    }
}

proptest! {
    // With every item focusable, one `next` per item walks the full cycle.
    #[test]
    fn wrapping_next_round_trips_in_len_steps(
        disabled in vec(any::<bool>(), 1..8),
        start in 0_usize..8,
    ) {
        let items = make_items(&disabled);
        let mut nav = ListNavigation::with_options(true, false);
        nav.goto(&items, start % items.len());
        let origin = nav.active_index();

        for _ in 0..items.len() {
            nav.next(&items);
        }
        prop_assert_eq!(nav.active_index(), origin);
    }

    // Without wrap, the cursor can never move past the focusable edges.
    #[test]
    fn unwrapped_cursor_stays_within_focusable_edges(
        disabled in vec(any::<bool>(), 1..8),
        steps in vec(any::<bool>(), 0..24),
    ) {
        let items = make_items(&disabled);
        let mut nav = ListNavigation::with_options(false, true);

        let first = items.iter().position(|i| !i.disabled);
        let last = items.iter().rposition(|i| !i.disabled);
        for forward in steps {
            if forward { nav.next(&items); } else { nav.prev(&items); }
            if let (Some(first), Some(last)) = (first, last) {
                // Index 0 is also legal: it is the initial position even
                // when item 0 is disabled.
                let at = nav.active_index();
                prop_assert!(at == 0 || (at >= first && at <= last));
            } else {
                prop_assert_eq!(nav.active_index(), 0);
            }
        }
    }

    // Disabled values never enter the selection, under any op sequence.
    #[test]
    fn disabled_values_are_never_selected(
        disabled in vec(any::<bool>(), 1..8),
        ops in vec(op_strategy(8), 0..32),
        multi in any::<bool>(),
    ) {
        let items = make_items(&disabled);
        // skip_disabled off lets the cursor land on disabled items, which
        // stresses the selection-side rejection.
        let mut nav = ListNavigation::with_options(true, false);
        let mut selection: ListSelection<usize> = ListSelection::new().with_multi(multi);

        for op in &ops {
            apply(op, &items, &mut nav, &mut selection);
            for item in items.iter().filter(|item| item.disabled) {
                prop_assert!(!selection.is_selected(&item.value));
            }
        }
    }

    // Single-select mode never holds more than one value.
    #[test]
    fn single_select_never_exceeds_one_value(
        disabled in vec(any::<bool>(), 1..8),
        ops in vec(op_strategy(8), 0..32),
    ) {
        let items = make_items(&disabled);
        let mut nav = ListNavigation::new();
        let mut selection: ListSelection<usize> = ListSelection::new();

        for op in &ops {
            apply(op, &items, &mut nav, &mut selection);
            prop_assert!(selection.len() <= 1);
        }
    }

    // Selecting the same position twice changes nothing the second time.
    #[test]
    fn select_is_idempotent(
        disabled in vec(any::<bool>(), 1..8),
        index in 0_usize..8,
        multi in any::<bool>(),
    ) {
        let items = make_items(&disabled);
        let mut nav = ListNavigation::with_options(true, false);
        nav.goto(&items, index % items.len());
        let mut selection: ListSelection<usize> = ListSelection::new().with_multi(multi);

        selection.select(&items, &nav);
        let mut once: Vec<usize> = selection.values().copied().collect();
        once.sort_unstable();

        prop_assert!(!selection.select(&items, &nav));
        let mut twice: Vec<usize> = selection.values().copied().collect();
        twice.sort_unstable();
        prop_assert_eq!(once, twice);
    }
}
