// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The listbox pattern: behaviors, options, and event wiring.

use overstory_events::{
    Handled, Key, KeyMatch, KeyboardEvent, KeyboardEventManager, ModifierMatch, Modifiers,
    PointerButton, PointerEvent, PointerEventManager,
};
use overstory_list::{
    DEFAULT_TYPEAHEAD_DELAY_MS, FocusMode, ListFocus, ListItem, ListNavigation, ListSelection,
    ListTypeahead,
};

use crate::option::OptionState;

/// Main axis of the list, which decides the navigation arrow keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items stack top to bottom; Up/Down arrows navigate.
    #[default]
    Vertical,
    /// Items flow along the reading direction; Left/Right arrows navigate.
    Horizontal,
}

/// Reading direction of the surrounding document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; horizontal arrow keys mirror.
    Rtl,
}

/// Construction-time configuration for [`ListboxPattern`].
///
/// Every field is also reachable afterwards through the pattern's public
/// fields (`wrap` and `skip_disabled` on the navigation, `multi` on the
/// selection, `delay_ms` on the typeahead, `mode` on the focus).
#[derive(Clone, Debug)]
pub struct ListboxOptions {
    /// Whether navigation wraps past the ends.
    pub wrap: bool,
    /// Whether navigation skips disabled items.
    pub skip_disabled: bool,
    /// Whether more than one value may be selected.
    pub multi: bool,
    /// Focus convention (roving tabindex or active-descendant).
    pub focus_mode: FocusMode,
    /// Main axis of the list.
    pub orientation: Orientation,
    /// Reading direction, which mirrors horizontal arrows.
    pub text_direction: TextDirection,
    /// Typeahead window width in milliseconds.
    pub typeahead_delay_ms: u64,
    /// Read-only lists navigate and search but never change selection.
    pub readonly: bool,
    /// Disabled lists ignore input entirely.
    pub disabled: bool,
    /// Whether selection follows the navigation cursor (selection-follows-
    /// focus) instead of waiting for an explicit toggle.
    pub selection_follows_focus: bool,
}

impl Default for ListboxOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            skip_disabled: true,
            multi: false,
            focus_mode: FocusMode::Roving,
            orientation: Orientation::Vertical,
            text_direction: TextDirection::Ltr,
            typeahead_delay_ms: DEFAULT_TYPEAHEAD_DELAY_MS,
            readonly: false,
            disabled: false,
            selection_follows_focus: false,
        }
    }
}

/// What, if anything, a navigation or pointer binding does to the selection
/// after moving the cursor.
#[derive(Copy, Clone, Debug)]
enum SelectOp {
    None,
    SelectOne,
    Toggle,
    ToggleOne,
    SelectRange { anchor: bool },
}

/// A listbox: one navigation cursor, one selection, one typeahead, and one
/// focus derivation, driven by keyboard and pointer events.
///
/// The pattern is headless. Hosts feed events into
/// [`ListboxPattern::on_keydown`] / [`ListboxPattern::on_pointerdown`] and
/// afterwards re-read the computed surface —
/// [`ListboxPattern::focus_target`], [`ListboxPattern::active_descendant`],
/// [`ListboxPattern::tabindex`], [`ListboxPattern::option`] — to project
/// onto their widgets. Items are host-owned and passed in per call.
///
/// Both entry points assemble their event manager on demand from the
/// current option flags, so flipping `readonly`, `multi`, or
/// `selection_follows_focus` between events changes the wiring immediately.
///
/// ## Minimal example
///
/// ```
/// use overstory_events::{Key, KeyboardEvent};
/// use overstory_list::ListItem;
/// use overstory_listbox::{ListboxOptions, ListboxPattern};
///
/// let items = vec![
///     ListItem::new(0_u32, "apple").with_search_term("Apple"),
///     ListItem::new(1_u32, "banana").with_search_term("Banana"),
/// ];
/// let mut listbox: ListboxPattern<&str> = ListboxPattern::new(ListboxOptions {
///     selection_follows_focus: true,
///     ..ListboxOptions::default()
/// });
///
/// // Arrow down: the cursor moves and, in follows-focus mode, selection
/// // comes along.
/// listbox.on_keydown(&items, &KeyboardEvent::new(Key::ArrowDown), 0);
/// assert_eq!(listbox.active_index(), 1);
/// assert!(listbox.selection.is_selected(&"banana"));
/// assert_eq!(listbox.focus_target(&items), Some(1));
/// ```
#[derive(Debug)]
pub struct ListboxPattern<V> {
    /// The active-index cursor.
    pub navigation: ListNavigation,
    /// The selected-value set and range anchor.
    pub selection: ListSelection<V>,
    /// The accumulating text query.
    pub typeahead: ListTypeahead,
    /// Focus bookkeeping derivations.
    pub focus: ListFocus,
    /// Main axis of the list.
    pub orientation: Orientation,
    /// Reading direction.
    pub text_direction: TextDirection,
    /// Read-only lists navigate and search but never change selection.
    pub readonly: bool,
    /// Disabled lists ignore input entirely.
    pub disabled: bool,
    /// Whether selection follows the navigation cursor.
    pub selection_follows_focus: bool,
}

impl<V> ListboxPattern<V>
where
    V: Clone + Eq + core::hash::Hash,
{
    /// Build a listbox from options.
    #[must_use]
    pub fn new(options: ListboxOptions) -> Self {
        Self {
            navigation: ListNavigation::with_options(options.wrap, options.skip_disabled),
            selection: ListSelection::new().with_multi(options.multi),
            typeahead: ListTypeahead::with_delay(options.typeahead_delay_ms),
            focus: ListFocus::new(options.focus_mode),
            orientation: options.orientation,
            text_direction: options.text_direction,
            readonly: options.readonly,
            disabled: options.disabled,
            selection_follows_focus: options.selection_follows_focus,
        }
    }

    /// The key that moves the cursor forward, given orientation and reading
    /// direction.
    #[must_use]
    pub const fn next_key(&self) -> Key {
        match self.orientation {
            Orientation::Vertical => Key::ArrowDown,
            Orientation::Horizontal => match self.text_direction {
                TextDirection::Ltr => Key::ArrowRight,
                TextDirection::Rtl => Key::ArrowLeft,
            },
        }
    }

    /// The key that moves the cursor backward.
    #[must_use]
    pub const fn prev_key(&self) -> Key {
        match self.orientation {
            Orientation::Vertical => Key::ArrowUp,
            Orientation::Horizontal => match self.text_direction {
                TextDirection::Ltr => Key::ArrowLeft,
                TextDirection::Rtl => Key::ArrowRight,
            },
        }
    }

    /// Tabindex the host should project onto the list container.
    #[must_use]
    pub const fn tabindex(&self) -> i32 {
        self.focus.list_tabindex()
    }

    /// The currently active index.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    /// Number of items, for `aria-setsize`-style projection.
    #[must_use]
    pub fn setsize<K>(&self, items: &[ListItem<K, V>]) -> usize {
        items.len()
    }

    /// Id to expose as the container's active descendant, when the focus
    /// mode calls for one.
    #[must_use]
    pub fn active_descendant<K: Copy>(&self, items: &[ListItem<K, V>]) -> Option<K> {
        self.focus.active_descendant(items, &self.navigation)
    }

    /// Id of the item the host should focus after an event, if any.
    #[must_use]
    pub fn focus_target<K: Copy>(&self, items: &[ListItem<K, V>]) -> Option<K> {
        self.focus.focus_target(items, &self.navigation)
    }

    /// Resolve one option's current state by id.
    ///
    /// The lookup runs against the live item sequence on every call, so the
    /// snapshot never goes stale with the sequence. Unknown ids yield
    /// `None`.
    #[must_use]
    pub fn option<K: Copy + Eq>(
        &self,
        items: &[ListItem<K, V>],
        id: K,
    ) -> Option<OptionState<K>> {
        let index = items.iter().position(|item| item.id == id)?;
        let item = &items[index];
        Some(OptionState {
            id,
            index,
            setsize: items.len(),
            active: self.navigation.active_index() == index,
            selected: self.selection.is_selected(&item.value),
            disabled: item.disabled,
            tabindex: self.focus.item_tabindex(&self.navigation, index),
        })
    }

    /// Route one keyboard event.
    ///
    /// `now_ms` is the host's monotonic timestamp, which drives the
    /// typeahead window. Returns `None` when the listbox is disabled or no
    /// binding matched; otherwise the flags the host should apply to its
    /// real event.
    pub fn on_keydown<K: Copy + Eq>(
        &mut self,
        items: &[ListItem<K, V>],
        event: &KeyboardEvent,
        now_ms: u64,
    ) -> Option<Handled> {
        if self.disabled {
            return None;
        }
        let mut manager = self.keydown_manager::<K>();
        let mut cx = ListboxCx {
            items,
            navigation: &mut self.navigation,
            selection: &mut self.selection,
            typeahead: &mut self.typeahead,
            now_ms,
        };
        manager.handle(&mut cx, event)
    }

    /// Route one pointer event.
    ///
    /// The event's `target` carries the id of the pressed item as resolved
    /// by the host; events without a resolvable target are no-ops.
    pub fn on_pointerdown<K: Copy + Eq + 'static>(
        &mut self,
        items: &[ListItem<K, V>],
        event: &PointerEvent<K>,
    ) -> Option<Handled> {
        if self.disabled {
            return None;
        }
        let mut manager = self.pointer_manager::<K>();
        let mut cx = ListboxCx {
            items,
            navigation: &mut self.navigation,
            selection: &mut self.selection,
            typeahead: &mut self.typeahead,
            now_ms: 0,
        };
        manager.handle(&mut cx, event)
    }

    /// Assemble the keydown manager for the current option flags.
    fn keydown_manager<'a, K>(&self) -> KeyboardEventManager<ListboxCx<'a, K, V>>
    where
        K: Copy + Eq,
    {
        let next_key = self.next_key();
        let prev_key = self.prev_key();
        let readonly = self.readonly;
        let follow = self.selection_follows_focus && !readonly;
        let multi = self.selection.multi;

        let mut manager: KeyboardEventManager<ListboxCx<'a, K, V>> = KeyboardEventManager::new();
        let nav_op = if follow {
            SelectOp::SelectOne
        } else {
            SelectOp::None
        };

        manager
            .on(prev_key, move |cx, _| cx.prev(nav_op))
            .on(next_key, move |cx, _| cx.next(nav_op))
            .on(Key::Home, move |cx, _| cx.first(nav_op))
            .on(Key::End, move |cx, _| cx.last(nav_op))
            .on_with(
                [Modifiers::empty(), Modifiers::SHIFT],
                KeyMatch::AnyChar,
                move |cx, event| cx.search(event, nav_op),
            );

        if readonly {
            return manager;
        }

        if follow {
            // Decouple movement from selection while a modifier is held.
            manager
                .on_with([Modifiers::CTRL, Modifiers::META], prev_key, |cx, _| {
                    cx.prev(SelectOp::None)
                })
                .on_with([Modifiers::CTRL, Modifiers::META], next_key, |cx, _| {
                    cx.next(SelectOp::None)
                })
                .on_with([Modifiers::CTRL, Modifiers::META], Key::Home, |cx, _| {
                    cx.first(SelectOp::None)
                })
                .on_with([Modifiers::CTRL, Modifiers::META], Key::End, |cx, _| {
                    cx.last(SelectOp::None)
                });
            if multi {
                manager
                    .on_with([Modifiers::CTRL, Modifiers::META], Key::Enter, |cx, _| {
                        cx.apply(SelectOp::Toggle)
                    })
                    .on_with([Modifiers::CTRL, Modifiers::META], ' ', |cx, _| {
                        cx.unless_typing(SelectOp::Toggle)
                    });
            }
        } else {
            let op = if multi {
                SelectOp::Toggle
            } else {
                SelectOp::ToggleOne
            };
            manager
                .on(Key::Enter, move |cx, _| cx.apply(op))
                .on(' ', move |cx, _| cx.unless_typing(op));
        }

        if multi {
            manager
                .on_with(ModifierMatch::Any, Key::Shift, |cx, _| cx.begin_range())
                .on_with(Modifiers::SHIFT, prev_key, |cx, _| {
                    cx.prev(SelectOp::SelectRange { anchor: true })
                })
                .on_with(Modifiers::SHIFT, next_key, |cx, _| {
                    cx.next(SelectOp::SelectRange { anchor: true })
                })
                .on_with(
                    [
                        Modifiers::CTRL | Modifiers::SHIFT,
                        Modifiers::META | Modifiers::SHIFT,
                    ],
                    Key::Home,
                    |cx, _| cx.first(SelectOp::SelectRange { anchor: false }),
                )
                .on_with(
                    [
                        Modifiers::CTRL | Modifiers::SHIFT,
                        Modifiers::META | Modifiers::SHIFT,
                    ],
                    Key::End,
                    |cx, _| cx.last(SelectOp::SelectRange { anchor: false }),
                )
                .on_with(Modifiers::SHIFT, Key::Enter, |cx, _| {
                    cx.apply(SelectOp::SelectRange { anchor: false })
                })
                .on_with(Modifiers::SHIFT, ' ', |cx, _| {
                    cx.unless_typing(SelectOp::SelectRange { anchor: false })
                });
            let keep_active_selected = follow;
            manager.on_with([Modifiers::CTRL, Modifiers::META], 'a', move |cx, _| {
                cx.toggle_all(keep_active_selected)
            });
        }

        manager
    }

    /// Assemble the pointerdown manager for the current option flags.
    fn pointer_manager<'a, K>(&self) -> PointerEventManager<K, ListboxCx<'a, K, V>>
    where
        K: Copy + Eq + 'static,
    {
        let follow = self.selection_follows_focus;
        let multi = self.selection.multi;

        let mut manager: PointerEventManager<K, ListboxCx<'a, K, V>> = PointerEventManager::new();
        if self.readonly {
            manager.on(|cx, event| cx.goto_target(event, SelectOp::None));
            return manager;
        }

        if multi {
            manager.on_with(PointerButton::Main, Modifiers::SHIFT, |cx, event| {
                cx.goto_target(event, SelectOp::SelectRange { anchor: true })
            });
            if follow {
                manager
                    .on(|cx, event| cx.goto_target(event, SelectOp::SelectOne))
                    .on_with(PointerButton::Main, Modifiers::CTRL, |cx, event| {
                        cx.goto_target(event, SelectOp::Toggle)
                    })
                    .on_with(PointerButton::Main, Modifiers::META, |cx, event| {
                        cx.goto_target(event, SelectOp::Toggle)
                    });
            } else {
                manager.on(|cx, event| cx.goto_target(event, SelectOp::Toggle));
            }
        } else if follow {
            manager.on(|cx, event| cx.goto_target(event, SelectOp::SelectOne));
        } else {
            manager.on(|cx, event| cx.goto_target(event, SelectOp::ToggleOne));
        }
        manager
    }
}

impl<V> Default for ListboxPattern<V>
where
    V: Clone + Eq + core::hash::Hash,
{
    fn default() -> Self {
        Self::new(ListboxOptions::default())
    }
}

/// Exclusive view of the listbox state threaded through event handlers.
struct ListboxCx<'a, K, V> {
    items: &'a [ListItem<K, V>],
    navigation: &'a mut ListNavigation,
    selection: &'a mut ListSelection<V>,
    typeahead: &'a mut ListTypeahead,
    now_ms: u64,
}

impl<K, V> ListboxCx<'_, K, V>
where
    K: Copy + Eq,
    V: Clone + Eq + core::hash::Hash,
{
    fn next(&mut self, op: SelectOp) {
        self.navigation.next(self.items);
        self.apply(op);
    }

    fn prev(&mut self, op: SelectOp) {
        self.navigation.prev(self.items);
        self.apply(op);
    }

    fn first(&mut self, op: SelectOp) {
        self.navigation.first(self.items);
        self.apply(op);
    }

    fn last(&mut self, op: SelectOp) {
        self.navigation.last(self.items);
        self.apply(op);
    }

    fn search(&mut self, event: &KeyboardEvent, op: SelectOp) {
        let Key::Char(c) = event.key else {
            return;
        };
        if self.typeahead.search(self.items, self.navigation, c, self.now_ms) {
            self.apply(op);
        }
    }

    /// Apply `op` unless the user is mid-typeahead; keeps space usable as
    /// query text once a search has started.
    fn unless_typing(&mut self, op: SelectOp) {
        if !self.typeahead.is_typing(self.now_ms) {
            self.apply(op);
        }
    }

    fn begin_range(&mut self) {
        self.selection.begin_range(self.navigation.active_index());
    }

    fn toggle_all(&mut self, keep_active_selected: bool) {
        self.selection.toggle_all(self.items);
        if keep_active_selected {
            // Selection keeps following focus even across a full clear.
            self.selection.select(self.items, self.navigation);
        }
    }

    fn goto_target(&mut self, event: &PointerEvent<K>, op: SelectOp) {
        let Some(target) = event.target else {
            return;
        };
        let Some(index) = self.items.iter().position(|item| item.id == target) else {
            return;
        };
        if self.navigation.goto(self.items, index) {
            self.apply(op);
        }
    }

    fn apply(&mut self, op: SelectOp) {
        match op {
            SelectOp::None => {}
            SelectOp::SelectOne => {
                self.selection.select_one(self.items, self.navigation);
            }
            SelectOp::Toggle => {
                self.selection.toggle(self.items, self.navigation);
            }
            SelectOp::ToggleOne => {
                self.selection.toggle_one(self.items, self.navigation);
            }
            SelectOp::SelectRange { anchor } => {
                self.selection.select_range(self.items, self.navigation, anchor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn fruit() -> Vec<ListItem<u32, &'static str>> {
        vec![
            ListItem::new(0, "apple").with_search_term("Apple"),
            ListItem::new(1, "banana").with_search_term("Banana"),
            ListItem::new(2, "blueberry").with_search_term("Blueberry"),
            ListItem::new(3, "cherry").with_search_term("Cherry"),
        ]
    }

    fn listbox(configure: impl FnOnce(&mut ListboxOptions)) -> ListboxPattern<&'static str> {
        let mut options = ListboxOptions::default();
        configure(&mut options);
        ListboxPattern::new(options)
    }

    fn key(k: Key) -> KeyboardEvent {
        KeyboardEvent::new(k)
    }

    fn key_with(k: Key, modifiers: Modifiers) -> KeyboardEvent {
        KeyboardEvent::new(k).with_modifiers(modifiers)
    }

    fn click(target: u32) -> PointerEvent<u32> {
        PointerEvent::new().with_target(target)
    }

    fn selected(listbox: &ListboxPattern<&'static str>) -> Vec<&'static str> {
        let mut values: Vec<&'static str> = listbox.selection.values().copied().collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn vertical_arrows_move_the_cursor() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        let handled = lb.on_keydown(&items, &key(Key::ArrowDown), 0).unwrap();
        assert_eq!(lb.active_index(), 1);
        assert!(handled.prevent_default);
        assert!(handled.stop_propagation);

        lb.on_keydown(&items, &key(Key::ArrowUp), 0);
        assert_eq!(lb.active_index(), 0);

        // Roving focus follows the cursor.
        lb.on_keydown(&items, &key(Key::End), 0);
        assert_eq!(lb.active_index(), 3);
        assert_eq!(lb.focus_target(&items), Some(3));
        lb.on_keydown(&items, &key(Key::Home), 0);
        assert_eq!(lb.active_index(), 0);
    }

    #[test]
    fn disabled_items_are_skipped_and_wrapping_returns_home() {
        let mut items = fruit();
        items.truncate(3);
        items[1].disabled = true;
        let mut lb = listbox(|_| {});

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(lb.active_index(), 2);
        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(lb.active_index(), 0);
    }

    #[test]
    fn horizontal_rtl_mirrors_arrow_keys() {
        let items = fruit();
        let mut lb = listbox(|o| {
            o.orientation = Orientation::Horizontal;
            o.text_direction = TextDirection::Rtl;
        });

        assert_eq!(lb.next_key(), Key::ArrowLeft);
        assert_eq!(lb.prev_key(), Key::ArrowRight);

        lb.on_keydown(&items, &key(Key::ArrowLeft), 0);
        assert_eq!(lb.active_index(), 1);
        lb.on_keydown(&items, &key(Key::ArrowRight), 0);
        assert_eq!(lb.active_index(), 0);
        // The vertical keys mean nothing to a horizontal list.
        assert!(lb.on_keydown(&items, &key(Key::ArrowDown), 0).is_none());
    }

    #[test]
    fn follows_focus_selects_on_navigation() {
        let items = fruit();
        let mut lb = listbox(|o| o.selection_follows_focus = true);

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(selected(&lb), vec!["banana"]);
        lb.on_keydown(&items, &key(Key::End), 0);
        assert_eq!(selected(&lb), vec!["cherry"]);
    }

    #[test]
    fn follows_focus_ctrl_moves_without_selecting() {
        let items = fruit();
        let mut lb = listbox(|o| o.selection_follows_focus = true);

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(selected(&lb), vec!["banana"]);

        lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::CTRL), 0);
        assert_eq!(lb.active_index(), 2);
        // The selection stayed behind.
        assert_eq!(selected(&lb), vec!["banana"]);
    }

    #[test]
    fn explicit_mode_space_and_enter_toggle() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert!(selected(&lb).is_empty());

        lb.on_keydown(&items, &key(Key::Char(' ')), 0);
        assert_eq!(selected(&lb), vec!["banana"]);
        lb.on_keydown(&items, &key(Key::Char(' ')), 0);
        assert!(selected(&lb).is_empty());

        lb.on_keydown(&items, &key(Key::Enter), 0);
        assert_eq!(selected(&lb), vec!["banana"]);

        // Single select: choosing elsewhere replaces the value.
        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        lb.on_keydown(&items, &key(Key::Enter), 0);
        assert_eq!(selected(&lb), vec!["blueberry"]);
    }

    #[test]
    fn readonly_navigates_and_searches_but_never_selects() {
        let items = fruit();
        let mut lb = listbox(|o| {
            o.readonly = true;
            o.multi = true;
        });

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(lb.active_index(), 1);
        lb.on_keydown(&items, &key(Key::Char('c')), 0);
        assert_eq!(lb.active_index(), 3);

        lb.on_keydown(&items, &key(Key::Char(' ')), 10_000);
        lb.on_keydown(&items, &key(Key::Enter), 10_000);
        lb.on_keydown(&items, &key_with(Key::Char('a'), Modifiers::CTRL), 10_000);
        assert!(selected(&lb).is_empty());

        // Pointer presses still move the cursor, nothing more.
        lb.on_pointerdown(&items, &click(0));
        assert_eq!(lb.active_index(), 0);
        assert!(selected(&lb).is_empty());
    }

    #[test]
    fn disabled_listbox_ignores_input() {
        let items = fruit();
        let mut lb = listbox(|o| o.disabled = true);

        assert!(lb.on_keydown(&items, &key(Key::ArrowDown), 0).is_none());
        assert!(lb.on_pointerdown(&items, &click(2)).is_none());
        assert_eq!(lb.active_index(), 0);
        assert!(selected(&lb).is_empty());
    }

    #[test]
    fn shift_arrows_extend_and_shrink_a_range() {
        let items = fruit();
        let mut lb = listbox(|o| o.multi = true);

        // Select the starting point, then extend two steps down.
        lb.on_keydown(&items, &key(Key::Char(' ')), 0);
        lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::SHIFT), 0);
        lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::SHIFT), 0);
        assert_eq!(selected(&lb), vec!["apple", "banana", "blueberry"]);

        // Step back: only the last item leaves the selection.
        lb.on_keydown(&items, &key_with(Key::ArrowUp, Modifiers::SHIFT), 0);
        assert_eq!(selected(&lb), vec!["apple", "banana"]);
    }

    #[test]
    fn shift_end_selects_through_the_far_edge() {
        let items = fruit();
        let mut lb = listbox(|o| o.multi = true);

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        lb.on_keydown(&items, &key(Key::Char(' ')), 0);
        lb.on_keydown(
            &items,
            &key_with(Key::End, Modifiers::CTRL | Modifiers::SHIFT),
            0,
        );
        assert_eq!(selected(&lb), vec!["banana", "blueberry", "cherry"]);
        assert_eq!(lb.active_index(), 3);
    }

    #[test]
    fn bare_shift_press_anchors_the_range_at_the_cursor() {
        let items = fruit();
        let mut lb = listbox(|o| o.multi = true);

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        lb.on_keydown(&items, &key_with(Key::Shift, Modifiers::SHIFT), 0);
        assert_eq!(lb.selection.range_start_index(), 1);

        lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::SHIFT), 0);
        lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::SHIFT), 0);
        assert_eq!(selected(&lb), vec!["banana", "blueberry", "cherry"]);
    }

    #[test]
    fn ctrl_a_toggles_the_whole_selection() {
        let items = fruit();
        let mut lb = listbox(|o| o.multi = true);

        lb.on_keydown(&items, &key_with(Key::Char('a'), Modifiers::CTRL), 0);
        assert_eq!(
            selected(&lb),
            vec!["apple", "banana", "blueberry", "cherry"]
        );

        lb.on_keydown(&items, &key_with(Key::Char('a'), Modifiers::META), 0);
        assert!(selected(&lb).is_empty());
    }

    #[test]
    fn ctrl_a_in_follows_focus_mode_keeps_the_active_item_selected() {
        let items = fruit();
        let mut lb = listbox(|o| {
            o.multi = true;
            o.selection_follows_focus = true;
        });

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        lb.on_keydown(&items, &key_with(Key::Char('a'), Modifiers::CTRL), 0);
        assert_eq!(
            selected(&lb),
            vec!["apple", "banana", "blueberry", "cherry"]
        );

        // Toggling off clears everything except the followed item.
        lb.on_keydown(&items, &key_with(Key::Char('a'), Modifiers::CTRL), 0);
        assert_eq!(selected(&lb), vec!["banana"]);
    }

    #[test]
    fn typeahead_characters_route_through_keydown() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_keydown(&items, &key(Key::Char('b')), 0);
        assert_eq!(lb.active_index(), 1);
        lb.on_keydown(&items, &key(Key::Char('l')), 100);
        assert_eq!(lb.active_index(), 2);

        // Past the window, a fresh query starts.
        lb.on_keydown(&items, &key(Key::Char('c')), 10_000);
        assert_eq!(lb.active_index(), 3);
    }

    #[test]
    fn typeahead_selects_in_follows_focus_mode() {
        let items = fruit();
        let mut lb = listbox(|o| o.selection_follows_focus = true);

        lb.on_keydown(&items, &key(Key::Char('c')), 0);
        assert_eq!(lb.active_index(), 3);
        assert_eq!(selected(&lb), vec!["cherry"]);
    }

    #[test]
    fn space_mid_query_extends_the_search_instead_of_toggling() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_keydown(&items, &key(Key::Char('b')), 0);
        assert_eq!(lb.active_index(), 1);

        // Inside the window, space is query text, not a selection key.
        lb.on_keydown(&items, &key(Key::Char(' ')), 100);
        assert!(selected(&lb).is_empty());
        assert_eq!(lb.typeahead.query(), "b ");

        // Once the window lapses, space toggles again.
        lb.on_keydown(&items, &key(Key::Char(' ')), 10_000);
        assert_eq!(selected(&lb), vec!["banana"]);
    }

    #[test]
    fn pointer_press_moves_and_toggles_in_explicit_mode() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        let handled = lb.on_pointerdown(&items, &click(2)).unwrap();
        assert_eq!(lb.active_index(), 2);
        assert_eq!(selected(&lb), vec!["blueberry"]);
        // Pointer bindings leave the host's default behavior alone.
        assert!(!handled.prevent_default);
        assert!(!handled.stop_propagation);

        // A second press on the same option toggles it back off.
        lb.on_pointerdown(&items, &click(2));
        assert!(selected(&lb).is_empty());
    }

    #[test]
    fn pointer_press_selects_one_in_follows_focus_mode() {
        let items = fruit();
        let mut lb = listbox(|o| o.selection_follows_focus = true);

        lb.on_pointerdown(&items, &click(1));
        lb.on_pointerdown(&items, &click(3));
        assert_eq!(selected(&lb), vec!["cherry"]);
    }

    #[test]
    fn shift_click_selects_the_range_from_the_anchor() {
        let items = fruit();
        let mut lb = listbox(|o| o.multi = true);

        lb.on_pointerdown(&items, &click(0));
        let shift_click = click(2).with_modifiers(Modifiers::SHIFT);
        lb.on_pointerdown(&items, &shift_click);
        assert_eq!(selected(&lb), vec!["apple", "banana", "blueberry"]);
    }

    #[test]
    fn ctrl_click_toggles_in_multi_follows_focus_mode() {
        let items = fruit();
        let mut lb = listbox(|o| {
            o.multi = true;
            o.selection_follows_focus = true;
        });

        lb.on_pointerdown(&items, &click(0));
        let ctrl_click = click(2).with_modifiers(Modifiers::CTRL);
        lb.on_pointerdown(&items, &ctrl_click);
        assert_eq!(selected(&lb), vec!["apple", "blueberry"]);

        lb.on_pointerdown(&items, &ctrl_click);
        assert_eq!(selected(&lb), vec!["apple"]);
    }

    #[test]
    fn pointer_events_without_a_known_target_are_no_ops() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_pointerdown(&items, &PointerEvent::new());
        lb.on_pointerdown(&items, &click(99));
        assert_eq!(lb.active_index(), 0);
        assert!(selected(&lb).is_empty());

        // Non-main buttons match no binding at all.
        let secondary = click(1).with_button(PointerButton::Secondary);
        assert!(lb.on_pointerdown(&items, &secondary).is_none());
    }

    #[test]
    fn unbound_keys_report_none() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        assert!(lb.on_keydown(&items, &key(Key::Escape), 0).is_none());
        assert!(lb.on_keydown(&items, &key(Key::Tab), 0).is_none());
        // Shift+arrow range bindings only exist in multi mode.
        assert!(
            lb.on_keydown(&items, &key_with(Key::ArrowDown, Modifiers::SHIFT), 0)
                .is_none()
        );
    }

    #[test]
    fn option_snapshots_reflect_current_state() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_pointerdown(&items, &click(1));
        let option = lb.option(&items, 1).unwrap();
        assert_eq!(option.index, 1);
        assert_eq!(option.setsize, 4);
        assert!(option.active);
        assert!(option.selected);
        assert!(!option.disabled);
        assert_eq!(option.tabindex, 0);

        let other = lb.option(&items, 0).unwrap();
        assert!(!other.active);
        assert!(!other.selected);
        assert_eq!(other.tabindex, -1);

        assert!(lb.option(&items, 42).is_none());
    }

    #[test]
    fn active_descendant_mode_surfaces_ids_instead_of_focus() {
        let items = fruit();
        let mut lb = listbox(|o| o.focus_mode = FocusMode::ActiveDescendant);

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(lb.tabindex(), 0);
        assert_eq!(lb.active_descendant(&items), Some(1));
        assert_eq!(lb.focus_target(&items), None);
        // Items are never tabbable in this mode.
        assert_eq!(lb.option(&items, 1).unwrap().tabindex, -1);
    }

    #[test]
    fn roving_mode_surfaces_focus_instead_of_ids() {
        let items = fruit();
        let mut lb = listbox(|_| {});

        lb.on_keydown(&items, &key(Key::ArrowDown), 0);
        assert_eq!(lb.tabindex(), -1);
        assert_eq!(lb.active_descendant(&items), None);
        assert_eq!(lb.focus_target(&items), Some(1));
    }

    #[test]
    fn setsize_tracks_the_item_sequence() {
        let items = fruit();
        let lb = listbox(|_| {});
        assert_eq!(lb.setsize(&items), 4);
        assert_eq!(lb.setsize::<u32>(&[]), 0);
    }
}

