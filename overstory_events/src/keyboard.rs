// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard events and the keyboard-specialized event manager.
//!
//! [`KeyboardEventManager`] layers key and modifier matching over the
//! generic [`EventManager`]. Bindings are registered with
//! [`KeyboardEventManager::on`] / [`KeyboardEventManager::on_with`] (which
//! default to requesting `prevent_default` and `stop_propagation`, the right
//! default for keys a widget consumes) or with the fully explicit
//! [`KeyboardEventManager::bind`].
//!
//! ## Minimal example
//!
//! ```
//! use overstory_events::{Key, KeyboardEvent, KeyboardEventManager, Modifiers};
//!
//! let mut manager: KeyboardEventManager<Vec<&'static str>> = KeyboardEventManager::new();
//! manager
//!     .on(Key::ArrowDown, |log, _| log.push("down"))
//!     .on_with(Modifiers::SHIFT, Key::ArrowDown, |log, _| log.push("extend"));
//!
//! let mut log = Vec::new();
//! manager.handle(&mut log, &KeyboardEvent::new(Key::ArrowDown));
//! manager.handle(
//!     &mut log,
//!     &KeyboardEvent::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT),
//! );
//! assert_eq!(log, vec!["down", "extend"]);
//! ```

use crate::manager::{EventEntry, EventManager, Handled};
use crate::modifiers::{ModifierMatch, Modifiers};

/// A key as reported by the host's keyboard event.
///
/// Printable input arrives as [`Key::Char`]; everything else the list
/// patterns consume has a named variant. `Char` comparisons in bindings are
/// ASCII case-insensitive, so a binding on `'a'` also fires for `Shift+a`
/// (which hosts report as `'A'`) when the binding's modifier matcher allows
/// Shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, including space.
    Char(char),
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The left arrow.
    ArrowLeft,
    /// The right arrow.
    ArrowRight,
    /// The Home key.
    Home,
    /// The End key.
    End,
    /// The Enter key.
    Enter,
    /// The Escape key.
    Escape,
    /// The Tab key.
    Tab,
    /// The bare Shift key press itself (not a modified character).
    Shift,
}

/// How a binding matches an event's [`Key`].
#[derive(Copy, Clone, Debug)]
pub enum KeyMatch {
    /// A specific key; `Char` compares ASCII case-insensitively.
    Key(Key),
    /// Any single printable character (any [`Key::Char`], including space).
    AnyChar,
    /// An arbitrary predicate over the key.
    Where(fn(Key) -> bool),
}

impl KeyMatch {
    /// Returns `true` if `key` satisfies this matcher.
    #[must_use]
    pub fn matches(&self, key: Key) -> bool {
        match *self {
            Self::Key(Key::Char(expected)) => match key {
                Key::Char(actual) => expected.eq_ignore_ascii_case(&actual),
                _ => false,
            },
            Self::Key(expected) => expected == key,
            Self::AnyChar => matches!(key, Key::Char(_)),
            Self::Where(predicate) => predicate(key),
        }
    }
}

impl From<Key> for KeyMatch {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<char> for KeyMatch {
    fn from(c: char) -> Self {
        Self::Key(Key::Char(c))
    }
}

/// A keyboard event: the pressed key plus the held modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held while the key was pressed.
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Create an event with no modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A fully explicit keyboard binding.
///
/// [`KeyboardEventManager::on`] and [`KeyboardEventManager::on_with`] cover
/// the common cases; use this when an entry needs non-default
/// `prevent_default` / `stop_propagation` flags.
#[derive(Clone, Debug)]
pub struct KeyBinding {
    /// Modifier matcher; defaults to "no modifiers".
    pub modifiers: ModifierMatch,
    /// Key matcher.
    pub key: KeyMatch,
    /// Whether the entry requests `prevent_default` when it fires.
    pub prevent_default: bool,
    /// Whether the entry requests `stop_propagation` when it fires.
    pub stop_propagation: bool,
}

impl KeyBinding {
    /// A binding on `key` with no modifiers and the keyboard defaults
    /// (`prevent_default` and `stop_propagation` both on).
    pub fn new(key: impl Into<KeyMatch>) -> Self {
        Self {
            modifiers: ModifierMatch::default(),
            key: key.into(),
            prevent_default: true,
            stop_propagation: true,
        }
    }

    /// Replace the modifier matcher.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<ModifierMatch>) -> Self {
        self.modifiers = modifiers.into();
        self
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

    fn matches(&self, event: &KeyboardEvent) -> bool {
        self.modifiers.matches(event.modifiers) && self.key.matches(event.key)
    }
}

/// An [`EventManager`] specialized for [`KeyboardEvent`]s.
///
/// All of [`KeyboardEventManager::on`], [`KeyboardEventManager::on_with`],
/// and [`KeyboardEventManager::bind`] return `&mut Self` so registrations
/// chain.
pub struct KeyboardEventManager<Cx> {
    inner: EventManager<KeyboardEvent, Cx>,
}

impl<Cx> KeyboardEventManager<Cx> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EventManager::new(),
        }
    }

    /// Register a handler for `key` with no modifiers held.
    pub fn on(
        &mut self,
        key: impl Into<KeyMatch>,
        handler: impl FnMut(&mut Cx, &KeyboardEvent) + 'static,
    ) -> &mut Self {
        self.bind(KeyBinding::new(key), handler)
    }

    /// Register a handler for `key` with the given modifier matcher.
    pub fn on_with(
        &mut self,
        modifiers: impl Into<ModifierMatch>,
        key: impl Into<KeyMatch>,
        handler: impl FnMut(&mut Cx, &KeyboardEvent) + 'static,
    ) -> &mut Self {
        self.bind(KeyBinding::new(key).with_modifiers(modifiers), handler)
    }

    /// Register a handler for a fully explicit binding.
    pub fn bind(
        &mut self,
        binding: KeyBinding,
        handler: impl FnMut(&mut Cx, &KeyboardEvent) + 'static,
    ) -> &mut Self {
        let prevent_default = binding.prevent_default;
        let stop_propagation = binding.stop_propagation;
        self.inner.add(
            EventEntry::new(move |event: &KeyboardEvent| binding.matches(event), handler)
                .with_prevent_default(prevent_default)
                .with_stop_propagation(stop_propagation),
        );
        self
    }

    /// Dispatch one event to every matching binding, in registration order.
    pub fn handle(&mut self, cx: &mut Cx, event: &KeyboardEvent) -> Option<Handled> {
        self.inner.handle(cx, event)
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<Cx> Default for KeyboardEventManager<Cx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Cx> core::fmt::Debug for KeyboardEventManager<Cx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardEventManager")
            .field("bindings", &self.inner.len())
            .finish_non_exhaustive()
    }
}
