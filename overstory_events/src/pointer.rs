// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and the pointer-specialized event manager.
//!
//! [`PointerEventManager`] matches on button and modifiers. Unlike the
//! keyboard manager, pointer bindings default to leaving
//! `prevent_default` / `stop_propagation` off: widgets typically want the
//! host's default pointer behavior (focus, text selection suppression rules)
//! to proceed unless a binding says otherwise.
//!
//! Pointer events carry an optional `target`: the id of the item under the
//! pointer, resolved by the host's hit testing. The managers never inspect
//! it; it exists for handlers that navigate to the pressed item.

use crate::manager::{EventEntry, EventManager, Handled};
use crate::modifiers::{ModifierMatch, Modifiers};

/// A pointer-device button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left; index 0).
    #[default]
    Main,
    /// The auxiliary button (usually middle/wheel; index 1).
    Auxiliary,
    /// The secondary button (usually right; index 2).
    Secondary,
}

impl PointerButton {
    /// Map a host button index to a button, declining unknown indices.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Main),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// The host button index for this button.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Auxiliary => 1,
            Self::Secondary => 2,
        }
    }
}

/// A pointer event: button, modifiers, and the id of the item under the
/// pointer (if the host resolved one).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent<K> {
    /// The pressed button.
    pub button: PointerButton,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
    /// Id of the item under the pointer, as resolved by the host.
    pub target: Option<K>,
}

impl<K> PointerEvent<K> {
    /// A main-button press with no modifiers and no target.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            button: PointerButton::Main,
            modifiers: Modifiers::empty(),
            target: None,
        }
    }

    /// Replace the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Replace the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attach the id of the item under the pointer.
    #[must_use]
    pub fn with_target(mut self, target: K) -> Self {
        self.target = Some(target);
        self
    }
}

impl<K> Default for PointerEvent<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully explicit pointer binding.
#[derive(Clone, Debug)]
pub struct PointerBinding {
    /// The button this binding fires for.
    pub button: PointerButton,
    /// Modifier matcher; defaults to "no modifiers".
    pub modifiers: ModifierMatch,
    /// Whether the entry requests `prevent_default` when it fires.
    pub prevent_default: bool,
    /// Whether the entry requests `stop_propagation` when it fires.
    pub stop_propagation: bool,
}

impl PointerBinding {
    /// A main-button binding with no modifiers and both flags off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            button: PointerButton::Main,
            modifiers: ModifierMatch::default(),
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// Replace the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
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

    fn matches<K>(&self, event: &PointerEvent<K>) -> bool {
        self.button == event.button && self.modifiers.matches(event.modifiers)
    }
}

impl Default for PointerBinding {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`EventManager`] specialized for [`PointerEvent`]s over item ids `K`.
///
/// ## Minimal example
///
/// ```
/// use overstory_events::{Modifiers, PointerButton, PointerEvent, PointerEventManager};
///
/// let mut manager: PointerEventManager<u32, Vec<&'static str>> = PointerEventManager::new();
/// manager
///     .on(|log, _| log.push("press"))
///     .on_with(PointerButton::Main, Modifiers::SHIFT, |log, _| log.push("extend"));
///
/// let mut log = Vec::new();
/// manager.handle(&mut log, &PointerEvent::new().with_target(3_u32));
/// manager.handle(
///     &mut log,
///     &PointerEvent::new().with_target(3_u32).with_modifiers(Modifiers::SHIFT),
/// );
/// // Secondary-button presses match nothing here.
/// let secondary = PointerEvent::<u32>::new().with_button(PointerButton::Secondary);
/// assert!(manager.handle(&mut log, &secondary).is_none());
/// assert_eq!(log, vec!["press", "extend"]);
/// ```
pub struct PointerEventManager<K, Cx> {
    inner: EventManager<PointerEvent<K>, Cx>,
}

impl<K: 'static, Cx> PointerEventManager<K, Cx> {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EventManager::new(),
        }
    }

    /// Register a handler for a main-button press with no modifiers.
    pub fn on(&mut self, handler: impl FnMut(&mut Cx, &PointerEvent<K>) + 'static) -> &mut Self {
        self.bind(PointerBinding::new(), handler)
    }

    /// Register a handler for the given button and modifier matcher.
    pub fn on_with(
        &mut self,
        button: PointerButton,
        modifiers: impl Into<ModifierMatch>,
        handler: impl FnMut(&mut Cx, &PointerEvent<K>) + 'static,
    ) -> &mut Self {
        self.bind(
            PointerBinding::new()
                .with_button(button)
                .with_modifiers(modifiers),
            handler,
        )
    }

    /// Register a handler for a fully explicit binding.
    pub fn bind(
        &mut self,
        binding: PointerBinding,
        handler: impl FnMut(&mut Cx, &PointerEvent<K>) + 'static,
    ) -> &mut Self {
        let prevent_default = binding.prevent_default;
        let stop_propagation = binding.stop_propagation;
        self.inner.add(
            EventEntry::new(
                move |event: &PointerEvent<K>| binding.matches(event),
                handler,
            )
            .with_prevent_default(prevent_default)
            .with_stop_propagation(stop_propagation),
        );
        self
    }

    /// Dispatch one event to every matching binding, in registration order.
    pub fn handle(&mut self, cx: &mut Cx, event: &PointerEvent<K>) -> Option<Handled> {
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

impl<K: 'static, Cx> Default for PointerEventManager<K, Cx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Cx> core::fmt::Debug for PointerEventManager<K, Cx> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerEventManager")
            .field("bindings", &self.inner.len())
            .finish_non_exhaustive()
    }
}
