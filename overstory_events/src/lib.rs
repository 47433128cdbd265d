// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Events: ordered, `no_std` event dispatch for UI interaction
//! patterns.
//!
//! This crate routes keyboard and pointer input to handlers by matching on
//! key, button, and modifier state. It knows nothing about widgets, focus,
//! or rendering; composite interaction patterns (see `overstory_listbox`)
//! assemble managers from their configuration and feed events through them.
//!
//! The core pieces:
//!
//! - [`EventManager`]: an ordered list of (matcher, handler, flags) entries.
//!   [`EventManager::handle`] fires **every** matching entry in registration
//!   order — overlapping bindings are a feature, not a conflict.
//! - [`KeyboardEventManager`]: key + modifier matching with builder-chained
//!   registration. Bindings default to requesting `prevent_default` and
//!   `stop_propagation`, since a key a widget consumes should not also
//!   scroll the page.
//! - [`PointerEventManager`]: button + modifier matching; defaults leave
//!   both flags off.
//! - [`Modifiers`] / [`ModifierMatch`]: bit-flag modifier sets and exact /
//!   one-of / any matching over them.
//! - [`Key`] / [`KeyMatch`]: DOM-ish key values, with case-insensitive
//!   character matching, an any-printable-character matcher for typeahead,
//!   and predicate matchers.
//!
//! Handlers receive an exclusive borrow of a caller-chosen context type, so
//! all pattern state mutated by a binding threads through one `&mut`
//! argument; the managers own no widget state.
//!
//! Events are plain data and dispatch returns a [`Handled`] flag union; the
//! host applies it to its real event object (or ignores it).
//!
//! ## Minimal example
//!
//! A two-binding keyboard manager over a counter context:
//!
//! ```rust
//! use overstory_events::{Key, KeyboardEvent, KeyboardEventManager, Modifiers};
//!
//! let mut manager: KeyboardEventManager<i32> = KeyboardEventManager::new();
//! manager
//!     .on(Key::ArrowDown, |count, _| *count += 1)
//!     .on(Key::ArrowUp, |count, _| *count -= 1);
//!
//! let mut count = 0;
//! let handled = manager.handle(&mut count, &KeyboardEvent::new(Key::ArrowDown));
//! assert_eq!(count, 1);
//! // Keyboard bindings ask the host to suppress the default action.
//! assert!(handled.unwrap().prevent_default);
//!
//! // A modified key does not fire an unmodified binding.
//! let shifted = KeyboardEvent::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT);
//! assert!(manager.handle(&mut count, &shifted).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod keyboard;
mod manager;
mod modifiers;
mod pointer;

pub use keyboard::{Key, KeyBinding, KeyMatch, KeyboardEvent, KeyboardEventManager};
pub use manager::{EventEntry, EventManager, Handled};
pub use modifiers::{ModifierMatch, Modifiers};
pub use pointer::{PointerBinding, PointerButton, PointerEvent, PointerEventManager};
