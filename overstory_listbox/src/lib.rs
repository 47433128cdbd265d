// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Listbox: a headless listbox interaction pattern.
//!
//! [`ListboxPattern`] composes the `overstory_list` behaviors — navigation,
//! selection, typeahead, focus bookkeeping — with `overstory_events`
//! keyboard/pointer routing into one object a host widget can drive:
//!
//! - feed input into [`ListboxPattern::on_keydown`] and
//!   [`ListboxPattern::on_pointerdown`];
//! - project the computed surface ([`ListboxPattern::tabindex`],
//!   [`ListboxPattern::active_descendant`], [`ListboxPattern::focus_target`],
//!   [`ListboxPattern::option`]) onto widgets and their accessibility
//!   attributes.
//!
//! The key and pointer wiring is assembled from the pattern's flags the way
//! listbox widgets conventionally behave:
//!
//! - arrows (orientation- and direction-aware), Home/End, and printable
//!   typeahead always navigate;
//! - read-only lists stop there;
//! - with selection-follows-focus, navigation also selects, and Ctrl/Meta
//!   decouples movement from selection;
//! - with explicit selection, Space/Enter toggle;
//! - multi-select adds Shift-anchored range selection (arrows, Home/End,
//!   Space/Enter, shift-click) and Ctrl/Meta+A select-all toggling.
//!
//! Everything is synchronous and host-timed; the pattern owns no timers, no
//! DOM handles, and no rendering. See the crate-level docs of the two
//! underlying crates for the individual behaviors.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod option;
mod pattern;

pub use option::OptionState;
pub use pattern::{ListboxOptions, ListboxPattern, Orientation, TextDirection};
