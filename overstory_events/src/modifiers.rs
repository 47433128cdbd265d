// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier-key flags and matching.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Modifier keys held during a keyboard or pointer event.
    ///
    /// The empty set means "no modifiers held". Hosts build this from their
    /// native event's `ctrlKey`/`shiftKey`/`altKey`/`metaKey` equivalents.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The Control key.
        const CTRL = 1;
        /// The Shift key.
        const SHIFT = 1 << 1;
        /// The Alt (Option) key.
        const ALT = 1 << 2;
        /// The Meta (Command / Windows) key.
        const META = 1 << 3;
    }
}

/// How a binding matches an event's modifier set.
///
/// Bindings usually want an exact modifier combination; platform-portable
/// bindings (Ctrl on one OS, Meta on another) list alternatives; and a few
/// bindings — such as anchoring a selection range on the bare Shift press —
/// do not care about modifiers at all.
///
/// `From` conversions keep call sites terse:
///
/// ```
/// use overstory_events::{ModifierMatch, Modifiers};
///
/// // A single exact combination.
/// let exact = ModifierMatch::from(Modifiers::SHIFT);
/// assert!(exact.matches(Modifiers::SHIFT));
/// assert!(!exact.matches(Modifiers::SHIFT | Modifiers::CTRL));
///
/// // Either of two combinations.
/// let either = ModifierMatch::from([Modifiers::CTRL, Modifiers::META]);
/// assert!(either.matches(Modifiers::META));
/// assert!(!either.matches(Modifiers::empty()));
///
/// // Ignore modifiers entirely.
/// assert!(ModifierMatch::Any.matches(Modifiers::CTRL | Modifiers::ALT));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModifierMatch {
    /// The event's modifier set must equal this combination exactly.
    Exact(Modifiers),
    /// The event's modifier set must equal one of these combinations.
    OneOf(SmallVec<[Modifiers; 4]>),
    /// Any modifier set matches.
    Any,
}

impl ModifierMatch {
    /// Returns `true` if `modifiers` satisfies this matcher.
    #[must_use]
    pub fn matches(&self, modifiers: Modifiers) -> bool {
        match self {
            Self::Exact(expected) => *expected == modifiers,
            Self::OneOf(alternatives) => alternatives.iter().any(|m| *m == modifiers),
            Self::Any => true,
        }
    }
}

impl Default for ModifierMatch {
    fn default() -> Self {
        Self::Exact(Modifiers::empty())
    }
}

impl From<Modifiers> for ModifierMatch {
    fn from(modifiers: Modifiers) -> Self {
        Self::Exact(modifiers)
    }
}

impl<const N: usize> From<[Modifiers; N]> for ModifierMatch {
    fn from(alternatives: [Modifiers; N]) -> Self {
        Self::OneOf(SmallVec::from_slice(&alternatives))
    }
}

impl From<&[Modifiers]> for ModifierMatch {
    fn from(alternatives: &[Modifiers]) -> Self {
        Self::OneOf(SmallVec::from_slice(alternatives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_requires_equality_not_subset() {
        let m = ModifierMatch::from(Modifiers::CTRL);
        assert!(m.matches(Modifiers::CTRL));
        assert!(!m.matches(Modifiers::empty()));
        assert!(!m.matches(Modifiers::CTRL | Modifiers::SHIFT));
    }

    #[test]
    fn empty_set_matches_only_no_modifiers() {
        let m = ModifierMatch::default();
        assert!(m.matches(Modifiers::empty()));
        assert!(!m.matches(Modifiers::SHIFT));
    }

    #[test]
    fn one_of_accepts_any_listed_combination() {
        let m = ModifierMatch::from([
            Modifiers::CTRL | Modifiers::SHIFT,
            Modifiers::META | Modifiers::SHIFT,
        ]);
        assert!(m.matches(Modifiers::CTRL | Modifiers::SHIFT));
        assert!(m.matches(Modifiers::META | Modifiers::SHIFT));
        assert!(!m.matches(Modifiers::SHIFT));
    }

    #[test]
    fn any_ignores_modifiers() {
        assert!(ModifierMatch::Any.matches(Modifiers::empty()));
        assert!(ModifierMatch::Any.matches(Modifiers::all()));
    }
}
