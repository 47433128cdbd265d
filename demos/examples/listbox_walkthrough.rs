// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a multi-select listbox through a scripted input sequence and print
//! the projected state after each event.
//!
//! Run with: `cargo run -p overstory_demos --example listbox_walkthrough`

use overstory_events::{Key, KeyboardEvent, Modifiers, PointerEvent};
use overstory_list::ListItem;
use overstory_listbox::{ListboxOptions, ListboxPattern};

fn main() {
    let items = vec![
        ListItem::new(0_u32, "apple").with_search_term("Apple"),
        ListItem::new(1_u32, "banana").with_search_term("Banana"),
        ListItem::new(2_u32, "blueberry")
            .with_search_term("Blueberry")
            .with_disabled(true),
        ListItem::new(3_u32, "cherry").with_search_term("Cherry"),
        ListItem::new(4_u32, "date").with_search_term("Date"),
    ];

    let mut listbox: ListboxPattern<&str> = ListboxPattern::new(ListboxOptions {
        multi: true,
        ..ListboxOptions::default()
    });

    let script: Vec<(&str, Step)> = vec![
        ("ArrowDown (move the cursor)", Step::Key(KeyboardEvent::new(Key::ArrowDown))),
        ("Space (toggle the active item)", Step::Key(KeyboardEvent::new(Key::Char(' ')))),
        (
            "Shift+ArrowDown (extend the range past the disabled item)",
            Step::Key(KeyboardEvent::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT)),
        ),
        (
            "Shift+ArrowDown (extend further)",
            Step::Key(KeyboardEvent::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT)),
        ),
        (
            "Shift+ArrowUp (shrink the range back)",
            Step::Key(KeyboardEvent::new(Key::ArrowUp).with_modifiers(Modifiers::SHIFT)),
        ),
        ("Typeahead 'd'", Step::Key(KeyboardEvent::new(Key::Char('d')))),
        ("Pointer press on Apple", Step::Pointer(PointerEvent::new().with_target(0))),
        (
            "Ctrl+A (select everything selectable)",
            Step::Key(KeyboardEvent::new(Key::Char('a')).with_modifiers(Modifiers::CTRL)),
        ),
    ];

    let mut now_ms = 0_u64;
    render("initial state", &listbox, &items);
    for (label, step) in script {
        // Space the scripted keystrokes out past the typeahead window so
        // each printable character starts a fresh query.
        now_ms += 1_000;
        match step {
            Step::Key(event) => {
                listbox.on_keydown(&items, &event, now_ms);
            }
            Step::Pointer(event) => {
                listbox.on_pointerdown(&items, &event);
            }
        }
        render(label, &listbox, &items);
    }
}

enum Step {
    Key(KeyboardEvent),
    Pointer(PointerEvent<u32>),
}

fn render(label: &str, listbox: &ListboxPattern<&str>, items: &[ListItem<u32, &str>]) {
    println!("== {label}");
    for item in items {
        let option = listbox
            .option(items, item.id)
            .expect("every item resolves to an option");
        let cursor = if option.active { '>' } else { ' ' };
        let mark = if option.selected { 'x' } else { ' ' };
        let note = if option.disabled { "  (disabled)" } else { "" };
        println!("  {cursor} [{mark}] {}{note}", item.search_term);
    }
    match listbox.focus_target(items) {
        Some(id) => println!("  focus -> item id {id}"),
        None => println!("  focus -> container"),
    }
    println!();
}
