//! Property-based tests for the keypad and key mapping

#![cfg(feature = "tui")]
#![allow(clippy::unwrap_used)]

use deskpad::tui::{keypad_area, CalculatorApp, Keypad};
use deskpad::{ButtonData, Command, Operation};
use proptest::prelude::*;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = char> {
    (0u32..=9).prop_map(|d| char::from_digit(d, 10).unwrap())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

fn keypad_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..40, 0u16..20, 10u16..60, 7u16..40).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ===== Key and button mapping =====

proptest! {
    /// Every digit key enters that digit
    #[test]
    fn prop_digit_keys_map_to_digits(d in digit_strategy()) {
        prop_assert_eq!(Command::from_key_char(d), Some(Command::Digit(d)));
        prop_assert_eq!(Command::from_button(&ButtonData::num(d.to_string())), Some(Command::Digit(d)));
    }

    /// Operator symbols and data-op names agree
    #[test]
    fn prop_operator_keys_and_buttons_agree(op in operation_strategy()) {
        let from_key = Command::from_key_char(op.symbol());
        let from_button = Command::from_button(&ButtonData::op(op.name()));
        prop_assert_eq!(from_key, Some(Command::SetOperation(op)));
        prop_assert_eq!(from_key, from_button);
    }

    /// `num` wins over any other attribute
    #[test]
    fn prop_num_attribute_has_priority(d in digit_strategy(), op in operation_strategy(), action in "[a-z]{0,10}") {
        let data = ButtonData {
            num: Some(d.to_string()),
            op: Some(op.name().to_string()),
            action: Some(action),
        };
        prop_assert_eq!(Command::from_button(&data), Some(Command::Digit(d)));
    }

    /// Letters other than the bound ones never map to a command
    #[test]
    fn prop_unbound_letters_map_to_none(c in "[abd-wyzA-BD-WYZ]") {
        let c = c.chars().next().unwrap();
        prop_assert_eq!(Command::from_key_char(c), None);
    }

    /// Scripts of bound keys always parse, one command per key
    #[test]
    fn prop_bound_scripts_parse(script in "[0-9.+*/=c<-]{0,30}") {
        let commands = Command::parse_sequence(&script).unwrap();
        prop_assert_eq!(commands.len(), script.chars().count());
    }
}

// ===== Keypad grid =====

proptest! {
    /// Buttons found by position report that position
    #[test]
    fn prop_button_position_consistency((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        if let Some(btn) = keypad.get_button_at(row, col) {
            prop_assert_eq!((btn.row, btn.col), (row, col));
            prop_assert_eq!(keypad.find_button(btn.command).and_then(|i| keypad.get_button(i)), Some(btn));
        }
    }

    /// Cells outside the grid are empty
    #[test]
    fn prop_out_of_grid_is_empty(row in 5usize..100, col in 4usize..100) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, 0).is_none());
        prop_assert!(keypad.get_button_at(0, col).is_none());
    }

    /// Highlighting always leaves at most one button pressed
    #[test]
    fn prop_highlight_is_exclusive(commands in prop::collection::vec(
        prop_oneof![
            digit_strategy().prop_map(Command::Digit),
            operation_strategy().prop_map(Command::SetOperation),
            Just(Command::Equals),
            Just(Command::Clear),
        ],
        1..20,
    )) {
        let mut keypad = Keypad::new();
        for &command in &commands {
            keypad.highlight(command);
        }
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        prop_assert_eq!(pressed.len(), 1);
        prop_assert_eq!(pressed[0].command, commands[commands.len() - 1]);
    }

    /// Hit testing never reports a button for a point outside the area
    #[test]
    fn prop_hit_test_outside_is_none(area in keypad_rect_strategy(), dx in 1u16..50) {
        let keypad = Keypad::new();
        prop_assert_eq!(keypad.hit_test(area, area.x + area.width - 1 + dx, area.y + 1), None);
        prop_assert_eq!(keypad.hit_test(area, area.x + 1, area.y + area.height - 1 + dx), None);
    }

    /// Clicking the center of a drawn button presses that button
    #[test]
    fn prop_click_center_hits_button((row, col) in grid_position_strategy()) {
        let area = keypad_area(Rect::new(0, 0, 80, 24));
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;
        let x = area.x + 1 + col as u16 * btn_width + btn_width / 2;
        let y = area.y + 1 + row as u16 * btn_height + btn_height / 2;

        let expected = keypad.get_button_at(row, col).map(|b| b.command);
        let mut app = CalculatorApp::new();
        prop_assert_eq!(app.click(area, x, y), expected.is_some());
        prop_assert_eq!(app.last_command(), expected);
    }
}

// ===== Invariants =====

#[test]
fn invariant_keypad_has_18_buttons_in_5_by_4() {
    let keypad = Keypad::new();
    assert_eq!(keypad.button_count(), 18);
    assert_eq!(keypad.dimensions(), (5, 4));
}

#[test]
fn invariant_buttons_have_unique_positions_and_commands() {
    let keypad = Keypad::new();
    let mut positions = std::collections::HashSet::new();
    let mut commands = std::collections::HashSet::new();
    for btn in keypad.buttons() {
        assert!(positions.insert((btn.row, btn.col)), "duplicate {:?}", (btn.row, btn.col));
        assert!(commands.insert(btn.command), "duplicate {:?}", btn.command);
    }
}
