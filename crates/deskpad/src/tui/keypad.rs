//! On-screen keypad for the terminal calculator
//!
//! The keypad can be clicked with the mouse and lights up the button that
//! matches the last command, whichever way it was entered.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::command::Command;
use crate::core::Operation;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Command the button sends
    pub command: Command,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Highlighted as the last press
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub fn new(label: &'static str, command: Command, row: usize, col: usize) -> Self {
        Self {
            label,
            command,
            row,
            col,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.command {
            Command::Digit(_) => Style::default().fg(Color::White),
            Command::SetOperation(_) => Style::default().fg(Color::Yellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear => Style::default().fg(Color::Red),
            Command::DecimalPoint | Command::Backspace => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad layout, five rows of up to four buttons
/// ```text
/// [7] [8] [9] [÷]
/// [4] [5] [6] [×]
/// [1] [2] [3] [−]
/// [0] [.] [=] [+]
/// [C] [⌫]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Command::{Backspace, Clear, DecimalPoint, Digit, Equals, SetOperation};

        let layout: [&[(&'static str, Command)]; 5] = [
            &[
                ("7", Digit('7')),
                ("8", Digit('8')),
                ("9", Digit('9')),
                ("÷", SetOperation(Operation::Divide)),
            ],
            &[
                ("4", Digit('4')),
                ("5", Digit('5')),
                ("6", Digit('6')),
                ("×", SetOperation(Operation::Multiply)),
            ],
            &[
                ("1", Digit('1')),
                ("2", Digit('2')),
                ("3", Digit('3')),
                ("−", SetOperation(Operation::Subtract)),
            ],
            &[
                ("0", Digit('0')),
                (".", DecimalPoint),
                ("=", Equals),
                ("+", SetOperation(Operation::Add)),
            ],
            &[("C", Clear), ("⌫", Backspace)],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, &(label, command))| KeypadButton::new(label, command, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button at a grid cell; empty cells have none
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.col == col)
    }

    /// Button at a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Index of the button that sends `command`
    #[must_use]
    pub fn find_button(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Marks a button as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Lights up only the button for `command`
    pub fn highlight(&mut self, command: Command) {
        self.release_all();
        if let Some(idx) = self.find_button(command) {
            self.press_button(idx);
        }
    }

    /// All buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` (border included) to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell wide on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.index_at(row, col)
    }

    /// Command under a click position, if any
    #[must_use]
    pub fn command_at(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        self.hit_test(area, x, y)
            .and_then(|i| self.buttons.get(i))
            .map(|b| b.command)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;
        if btn_width < 3 {
            return;
        }

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
            }
        }
    }
}
