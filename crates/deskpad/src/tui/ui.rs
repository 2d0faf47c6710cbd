//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Where the keypad lands when the whole UI is drawn into `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // Display and status
            Constraint::Length(22), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(3), // Pending expression
                Constraint::Min(3),    // Last key
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let text = self.app.display_text();

        let span = if calc.is_error() {
            Span::styled(text, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else if text.is_empty() {
            Span::styled("0", Style::default().fg(Color::DarkGray))
        } else if calc.is_start_fresh() {
            Span::styled(text, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(text, Style::default().fg(Color::White))
        };

        Paragraph::new(Line::from(span))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.expression_hint(),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(area, buf);
    }

    fn render_last_key(&self, area: Rect, buf: &mut Buffer) {
        let text = self
            .app
            .last_command()
            .map_or_else(|| "-".to_string(), |c| c.label());

        Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray)))
            .block(
                Block::default()
                    .title(" Last key ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_layout(area);
        if h_chunks.len() < 3 {
            return;
        }

        let chunks = Self::create_layout(h_chunks[0]);
        if chunks.len() >= 3 {
            self.render_display(chunks[0], buf);
            self.render_pending(chunks[1], buf);
            self.render_last_key(chunks[2], buf);
        }

        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        Self::render_help(h_chunks[2], buf);
    }
}

/// Window title
pub const TITLE: &str = " deskpad calculator ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (". ,", "Decimal"),
    ("+ - * /", "Operators"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Backspace"),
    ("Esc c", "Clear"),
    ("Click", "Keypad"),
    ("q", "Quit"),
];
