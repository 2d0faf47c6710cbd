//! Tui command handler: the interactive terminal calculator

use std::io;

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deskpad::tui::{keypad_area, render, CalculatorApp, InputHandler};
use deskpad::EngineConfig;
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info, warn};

use crate::error::CliResult;

/// Raw mode, alternate screen and mouse capture; undone on drop
#[derive(Debug)]
struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Any failure past this point is undone by Drop
        let session = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }

    /// Restores the terminal once; later calls are no-ops
    fn restore(&mut self) -> io::Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
        raw.and(screen)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

/// The event loop's error wins; a restore error is reported only after a clean run
fn session_outcome(run: CliResult<()>, restored: io::Result<()>) -> CliResult<()> {
    run?;
    restored?;
    Ok(())
}

/// Execute the tui command
///
/// The terminal is restored even when setup or the event loop fails.
pub fn execute_tui(engine: EngineConfig) -> CliResult<()> {
    let mut session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    info!("terminal calculator started");

    let mut app = CalculatorApp::with_config(engine);
    let result = run_app(&mut terminal, &mut app, event::read);
    let restored = session.restore();
    info!(display = %app.display_text(), "terminal calculator stopped");

    session_outcome(result, restored)
}

/// Draws and handles events until the app asks to quit
///
/// Left clicks are hit-tested against where the keypad was last drawn.
pub fn run_app<B, E>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: E,
) -> CliResult<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    let input = InputHandler::new();
    let mut keypad = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            keypad = keypad_area(frame.area());
            render(app, frame);
        })?;

        match next_event()? {
            Event::Key(key) => app.handle_action(input.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if !app.click(keypad, column, row) {
                    debug!(column, row, "click outside keypad buttons");
                }
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use deskpad::Command;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn chars(text: &str) -> Vec<Event> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Runs the loop over `events`; an exhausted queue is an I/O error
    fn run_events(app: &mut CalculatorApp, events: Vec<Event>) -> CliResult<Terminal<TestBackend>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut queue: VecDeque<Event> = events.into();
        run_app(&mut terminal, app, || {
            queue
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        })?;
        Ok(terminal)
    }

    fn center_of(command: Command) -> (u16, u16) {
        let area = keypad_area(Rect::new(0, 0, 80, 24));
        let app = CalculatorApp::new();
        let keypad = app.keypad();
        let (rows, cols) = keypad.dimensions();
        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;
        let btn = keypad
            .find_button(command)
            .and_then(|i| keypad.get_button(i))
            .unwrap();
        (
            area.x + 1 + btn.col as u16 * btn_width + btn_width / 2,
            area.y + 1 + btn.row as u16 * btn_height + btn_height / 2,
        )
    }

    // ===== Terminal session =====

    #[test]
    fn test_inactive_session_restore_is_noop() {
        let mut session = TerminalSession { active: false };
        session.restore().unwrap();
        assert!(!session.active);
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let run = Err(io::Error::other("loop failed").into());
        let restored = Err(io::Error::other("restore failed"));
        let err = session_outcome(run, restored).unwrap_err();
        assert!(err.to_string().contains("loop failed"));
    }

    #[test]
    fn test_restore_error_reported_after_clean_run() {
        let restored = Err(io::Error::other("restore failed"));
        let err = session_outcome(Ok(()), restored).unwrap_err();
        assert!(err.to_string().contains("restore failed"));
        session_outcome(Ok(()), Ok(())).unwrap();
    }

    // ===== Event loop =====

    #[test]
    fn test_keys_then_quit() {
        let mut app = CalculatorApp::new();
        let mut events = chars("12+7*2");
        events.push(key(KeyCode::Enter));
        events.push(key(KeyCode::Char('q')));
        run_events(&mut app, events).unwrap();
        assert!(app.should_quit());
        assert_eq!(app.display_text(), "38");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = CalculatorApp::new();
        let events = vec![Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))];
        run_events(&mut app, events).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_clicks_press_buttons() {
        let mut app = CalculatorApp::new();
        let (x9, y9) = center_of(Command::Digit('9'));
        let (xc, yc) = center_of(Command::Clear);
        let events = vec![
            left_click(x9, y9),
            left_click(x9, y9),
            left_click(0, 0),
            key(KeyCode::Char('q')),
        ];
        run_events(&mut app, events).unwrap();
        assert_eq!(app.display_text(), "99");
        assert_eq!(app.last_command(), Some(Command::Digit('9')));

        let mut app = CalculatorApp::new();
        let mut events = chars("42");
        events.push(left_click(xc, yc));
        events.push(key(KeyCode::Char('q')));
        run_events(&mut app, events).unwrap();
        assert_eq!(app.display_text(), "");
    }

    #[test]
    fn test_event_error_propagates() {
        let mut app = CalculatorApp::new();
        let err = run_events(&mut app, chars("5")).unwrap_err();
        assert!(err.to_string().contains("no more events"));
        assert_eq!(app.display_text(), "5");
    }

    #[test]
    fn test_screen_shows_result() {
        let mut app = CalculatorApp::new();
        let mut events = chars("5/0=");
        events.push(key(KeyCode::Char('q')));
        let terminal = run_events(&mut app, events).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        // The last frame is drawn before the quit key arrives
        assert!(screen.contains("Error"));
    }
}
