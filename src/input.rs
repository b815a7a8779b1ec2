//! Input handling: terminal key events to runner inputs.

use crate::runner::RunnerInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a runner input.
pub fn map_key(key: KeyEvent) -> RunnerInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return RunnerInput::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => RunnerInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => RunnerInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => RunnerInput::Quit,
        _ => RunnerInput::Other,
    }
}

/// Extract a runner input from a terminal event.
///
/// Only key presses count; repeats, releases, mouse and resize events
/// yield `None`.
pub fn map_event(event: &Event) -> Option<RunnerInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(map_key(*key)),
        _ => None,
    }
}
