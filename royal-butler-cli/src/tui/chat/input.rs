//! Chat input handling

use super::view::ChatView;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use royal_butler_core::{Key, KeyIntent, KeyPress, classify_key};

const PAGE: u16 = 5;

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// The input text changed
    Edited,
    /// Submit the current input
    Submit,
    /// Open or close the panel
    TogglePanel,
    /// Exit the chat
    Exit,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event and update the view
pub fn handle_input(view: &mut ChatView, panel_open: bool, event: Event) -> InputAction {
    match event {
        Event::Key(key) if panel_open => handle_key(view, key),
        Event::Key(key) => handle_launcher_key(key),
        // Pasted text goes in verbatim; its newlines never submit.
        Event::Paste(text) if panel_open => {
            view.input.insert_str(&text);
            InputAction::Edited
        }
        _ => InputAction::None,
    }
}

fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

fn handle_global(key: &KeyEvent) -> Option<InputAction> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') => Some(InputAction::Exit),
        KeyCode::Char('o') => Some(InputAction::TogglePanel),
        _ => None,
    }
}

/// Keys while only the launcher badge is visible
fn handle_launcher_key(key: KeyEvent) -> InputAction {
    if !is_press(&key) {
        return InputAction::None;
    }
    if let Some(action) = handle_global(&key) {
        return action;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::TogglePanel,
        KeyCode::Char('q') => InputAction::Exit,
        _ => InputAction::None,
    }
}

fn handle_key(view: &mut ChatView, key: KeyEvent) -> InputAction {
    if !is_press(&key) {
        return InputAction::None;
    }
    if let Some(action) = handle_global(&key) {
        return action;
    }

    // Many terminals only report Alt+Enter, so Alt counts as the line-break modifier.
    let press = KeyPress {
        key: match key.code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        },
        shift: key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT),
        composing: false,
    };

    match classify_key(press) {
        KeyIntent::Submit => InputAction::Submit,
        KeyIntent::InsertLineBreak => {
            view.input.insert_char('\n');
            InputAction::Edited
        }
        KeyIntent::Ignore => InputAction::None,
        KeyIntent::Edit => edit(view, key),
    }
}

fn edit(view: &mut ChatView, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            if view.input.is_empty() {
                InputAction::TogglePanel
            } else {
                view.input.clear();
                InputAction::Edited
            }
        }
        KeyCode::Backspace => {
            view.input.delete_char();
            InputAction::Edited
        }
        KeyCode::Delete => {
            view.input.delete_char_forward();
            InputAction::Edited
        }
        KeyCode::Left => {
            view.input.move_left();
            InputAction::None
        }
        KeyCode::Right => {
            view.input.move_right();
            InputAction::None
        }
        KeyCode::Home => {
            view.input.move_home();
            InputAction::None
        }
        KeyCode::End => {
            view.input.move_end();
            InputAction::None
        }
        KeyCode::Up => InputAction::ScrollUp(1),
        KeyCode::Down => InputAction::ScrollDown(1),
        KeyCode::PageUp => InputAction::ScrollUp(PAGE),
        KeyCode::PageDown => InputAction::ScrollDown(PAGE),
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Char(_) if ctrl => InputAction::None,
        KeyCode::Char(c) => {
            view.input.insert_char(c);
            InputAction::Edited
        }
        KeyCode::Tab => {
            view.input.insert_char(' ');
            view.input.insert_char(' ');
            InputAction::Edited
        }
        _ => InputAction::None,
    }
}
