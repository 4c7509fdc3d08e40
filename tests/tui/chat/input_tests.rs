//! Input handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use royal_butler_cli::tui::chat::{ChatView, InputAction, handle_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn typed(view: &mut ChatView, text: &str) {
    for c in text.chars() {
        handle_input(view, true, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_edits_input() {
    let mut view = ChatView::new();

    let action = handle_input(&mut view, true, key(KeyCode::Char('a')));

    assert_eq!(action, InputAction::Edited);
    assert_eq!(view.input.text(), "a");
}

#[test]
fn test_enter_submits() {
    let mut view = ChatView::new();
    typed(&mut view, "hello");

    let action = handle_input(&mut view, true, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Submit);
    assert_eq!(view.input.text(), "hello");
}

#[test]
fn test_shift_enter_inserts_line_break() {
    let mut view = ChatView::new();
    typed(&mut view, "a");

    let action = handle_input(&mut view, true, key_with(KeyCode::Enter, KeyModifiers::SHIFT));

    assert_eq!(action, InputAction::Edited);
    assert_eq!(view.input.text(), "a\n");
}

#[test]
fn test_alt_enter_inserts_line_break() {
    let mut view = ChatView::new();

    let action = handle_input(&mut view, true, key_with(KeyCode::Enter, KeyModifiers::ALT));

    assert_eq!(action, InputAction::Edited);
    assert_eq!(view.input.text(), "\n");
}

#[test]
fn test_shifted_char_is_typed() {
    let mut view = ChatView::new();

    handle_input(&mut view, true, key_with(KeyCode::Char('T'), KeyModifiers::SHIFT));

    assert_eq!(view.input.text(), "T");
}

#[test]
fn test_paste_never_submits() {
    let mut view = ChatView::new();

    let action = handle_input(&mut view, true, Event::Paste("line one\nline two\n".into()));

    assert_eq!(action, InputAction::Edited);
    assert_eq!(view.input.text(), "line one\nline two\n");
}

#[test]
fn test_key_release_is_ignored() {
    let mut view = ChatView::new();
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

    let action = handle_input(&mut view, true, Event::Key(release));

    assert_eq!(action, InputAction::None);
}

#[test]
fn test_escape_clears_then_closes() {
    let mut view = ChatView::new();
    typed(&mut view, "draft");

    assert_eq!(handle_input(&mut view, true, key(KeyCode::Esc)), InputAction::Edited);
    assert!(view.input.is_empty());
    assert_eq!(handle_input(&mut view, true, key(KeyCode::Esc)), InputAction::TogglePanel);
}

#[test]
fn test_global_shortcuts() {
    let mut view = ChatView::new();

    for panel_open in [true, false] {
        assert_eq!(
            handle_input(&mut view, panel_open, key_with(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            InputAction::Exit
        );
        assert_eq!(
            handle_input(&mut view, panel_open, key_with(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            InputAction::TogglePanel
        );
    }
    assert!(view.input.is_empty());
}

#[test]
fn test_launcher_keys() {
    let mut view = ChatView::new();

    assert_eq!(handle_input(&mut view, false, key(KeyCode::Enter)), InputAction::TogglePanel);
    assert_eq!(handle_input(&mut view, false, key(KeyCode::Char('q'))), InputAction::Exit);
    assert_eq!(handle_input(&mut view, false, key(KeyCode::Char('x'))), InputAction::None);
    assert_eq!(
        handle_input(&mut view, false, Event::Paste("ignored".into())),
        InputAction::None
    );
    assert!(view.input.is_empty());
}

#[test]
fn test_scroll_keys() {
    let mut view = ChatView::new();

    assert_eq!(handle_input(&mut view, true, key(KeyCode::Up)), InputAction::ScrollUp(1));
    assert_eq!(handle_input(&mut view, true, key(KeyCode::PageDown)), InputAction::ScrollDown(5));
    assert_eq!(
        handle_input(&mut view, true, key_with(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        InputAction::ScrollTop
    );
    assert_eq!(
        handle_input(&mut view, true, key_with(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        InputAction::ScrollBottom
    );
}
