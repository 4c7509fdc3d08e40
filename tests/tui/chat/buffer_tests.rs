//! Input buffer tests

use royal_butler_cli::tui::chat::InputBuffer;

#[test]
fn test_insert_char() {
    let mut input = InputBuffer::new();

    input.insert_char('H');
    input.insert_char('i');

    assert_eq!(input.text(), "Hi");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn test_delete_char() {
    let mut input = InputBuffer::new();
    input.insert_str("Hello");

    input.delete_char();

    assert_eq!(input.text(), "Hell");
    assert_eq!(input.cursor(), 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut input = InputBuffer::new();
    input.insert_str("Hello");
    input.move_home();

    input.delete_char();

    assert_eq!(input.text(), "Hello");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_delete_char_forward() {
    let mut input = InputBuffer::new();
    input.insert_str("Hello");
    input.move_home();

    input.delete_char_forward();
    assert_eq!(input.text(), "ello");
    assert_eq!(input.cursor(), 0);

    input.move_end();
    input.delete_char_forward();
    assert_eq!(input.text(), "ello");
}

#[test]
fn test_multibyte_editing() {
    let mut input = InputBuffer::new();
    input.insert_str("紅茶を");
    input.move_left();

    input.insert_char('い');
    assert_eq!(input.text(), "紅茶いを");
    assert_eq!(input.cursor(), 3);

    input.delete_char();
    input.delete_char();
    assert_eq!(input.text(), "紅を");
    assert_eq!(input.cursor(), 1);
}

#[test]
fn test_cursor_movement_bounds() {
    let mut input = InputBuffer::new();
    input.insert_str("ab");

    input.move_right();
    assert_eq!(input.cursor(), 2);

    input.move_left();
    input.move_left();
    input.move_left();
    assert_eq!(input.cursor(), 0);
}

#[test]
fn test_paste_normalizes_carriage_returns() {
    let mut input = InputBuffer::new();

    input.insert_str("one\r\ntwo\rthree");

    assert_eq!(input.text(), "one\ntwo\nthree");
    assert_eq!(input.cursor(), 13);
}

#[test]
fn test_clear() {
    let mut input = InputBuffer::new();
    input.insert_str("tea");

    input.clear();

    assert!(input.is_empty());
    assert_eq!(input.cursor(), 0);
}
