//! Scroll tests

use royal_butler_cli::tui::chat::{ChatView, PINNED};

fn view_with_max(max_scroll: u16) -> ChatView {
    let mut view = ChatView::new();
    view.max_scroll = max_scroll;
    view
}

#[test]
fn test_new_view_is_pinned() {
    let view = view_with_max(12);

    assert_eq!(view.scroll_offset, PINNED);
    assert_eq!(view.effective_scroll(), 12);
}

#[test]
fn test_scroll_up_from_pinned() {
    let mut view = view_with_max(12);

    view.scroll_up(1);
    assert_eq!(view.scroll_offset, 11);
}

#[test]
fn test_scroll_up_at_zero() {
    let mut view = view_with_max(12);
    view.scroll_offset = 0;

    view.scroll_up(5);
    assert_eq!(view.scroll_offset, 0);
}

#[test]
fn test_scroll_down_repins_at_end() {
    let mut view = view_with_max(12);
    view.scroll_offset = 5;

    view.scroll_down(3);
    assert_eq!(view.scroll_offset, 8);

    view.scroll_down(100);
    assert_eq!(view.scroll_offset, PINNED);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let mut view = view_with_max(12);

    view.scroll_to_top();
    assert_eq!(view.effective_scroll(), 0);

    view.scroll_to_bottom();
    assert_eq!(view.scroll_offset, PINNED);
}

#[test]
fn test_new_epoch_pins_to_latest() {
    let mut view = view_with_max(12);
    view.scroll_to_top();

    assert!(!view.sync_scroll_epoch(0));
    assert_eq!(view.scroll_offset, 0);

    assert!(view.sync_scroll_epoch(3));
    assert_eq!(view.scroll_offset, PINNED);
    assert_eq!(view.seen_scroll_epoch, 3);
}

#[test]
fn test_tick_loading_wraps() {
    let mut view = ChatView::new();

    for _ in 0..4 {
        view.tick_loading();
    }
    assert_eq!(view.loading_frame, 0);
}
