//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::ui::ChatUI;
use super::view::ChatView;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use royal_butler_core::{AnswerService, ChatWidget, Submission};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info};

/// Result of chat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResult {
    Exit,
}

/// Run the TUI chat interface
pub async fn run_chat<S>(
    widget: ChatWidget<S>,
    title: &str,
    icon: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    S: AnswerService + 'static,
{
    let mut terminal = init_terminal()?;
    let mut view = ChatView::new();
    widget.toggle_panel();

    let result = run_chat_loop(&mut terminal, &mut view, &widget, title, icon).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<S>(
    terminal: &mut Tui,
    view: &mut ChatView,
    widget: &ChatWidget<S>,
    title: &str,
    icon: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    S: AnswerService + 'static,
{
    let mut updates = widget.subscribe();
    let mut dirty = true;

    loop {
        // Replies land from spawned tasks; redraw whenever the widget changed.
        if updates.has_changed().unwrap_or(false) {
            updates.mark_unchanged();
            dirty = true;
        }
        if dirty {
            widget.with_state(|state| view.sync_scroll_epoch(state.scroll_epoch));
            terminal.draw(|frame| {
                widget.with_state(|state| ChatUI::render(frame, view, state, title, icon));
            })?;
            dirty = false;
        }

        let (awaiting, panel_open) =
            widget.with_state(|state| (state.is_awaiting_reply, state.is_panel_open));
        let timeout = if awaiting {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            if awaiting {
                view.tick_loading();
                dirty = true;
            }
            continue;
        }

        dirty = true;
        let action = handle_input(view, panel_open, event::read()?);
        match action {
            InputAction::Exit => return Ok(ChatResult::Exit),

            InputAction::Edited => {
                view.status_message = None;
                let width = ChatUI::input_text_width(terminal.size()?.width);
                widget.set_input(view.input.text(), width);
            }

            InputAction::Submit => match widget.start_submission(view.input.text()) {
                Submission::Sent(exchange) => {
                    view.input.clear();
                    view.status_message = None;
                    tokio::spawn(async move {
                        let outcome = exchange.resolve().await;
                        debug!(?outcome, "Exchange finished");
                    });
                }
                Submission::Busy => {
                    view.status_message = Some("Still waiting for a reply".into());
                }
                Submission::Empty => {}
            },

            InputAction::TogglePanel => {
                let open = widget.toggle_panel();
                info!(open, "Chat panel toggled");
            }

            InputAction::ScrollUp(lines) => view.scroll_up(lines),
            InputAction::ScrollDown(lines) => view.scroll_down(lines),
            InputAction::ScrollTop => view.scroll_to_top(),
            InputAction::ScrollBottom => view.scroll_to_bottom(),

            InputAction::None => {}
        }
    }
}
