//! Conversation state mirrored to renderers

use super::message::MessageLog;

/// Everything a renderer needs to draw the widget.
///
/// The widget is the only writer. Observers receive it through
/// [`ChatWidget::subscribe`](crate::ChatWidget::subscribe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    /// Message history, oldest first
    pub messages: MessageLog,
    /// Whether the chat panel is expanded
    pub is_panel_open: bool,
    /// Thinking flag; advisory only
    pub is_awaiting_reply: bool,
    /// Text currently in the input box
    pub pending_input: String,
    /// Opaque token correlating requests into one conversation
    pub session_token: Option<String>,
    /// Visible height of the input box, in rows
    pub input_rows: u16,
    /// Bumped whenever the view should jump to the latest message
    pub scroll_epoch: u64,
    /// Requests sent but not yet resolved
    pub in_flight: usize,
}

impl ConversationState {
    pub fn new(messages: MessageLog, input_rows: u16) -> Self {
        Self {
            messages,
            is_panel_open: false,
            is_awaiting_reply: false,
            pending_input: String::new(),
            session_token: None,
            input_rows,
            scroll_epoch: 0,
            in_flight: 0,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(MessageLog::new(), 1)
    }
}
