//! Domain types shared by the widget and its renderers

mod message;
mod state;

pub use message::{Direction, Message, MessageId, MessageLog, append_message};
pub use state::ConversationState;
