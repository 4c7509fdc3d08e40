//! Widget behaviour: the exchange loop and the helpers renderers need

mod keys;
mod payload;
mod scroll;
mod sizing;
mod widget;

pub use keys::{Key, KeyIntent, KeyPress, classify_key};
pub use payload::resolve_answer;
pub use scroll::ScrollScheduler;
pub use sizing::{InputSizer, display_width, wrap_line};
pub use widget::{ChatWidget, Exchange, SubmitOutcome, Submission, WidgetSettings};
