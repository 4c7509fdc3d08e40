//! Chat panel
//!
//! - view.rs: terminal-local state (input editing, scroll position)
//! - input.rs: key handling
//! - ui.rs: rendering
//! - runner.rs: event loop tying the widget to the terminal

mod input;
mod runner;
mod ui;
mod view;

pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, run_chat};
pub use ui::{ChatUI, wrap_input};
pub use view::{ChatView, InputBuffer, PINNED};
