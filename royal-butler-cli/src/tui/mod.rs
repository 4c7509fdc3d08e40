//! Terminal rendering of the chat widget using Ratatui

pub mod chat;
mod terminal;
pub mod theme;

pub use chat::{ChatResult, run_chat};
pub use terminal::{Tui, init_terminal, restore_terminal};
