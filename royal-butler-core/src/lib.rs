//! Core of the Royal Butler chat widget.
//!
//! The widget collects a line of user text, forwards it to an injected
//! [`AnswerService`], and mirrors the exchange into an observable
//! [`ConversationState`] that any renderer can subscribe to.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ChatWidget, Exchange, InputSizer, Key, KeyIntent, KeyPress, ScrollScheduler, SubmitOutcome,
    Submission, WidgetSettings, classify_key, display_width, resolve_answer, wrap_line,
};
pub use config::{ButlerConfig, ConfigError, OverlapPolicy};
pub use domain::{ConversationState, Direction, Message, MessageId, MessageLog, append_message};
pub use infrastructure::service::{
    AnswerError, AnswerRequest, AnswerResponse, AnswerService, HttpAnswerService,
};
