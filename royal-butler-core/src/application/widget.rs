//! The chat widget controller
//!
//! Owns the conversation state and runs one request/response exchange per
//! submission. Renderers observe the state through [`ChatWidget::subscribe`]
//! and never mutate it directly.

use super::payload::resolve_answer;
use super::scroll::ScrollScheduler;
use super::sizing::InputSizer;
use crate::config::{ButlerConfig, OverlapPolicy};
use crate::constants::{
    DEFAULT_APOLOGY_MESSAGE, DEFAULT_FORMATTING_ERROR_MESSAGE, DEFAULT_MIN_INPUT_ROWS,
    DEFAULT_OPEN_SCROLL_DELAY_MS, DEFAULT_WELCOME_MESSAGE,
};
use crate::domain::{ConversationState, Direction, Message, MessageId, MessageLog};
use crate::infrastructure::service::{AnswerError, AnswerRequest, AnswerResponse, AnswerService};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Texts and tunables the widget needs at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub welcome_message: Option<String>,
    pub apology_message: String,
    pub formatting_error_message: String,
    pub open_scroll_delay: Duration,
    pub min_input_rows: u16,
    pub overlap: OverlapPolicy,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            welcome_message: Some(DEFAULT_WELCOME_MESSAGE.to_string()),
            apology_message: DEFAULT_APOLOGY_MESSAGE.to_string(),
            formatting_error_message: DEFAULT_FORMATTING_ERROR_MESSAGE.to_string(),
            open_scroll_delay: Duration::from_millis(DEFAULT_OPEN_SCROLL_DELAY_MS),
            min_input_rows: DEFAULT_MIN_INPUT_ROWS,
            overlap: OverlapPolicy::default(),
        }
    }
}

impl From<&ButlerConfig> for WidgetSettings {
    fn from(config: &ButlerConfig) -> Self {
        Self {
            welcome_message: config.welcome_message.clone(),
            apology_message: config.apology_message.clone(),
            formatting_error_message: config.formatting_error_message.clone(),
            open_scroll_delay: config.open_scroll_delay(),
            min_input_rows: config.min_input_rows,
            overlap: config.overlap,
        }
    }
}

/// Result of [`ChatWidget::submit_message`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened
    Empty,
    /// A reply is pending and overlapping requests are refused
    Busy,
    /// The service answered; carries the appended incoming message
    Replied(Message),
    /// The call failed; carries the appended apology
    Failed(Message),
}

impl SubmitOutcome {
    /// The incoming message appended by this submission, if any.
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Replied(message) | SubmitOutcome::Failed(message) => Some(message),
            SubmitOutcome::Empty | SubmitOutcome::Busy => None,
        }
    }
}

/// Result of [`ChatWidget::start_submission`]
pub enum Submission<S> {
    /// Outgoing message recorded; the exchange still has to be resolved
    Sent(Exchange<S>),
    Empty,
    Busy,
}

/// A submitted message waiting for its reply.
///
/// Dropping the exchange before it resolves releases its in-flight slot,
/// so a cancelled or panicked call never leaves the thinking flag raised.
#[must_use = "the outgoing message stays pending until the exchange is resolved"]
pub struct Exchange<S> {
    slot: InFlight<S>,
    text: String,
    session_token: Option<String>,
}

impl<S: AnswerService> Exchange<S> {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Call the answer service and record the reply or the apology.
    pub async fn resolve(self) -> SubmitOutcome {
        let Exchange {
            slot,
            text,
            session_token,
        } = self;
        info!(
            chars = text.chars().count(),
            has_session = session_token.is_some(),
            "Forwarding message to answer service"
        );
        let request = AnswerRequest::new(text, session_token);
        let result = slot.widget.inner.service.ask(request).await;
        slot.settle(result)
    }
}

/// One counted in-flight request.
struct InFlight<S> {
    widget: ChatWidget<S>,
    settled: bool,
}

impl<S: AnswerService> InFlight<S> {
    fn settle(mut self, result: Result<AnswerResponse, AnswerError>) -> SubmitOutcome {
        self.settled = true;
        self.widget.finish(result)
    }
}

impl<S> Drop for InFlight<S> {
    fn drop(&mut self) {
        if !self.settled {
            self.widget.abandon_exchange();
        }
    }
}

/// Chat widget bound to an answer service.
///
/// Cloning is cheap; clones share the same state, so a clone can be moved
/// into a spawned task to run a submission while the UI keeps going.
pub struct ChatWidget<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    service: S,
    settings: WidgetSettings,
    sizer: InputSizer,
    state: Arc<watch::Sender<ConversationState>>,
    next_id: AtomicU64,
    scroll: ScrollScheduler,
}

impl<S> Clone for ChatWidget<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> ChatWidget<S> {
    /// Release the slot of an exchange that was dropped unresolved.
    fn abandon_exchange(&self) {
        warn!("Exchange dropped before the reply arrived");
        self.inner.state.send_modify(|state| {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.is_awaiting_reply = state.in_flight > 0;
            state.scroll_epoch += 1;
        });
    }
}

impl<S: AnswerService> ChatWidget<S> {
    pub fn new(service: S, settings: WidgetSettings) -> Self {
        let sizer = InputSizer::new(settings.min_input_rows);
        let next_id = AtomicU64::new(1);

        let mut messages = MessageLog::new();
        if let Some(welcome) = &settings.welcome_message {
            let id = MessageId::new(next_id.fetch_add(1, Ordering::Relaxed));
            messages = messages.appended(Message::new(id, welcome.clone(), Direction::Incoming));
        }
        let (state, _) = watch::channel(ConversationState::new(messages, sizer.min_rows()));

        Self {
            inner: Arc::new(Inner {
                service,
                settings,
                sizer,
                state: Arc::new(state),
                next_id,
                scroll: ScrollScheduler::new(),
            }),
        }
    }

    pub fn from_config(service: S, config: &ButlerConfig) -> Self {
        Self::new(service, WidgetSettings::from(config))
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.inner.settings
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ConversationState {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without copying it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ConversationState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Flip the panel; returns whether it is now open.
    ///
    /// Opening schedules a scroll to the latest message once layout has
    /// had time to settle.
    pub fn toggle_panel(&self) -> bool {
        let mut open = false;
        self.inner.state.send_modify(|state| {
            state.is_panel_open = !state.is_panel_open;
            open = state.is_panel_open;
        });
        debug!(open, "Toggled chat panel");

        if open {
            let state = self.inner.state.clone();
            self.inner
                .scroll
                .schedule(self.inner.settings.open_scroll_delay, move || {
                    state.send_modify(|s| s.scroll_epoch += 1);
                });
        }
        open
    }

    /// Record what the user has typed and resize the input for `width` columns.
    pub fn set_input(&self, text: impl Into<String>, width: u16) {
        let text = text.into();
        let rows = self.inner.sizer.rows(&text, width);
        self.inner.state.send_if_modified(|state| {
            if state.pending_input == text && state.input_rows == rows {
                return false;
            }
            state.pending_input = text;
            state.input_rows = rows;
            true
        });
    }

    /// Ask renderers to jump to the latest message.
    pub fn request_scroll(&self) {
        self.inner.state.send_modify(|s| s.scroll_epoch += 1);
    }

    /// Append a message outside of an exchange.
    pub fn append_message(&self, text: impl Into<String>, direction: Direction) -> Message {
        let message = Message::new(self.next_id(), text, direction);
        let appended = message.clone();
        self.inner.state.send_modify(|state| {
            state.messages = state.messages.appended(appended);
        });
        message
    }

    /// Resume a conversation with a token obtained earlier.
    pub fn set_session_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.inner.state.send_modify(|state| {
            state.session_token = Some(token).filter(|t| !t.is_empty());
        });
    }

    /// Send `raw` to the answer service and record both sides of the exchange.
    ///
    /// Errors from the service are turned into an incoming message and
    /// never returned.
    pub async fn submit_message(&self, raw: &str) -> SubmitOutcome {
        match self.start_submission(raw) {
            Submission::Sent(exchange) => exchange.resolve().await,
            Submission::Empty => SubmitOutcome::Empty,
            Submission::Busy => SubmitOutcome::Busy,
        }
    }

    /// Synchronous half of [`submit_message`](Self::submit_message).
    ///
    /// Appends the outgoing message, clears the input and raises the
    /// thinking flag. The returned exchange performs the remote call.
    pub fn start_submission(&self, raw: &str) -> Submission<S> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return Submission::Empty;
        }

        let reject_overlap = self.inner.settings.overlap == OverlapPolicy::Reject;
        let outgoing = Message::new(self.next_id(), text, Direction::Outgoing);
        let min_rows = self.inner.sizer.min_rows();
        let mut session_token = None;
        let accepted = self.inner.state.send_if_modified(|state| {
            if reject_overlap && state.in_flight > 0 {
                return false;
            }
            state.messages = state.messages.appended(outgoing);
            state.pending_input.clear();
            state.input_rows = min_rows;
            state.in_flight += 1;
            state.is_awaiting_reply = true;
            state.scroll_epoch += 1;
            session_token = state.session_token.clone();
            true
        });
        if !accepted {
            info!("Reply still pending; submission refused");
            return Submission::Busy;
        }

        Submission::Sent(Exchange {
            slot: InFlight {
                widget: self.clone(),
                settled: false,
            },
            text: text.to_string(),
            session_token,
        })
    }

    fn finish(&self, result: Result<AnswerResponse, AnswerError>) -> SubmitOutcome {
        let (reply_text, new_token, failed) = match result {
            Ok(response) => {
                debug!(?response, "Answer service replied");
                let reply = resolve_answer(
                    response.agent_response.as_deref(),
                    &self.inner.settings.formatting_error_message,
                );
                let token = response.session_id.filter(|t| !t.is_empty());
                (reply, token, false)
            }
            Err(err) => {
                error!(error = %err, "Answer service call failed");
                (err.user_message(&self.inner.settings.apology_message), None, true)
            }
        };

        let incoming = Message::new(self.next_id(), reply_text, Direction::Incoming);
        let appended = incoming.clone();
        self.inner.state.send_modify(|state| {
            if let Some(token) = new_token {
                state.session_token = Some(token);
            }
            state.messages = state.messages.appended(appended);
            state.in_flight = state.in_flight.saturating_sub(1);
            state.is_awaiting_reply = state.in_flight > 0;
            state.scroll_epoch += 1;
        });

        if failed {
            SubmitOutcome::Failed(incoming)
        } else {
            info!("Reply appended");
            SubmitOutcome::Replied(incoming)
        }
    }

    fn next_id(&self) -> MessageId {
        MessageId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed))
    }
}
