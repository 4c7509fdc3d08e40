//! Chat messages and the append-only message log

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Identifier of a message, unique and increasing within one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MessageId(u64);

impl MessageId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Typed by the user.
    Outgoing,
    /// Produced by the butler, including fallback and error texts.
    Incoming,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outgoing => "outgoing",
            Direction::Incoming => "incoming",
        }
    }
}

/// A single chat entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    text: String,
    direction: Direction,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>, direction: Direction) -> Self {
        Self {
            id,
            text: text.into(),
            direction,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }
}

/// Ordered, append-only sequence of messages.
///
/// Cloning is cheap and a clone never observes later appends: every append
/// produces a new log and leaves the previous one untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Arc<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new log with `message` at the end.
    pub fn appended(&self, message: Message) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(message);
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn count(&self, direction: Direction) -> usize {
        self.entries
            .iter()
            .filter(|m| m.direction() == direction)
            .count()
    }
}

impl Deref for MessageLog {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds a message and returns the log extended by it.
pub fn append_message(
    log: &MessageLog,
    id: MessageId,
    text: impl Into<String>,
    direction: Direction,
) -> MessageLog {
    log.appended(Message::new(id, text, direction))
}
