//! Key intent classification for the message input

/// Key identity, reduced to what the input cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// A key press as reported by the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Secondary modifier that turns Enter into a line break
    pub shift: bool,
    /// Keystroke belongs to an input-method composition
    pub composing: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            composing: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn composing(mut self) -> Self {
        self.composing = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Send the pending input
    Submit,
    /// Insert a literal line break
    InsertLineBreak,
    /// Swallow the key
    Ignore,
    /// Ordinary editing; let the input handle it
    Edit,
}

pub fn classify_key(press: KeyPress) -> KeyIntent {
    if press.composing {
        return KeyIntent::Ignore;
    }
    match press.key {
        Key::Enter if press.shift => KeyIntent::InsertLineBreak,
        Key::Enter => KeyIntent::Submit,
        Key::Char(_) | Key::Other => KeyIntent::Edit,
    }
}
