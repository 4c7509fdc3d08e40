//! Terminal-local view state
//!
//! Conversation data lives in the widget; this only tracks what the
//! terminal needs on top of it.

/// Editable text with a cursor counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text; CRLF and lone CR become LF.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

/// Scroll offset value meaning "pinned to the latest message"
pub const PINNED: u16 = u16::MAX;

/// State of the chat screen that the widget does not own
#[derive(Debug, Clone)]
pub struct ChatView {
    pub input: InputBuffer,
    /// Message scroll offset; [`PINNED`] follows the latest message
    pub scroll_offset: u16,
    /// Largest usable offset, measured at the last render
    pub max_scroll: u16,
    /// Last scroll epoch seen from the widget
    pub seen_scroll_epoch: u64,
    pub loading_frame: usize,
    pub status_message: Option<String>,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            input: InputBuffer::new(),
            scroll_offset: PINNED,
            max_scroll: 0,
            seen_scroll_epoch: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Offset actually used for drawing
    pub fn effective_scroll(&self) -> u16 {
        self.scroll_offset.min(self.max_scroll)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.effective_scroll().saturating_sub(lines);
    }

    /// Scrolling past the end pins the view to the latest message again.
    pub fn scroll_down(&mut self, lines: u16) {
        let next = self.effective_scroll().saturating_add(lines);
        self.scroll_offset = if next >= self.max_scroll { PINNED } else { next };
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = PINNED;
    }

    /// Follow a scroll request from the widget. Returns whether one was pending.
    pub fn sync_scroll_epoch(&mut self, epoch: u64) -> bool {
        if epoch == self.seen_scroll_epoch {
            return false;
        }
        self.seen_scroll_epoch = epoch;
        self.scroll_to_bottom();
        true
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % 4;
    }
}
