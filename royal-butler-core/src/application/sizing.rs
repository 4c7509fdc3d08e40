//! Input box growth
//!
//! Widths are terminal columns, so wide CJK glyphs count twice.

use unicode_width::UnicodeWidthChar;

/// Computes how many rows the input needs to show its whole content.
///
/// There is no upper bound; the floor is `min_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSizer {
    min_rows: u16,
}

impl InputSizer {
    pub fn new(min_rows: u16) -> Self {
        Self {
            min_rows: min_rows.max(1),
        }
    }

    pub fn min_rows(&self) -> u16 {
        self.min_rows
    }

    /// Rows needed for `text` wrapped at `width` columns.
    ///
    /// A width of 0 disables soft wrapping.
    pub fn rows(&self, text: &str, width: u16) -> u16 {
        let needed: usize = text
            .split('\n')
            .map(|line| wrap_line(line, width).len())
            .sum();
        u16::try_from(needed).unwrap_or(u16::MAX).max(self.min_rows)
    }
}

/// Columns `text` occupies; control characters take none.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Split one line (no `\n`) into rows at most `width` columns wide.
///
/// A glyph wider than `width` gets a row of its own. A width of 0
/// disables soft wrapping.
pub fn wrap_line(line: &str, width: u16) -> Vec<&str> {
    let width = usize::from(width);
    if width == 0 || line.is_empty() {
        return vec![line];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (at, c) in line.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && at > start {
            rows.push(&line[start..at]);
            start = at;
            used = 0;
        }
        used += w;
    }
    rows.push(&line[start..]);
    rows
}

impl Default for InputSizer {
    fn default() -> Self {
        Self::new(1)
    }
}
