//! Chat UI rendering components

use super::view::ChatView;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use royal_butler_core::{ConversationState, Direction, display_width, wrap_line};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const PROMPT: &str = "> ";

/// Columns the input box spends on borders, prompt and the trailing cursor
const INPUT_CHROME: u16 = 5;

/// Split input into display rows, wrapping at `width` columns.
///
/// Produces exactly as many rows as [`royal_butler_core::InputSizer`]
/// counts for the same text and width.
pub fn wrap_input(text: &str, width: u16) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .map(str::to_string)
        .collect()
}

/// Row and screen column of the cursor within the wrapped input.
fn cursor_row_col(text: &str, cursor: usize, width: u16) -> (usize, usize) {
    let mut remaining = cursor;
    let mut row = 0;
    for line in text.split('\n') {
        let rows = wrap_line(line, width);
        let len = line.chars().count();
        if remaining > len {
            remaining -= len + 1;
            row += rows.len();
            continue;
        }
        let last = rows.len() - 1;
        for (i, piece) in rows.iter().enumerate() {
            let chars = piece.chars().count();
            // At a row boundary the cursor starts the next row, unless this is the last one.
            if remaining < chars || (remaining == chars && i == last) {
                let before: String = piece.chars().take(remaining).collect();
                return (row + i, display_width(&before));
            }
            remaining -= chars;
        }
        return (row + last, 0);
    }
    (row, 0)
}

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Width available to input text in a terminal `total_width` columns wide
    pub fn input_text_width(total_width: u16) -> u16 {
        total_width.saturating_sub(INPUT_CHROME)
    }

    /// Render the panel, or the launcher badge when it is closed
    pub fn render(
        frame: &mut Frame,
        view: &mut ChatView,
        state: &ConversationState,
        title: &str,
        icon: &str,
    ) {
        if state.is_panel_open {
            Self::render_panel(frame, view, state, title, icon);
        } else {
            Self::render_launcher(frame, view, state, title, icon);
        }
    }

    fn render_panel(
        frame: &mut Frame,
        view: &mut ChatView,
        state: &ConversationState,
        title: &str,
        icon: &str,
    ) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(2),                    // Status bar
                Constraint::Min(3),                       // Messages area
                Constraint::Length(state.input_rows + 2), // Input area
                Constraint::Length(1),                    // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], view, state, title, icon);
        Self::render_messages(frame, chunks[1], view, state, icon);
        Self::render_input(frame, chunks[2], view);
        Self::render_help_bar(frame, chunks[3]);
    }

    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        view: &ChatView,
        state: &ConversationState,
        title: &str,
        icon: &str,
    ) {
        let session_display = state
            .session_token
            .as_ref()
            .map(|s| s.chars().take(8).collect::<String>())
            .unwrap_or_else(|| "new".into());

        let mut spans = vec![
            Span::styled(format!(" {icon} {title} "), theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(format!("Session: {session_display} "), theme::text()),
        ];
        if state.is_awaiting_reply {
            spans.push(Span::styled(
                format!("│ {} ", SPINNER[view.loading_frame]),
                theme::loading(),
            ));
        }
        if let Some(status) = &view.status_message {
            spans.push(Span::styled(format!("│ {status} "), theme::muted()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_messages(
        frame: &mut Frame,
        area: Rect,
        view: &mut ChatView,
        state: &ConversationState,
        icon: &str,
    ) {
        let inner_height = usize::from(area.height);
        let butler_prefix = format!("{icon} ");

        let mut lines: Vec<Line> = Vec::new();
        for msg in &state.messages {
            let (prefix, prefix_style, body_style) = match msg.direction() {
                Direction::Outgoing => ("You: ", theme::guest_prefix(), theme::text()),
                Direction::Incoming => {
                    (butler_prefix.as_str(), theme::butler_prefix(), theme::butler_text())
                }
            };
            let indent = " ".repeat(Span::raw(prefix).width());

            let mut content_lines = msg.text().lines();
            let first = content_lines.next().unwrap_or("");
            lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), prefix_style),
                Span::styled(first.to_string(), body_style),
            ]));
            for line in content_lines {
                lines.push(Line::from(Span::styled(format!("{indent}{line}"), body_style)));
            }
            lines.push(Line::from(""));
        }

        if state.is_awaiting_reply {
            lines.push(Line::from(Span::styled(
                format!("{butler_prefix}{} Thinking...", SPINNER[view.loading_frame]),
                theme::loading(),
            )));
        }

        // Measured with the same word wrapping used to draw, so pinning
        // to the bottom really shows the last line.
        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        let total_rows = para.line_count(area.width.saturating_sub(2).max(1));
        let max_scroll = total_rows.saturating_sub(inner_height);
        view.max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());
        let para = para.block(block).scroll((view.effective_scroll(), 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, view: &ChatView) {
        let text_width = Self::input_text_width(area.width);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_active())
            .title(" Message ");

        if view.input.is_empty() {
            let placeholder = Line::from(vec![
                Span::styled(PROMPT, theme::key_hint()),
                Span::styled("Type your message...", theme::muted()),
            ]);
            frame.render_widget(Paragraph::new(placeholder).block(block), area);
            frame.set_cursor_position(Position::new(area.x + 1 + PROMPT.len() as u16, area.y + 1));
            return;
        }

        let rows = wrap_input(view.input.text(), text_width);
        let lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let lead = if i == 0 { PROMPT } else { "  " };
                Line::from(vec![
                    Span::styled(lead, theme::key_hint()),
                    Span::styled(row, theme::text()),
                ])
            })
            .collect();

        let (row, col) = cursor_row_col(view.input.text(), view.input.cursor(), text_width);
        let visible = usize::from(area.height.saturating_sub(2)).max(1);
        let scroll = row.saturating_sub(visible - 1);
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);

        let row = u16::try_from(row).unwrap_or(u16::MAX).saturating_sub(scroll);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let x = area.x + 1 + PROMPT.len() as u16 + col;
        let y = area.y + 1 + row;
        if x < area.right() && y < area.bottom() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": Send │ "),
            Span::styled("Shift/Alt+Enter", theme::key_hint()),
            Span::raw(": New line │ "),
            Span::styled("PgUp/PgDn", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(": Close │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": Exit "),
        ]);
        frame.render_widget(Paragraph::new(help).style(theme::muted()), area);
    }

    fn render_launcher(
        frame: &mut Frame,
        view: &ChatView,
        state: &ConversationState,
        title: &str,
        icon: &str,
    ) {
        let area = frame.area();
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(title.to_string(), theme::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Ctrl+O", theme::key_hint()),
                Span::raw(" or "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(": Open chat │ "),
                Span::styled("q", theme::key_destructive()),
                Span::raw(": Exit"),
            ]),
        ])
        .alignment(Alignment::Center)
        .style(theme::muted());
        let middle = area.height / 2;
        let hint_area = Rect::new(area.x, area.y + middle.saturating_sub(1), area.width, 3)
            .intersection(area);
        frame.render_widget(hint, hint_area);

        let badge = if state.is_awaiting_reply {
            format!(" {icon} {} ", SPINNER[view.loading_frame])
        } else {
            format!(" {icon} ")
        };
        let badge_width = Span::raw(&badge).width() as u16;
        if area.width < badge_width + 2 || area.height < 2 {
            return;
        }
        let badge_area = Rect::new(
            area.right() - badge_width - 2,
            area.bottom() - 2,
            badge_width,
            1,
        );
        frame.render_widget(Clear, badge_area);
        frame.render_widget(Paragraph::new(badge).style(theme::launcher()), badge_area);
    }
}
