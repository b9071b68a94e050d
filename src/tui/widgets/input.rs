//! Text input widget
//!
//! A single-line text field with a character-based cursor. Text wider than
//! the field scrolls so the cursor stays visible; columns are measured in
//! terminal cells, so wide glyphs take two.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
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

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// First visible character and the cursor's column for a field `width`
    /// cells wide
    pub fn visible_window(&self, width: usize) -> (usize, usize) {
        let widths: Vec<usize> = self.content.chars().map(cell_width).collect();
        let cursor = self.cursor.min(widths.len());
        // Past the end the cursor is drawn as a one-cell block
        let cursor_width = widths.get(cursor).copied().unwrap_or(1).max(1);
        let room = width.saturating_sub(cursor_width);

        let mut start = 0;
        let mut column: usize = widths[..cursor].iter().sum();
        while column > room && start < cursor {
            column -= widths[start];
            start += 1;
        }
        (start, column)
    }
}

fn cell_width(c: char) -> usize {
    Span::raw(c.to_string()).width()
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            (Span::raw(self.label.as_str()).width() as u16 + 2).min(area.width)
        };
        let input_start = area.x + label_width;
        let field_width = area.width - label_width;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let show_placeholder = self.content.is_empty() && !self.focused;
        let (display_text, text_style) = if show_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        if field_width == 0 {
            return;
        }

        let (start, column) = if show_placeholder {
            (0, 0)
        } else {
            self.visible_window(field_width as usize)
        };
        let visible: String = display_text.chars().skip(start).collect();
        buf.set_stringn(
            input_start,
            area.y,
            visible,
            field_width as usize,
            text_style,
        );

        if self.focused && column < field_width as usize {
            let cursor_x = input_start + column as u16;
            let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
            buf.set_stringn(
                cursor_x,
                area.y,
                cursor_char.to_string(),
                field_width as usize - column,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }
}
