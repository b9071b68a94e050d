//! Layout definitions for the TUI
//!
//! Every screen shares the same frame: title header, body, key hints and a
//! one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions shared by all screens
pub struct AppLayout {
    /// Screen title
    pub header: Rect,
    /// Screen content
    pub body: Rect,
    /// Key hints for the current screen
    pub hints: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Key hints
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            hints: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Layout for an input screen: form on top, recorded entries below
pub struct InputLayout {
    pub form: Rect,
    pub entries: Rect,
    pub total: Rect,
}

impl InputLayout {
    /// `form_rows` is the number of text boxes on the form
    pub fn new(area: Rect, form_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(form_rows + 2), // Form with borders
                Constraint::Min(3),                // Entries
                Constraint::Length(3),             // Total
            ])
            .split(area);

        Self {
            form: chunks[0],
            entries: chunks[1],
            total: chunks[2],
        }
    }
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
