//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical frame shared by all three screens
pub struct ScreenLayout {
    /// Title/header row
    pub header: Rect,
    /// Screen content
    pub body: Rect,
    /// Key help bar
    pub help: Rect,
}

/// Split the full terminal area into header, body, and help bar
pub fn screen_frame(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        help: chunks[2],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Center a fixed-width column horizontally within the body area
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
