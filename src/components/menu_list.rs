//! Menu screen component
//!
//! Displays the items visible under the active course filter, in
//! insertion order. Owns only the list selection state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{screen_frame, ACCENT};
use crate::model::{CourseFilter, MenuItem};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Menu screen component
pub struct MenuListComponent {
    /// List selection state
    pub list_state: ListState,
}

impl Default for MenuListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuListComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    /// Reset the selection for a freshly opened list
    pub fn reset(&mut self, len: usize) {
        self.list_state
            .select(if len == 0 { None } else { Some(0) });
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}

impl Component for MenuListComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('b') | KeyCode::Esc => Some(Action::GoHome),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_menu_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the menu screen
pub struct MenuRenderContext<'a> {
    /// Items visible under the active filter, in insertion order
    pub items: Vec<&'a MenuItem>,
    pub filter: CourseFilter,
    /// Marker prefixed to prices, e.g. "R"
    pub currency_symbol: &'a str,
}

/// Draw the menu screen
pub fn draw_menu_screen(
    frame: &mut Frame,
    area: Rect,
    menu: &mut MenuListComponent,
    ctx: &MenuRenderContext,
) -> Result<()> {
    let layout = screen_frame(area);

    // Header with visible count and active filter
    let title = Paragraph::new(Line::from(Span::styled(
        format!("Menu Items: {}", ctx.items.len()),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" Menu ({}) ", ctx.filter.name())),
    );
    frame.render_widget(title, layout.header);

    if ctx.items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No items added yet",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, layout.body);
    } else {
        render_item_list(frame, layout.body, menu, ctx);
    }

    render_help_bar(frame, layout.help);
    Ok(())
}

fn render_item_list(
    frame: &mut Frame,
    area: Rect,
    menu: &mut MenuListComponent,
    ctx: &MenuRenderContext,
) {
    // Name column gets what the price and course columns leave over
    let name_width = (area.width as usize).saturating_sub(30).max(10);

    let items: Vec<ListItem> = ctx
        .items
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::styled(
                    format!(
                        "{:<width$}",
                        truncate_to_width(&item.name, name_width),
                        width = name_width
                    ),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " {:<10}",
                    format!("{}{}", ctx.currency_symbol, item.price)
                )),
                Span::styled(
                    format!(" {:<9}", item.course.name()),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if item.image.is_some() {
                spans.push(Span::styled(
                    " [image]",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut menu.list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " ↑/↓ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Select "),
        Span::styled(
            " b/Esc ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Back to Home"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Truncate to a display width, ending with an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}
