//! Home component - landing screen
//!
//! Displays the total item count, the course chip row, and the two
//! main actions. Owns the chip cursor.

use crate::action::Action;
use crate::component::Component;
use crate::components::{screen_frame, ACCENT};
use crate::model::{Course, CourseFilter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Home screen component
///
/// The chip cursor is presentation state only; the filter it maps to
/// is committed through `Action::OpenMenu`.
pub struct HomeComponent {
    /// Index into `Course::all()` for the chip row cursor
    pub chip_cursor: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self { chip_cursor: 0 }
    }

    pub fn chip_left(&mut self) {
        let count = Course::all().len();
        self.chip_cursor = (self.chip_cursor + count - 1) % count;
    }

    pub fn chip_right(&mut self) {
        self.chip_cursor = (self.chip_cursor + 1) % Course::all().len();
    }

    /// Course the chip cursor is currently on
    pub fn selected_course(&self) -> Course {
        Course::all()[self.chip_cursor]
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Chip row
            KeyCode::Left | KeyCode::Char('h') => Some(Action::ChipLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::ChipRight),
            KeyCode::Enter => Some(Action::OpenMenu(CourseFilter::Course(
                self.selected_course(),
            ))),

            // Main actions
            KeyCode::Char('a') => Some(Action::OpenAddItem),
            KeyCode::Char('v') | KeyCode::Char('m') => Some(Action::OpenMenu(CourseFilter::All)),

            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitConfirm),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext {
    /// Total number of items on the menu, unfiltered
    pub item_count: usize,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = screen_frame(area);

    render_header(frame, layout.header, ctx.item_count);
    render_body(frame, layout.body, home);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, item_count: usize) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!("Total Menu Items: {}", item_count),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(title, area);
}

fn render_body(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // chip row
            Constraint::Length(1),
            Constraint::Length(1), // add item
            Constraint::Length(1),
            Constraint::Length(1), // view menu
            Constraint::Min(0),
        ])
        .split(area);

    // Course chips; the cursor chip is inverted
    let mut chip_spans: Vec<Span> = Vec::new();
    for (i, course) in Course::all().iter().enumerate() {
        let style = if i == home.chip_cursor {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        chip_spans.push(Span::styled(format!("  {}  ", course.name()), style));
        chip_spans.push(Span::raw("  "));
    }
    let chips = Paragraph::new(Line::from(chip_spans)).alignment(Alignment::Center);
    frame.render_widget(chips, chunks[1]);

    let add_item = Paragraph::new(Line::from(vec![
        Span::styled(
            " a ",
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Add Item"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(add_item, chunks[3]);

    let view_menu = Paragraph::new(Line::from(vec![
        Span::styled(
            " v ",
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" View Menu"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(view_menu, chunks[5]);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " ←/→ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Pick course "),
        Span::styled(
            " Enter ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Browse course "),
        Span::styled(
            " a ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Add "),
        Span::styled(
            " v ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("View menu "),
        Span::styled(
            " q ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_chip_cursor_wraps_both_ways() {
        let mut home = HomeComponent::new();
        assert_eq!(home.selected_course(), Course::Starters);

        home.chip_left();
        assert_eq!(home.selected_course(), Course::Dessert);

        home.chip_right();
        home.chip_right();
        home.chip_right();
        home.chip_right();
        assert_eq!(home.selected_course(), Course::Starters);
    }

    #[test]
    fn test_enter_opens_menu_filtered_to_cursor_chip() {
        let mut home = HomeComponent::new();
        home.chip_right();

        let action = home.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::OpenMenu(CourseFilter::Course(Course::Main)))
        );
    }

    #[test]
    fn test_main_action_keys() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::OpenAddItem)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('v'))).unwrap(),
            Some(Action::OpenMenu(CourseFilter::All))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::OpenQuitConfirm)
        );
    }
}
