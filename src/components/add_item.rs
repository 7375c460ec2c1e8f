//! AddItem form component
//!
//! Composes the draft dish. The draft lives here as presentation state
//! until it is committed through the store's `add_item`; the reducer
//! resets it whenever the screen is entered or exited.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_column, screen_frame, ACCENT};
use crate::model::{Course, Draft};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Price,
    Course,
    Image,
}

impl Field {
    fn next(&self) -> Field {
        match self {
            Field::Name => Field::Price,
            Field::Price => Field::Course,
            Field::Course => Field::Image,
            Field::Image => Field::Name,
        }
    }

    fn prev(&self) -> Field {
        match self {
            Field::Name => Field::Image,
            Field::Price => Field::Name,
            Field::Course => Field::Price,
            Field::Image => Field::Course,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Dish Name",
            Field::Price => "Price",
            Field::Course => "Course",
            Field::Image => "Image URL (optional)",
        }
    }
}

/// AddItem screen component
pub struct AddItemComponent {
    /// The in-progress dish
    pub draft: Draft,
    /// Currently focused form field
    pub focus: Field,
    /// Validation message from the last rejected save
    pub error: Option<String>,
}

impl Default for AddItemComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AddItemComponent {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            focus: Field::Name,
            error: None,
        }
    }

    /// Reset the draft to defaults and focus the first field
    pub fn reset(&mut self) {
        self.draft.reset();
        self.focus = Field::Name;
        self.error = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field
    ///
    /// No-op when the course selector has focus.
    pub fn input(&mut self, c: char) {
        match self.focus {
            Field::Name => self.draft.name.push(c),
            Field::Price => self.draft.price.push(c),
            Field::Image => self.draft.image.push(c),
            Field::Course => return,
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Name => {
                self.draft.name.pop();
            }
            Field::Price => {
                self.draft.price.pop();
            }
            Field::Image => {
                self.draft.image.pop();
            }
            Field::Course => return,
        }
        self.error = None;
    }

    pub fn course_prev(&mut self) {
        self.draft.course = self.draft.course.prev();
    }

    pub fn course_next(&mut self) {
        self.draft.course = self.draft.course.next();
    }

    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Price => &self.draft.price,
            Field::Image => &self.draft.image,
            Field::Course => "",
        }
    }
}

impl Component for AddItemComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Save from anywhere in the form
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::SaveDraft));
        }

        let action = match key.code {
            KeyCode::Esc => Some(Action::CancelDraft),

            // Enter advances; on the last field it saves
            KeyCode::Enter => {
                if self.focus == Field::Image {
                    Some(Action::SaveDraft)
                } else {
                    Some(Action::NextField)
                }
            }

            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),

            KeyCode::Left if self.focus == Field::Course => Some(Action::CoursePrev),
            KeyCode::Right if self.focus == Field::Course => Some(Action::CourseNext),

            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = screen_frame(area);

        // Header
        let title = Paragraph::new(Line::from(Span::styled(
            "Add Menu Item",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(title, layout.header);

        // Form column
        let form_area = centered_column(layout.body, 50);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // name
                Constraint::Length(3), // price
                Constraint::Length(3), // course
                Constraint::Length(3), // image
                Constraint::Length(1), // image preview
                Constraint::Length(1), // error
                Constraint::Min(0),
            ])
            .split(form_area);

        self.render_text_field(frame, chunks[0], Field::Name);
        self.render_text_field(frame, chunks[1], Field::Price);
        self.render_course_field(frame, chunks[2]);
        self.render_text_field(frame, chunks[3], Field::Image);

        // Terminal stand-in for the image preview; the URL is never fetched
        if !self.draft.image.trim().is_empty() {
            let preview = Paragraph::new(Line::from(Span::styled(
                format!("[image] {}", self.draft.image.trim()),
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(preview, chunks[4]);
        }

        if let Some(ref error) = self.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(error_line, chunks[5]);
        }

        render_help_bar(frame, layout.help);
        Ok(())
    }
}

impl AddItemComponent {
    fn render_text_field(&self, frame: &mut Frame, area: Rect, field: Field) {
        let focused = self.focus == field;
        let border_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::raw(self.field_value(field).to_string())];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );
        frame.render_widget(input, area);
    }

    fn render_course_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Field::Course;
        let border_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans: Vec<Span> = Vec::new();
        for course in Course::all() {
            let style = if course == self.draft.course {
                Style::default()
                    .fg(Color::White)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ACCENT)
            };
            spans.push(Span::styled(format!(" {} ", course.name()), style));
            spans.push(Span::raw(" "));
        }

        let selector = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Field::Course.label()),
        );
        frame.render_widget(selector, area);
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " Tab/↓ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Next field "),
        Span::styled(
            " ↑ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Previous "),
        Span::styled(
            " ←/→ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Course "),
        Span::styled(
            " Ctrl+S ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Save "),
        Span::styled(
            " Esc ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Cancel"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_order_wraps() {
        let mut form = AddItemComponent::new();
        assert_eq!(form.focus, Field::Name);
        form.focus_next();
        assert_eq!(form.focus, Field::Price);
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, Field::Name);
        form.focus_prev();
        assert_eq!(form.focus, Field::Image);
    }

    #[test]
    fn test_input_routes_to_focused_field() {
        let mut form = AddItemComponent::new();
        form.input('S');
        form.input('o');
        form.input('u');
        form.input('p');
        assert_eq!(form.draft.name, "Soup");

        form.focus_next();
        form.input('4');
        form.input('5');
        assert_eq!(form.draft.price, "45");
        assert_eq!(form.draft.name, "Soup");

        form.backspace();
        assert_eq!(form.draft.price, "4");
    }

    #[test]
    fn test_input_ignored_on_course_field() {
        let mut form = AddItemComponent::new();
        form.focus = Field::Course;
        form.input('x');
        form.backspace();
        assert_eq!(form.draft.name, "");
        assert_eq!(form.draft.price, "");
        assert_eq!(form.draft.image, "");
    }

    #[test]
    fn test_course_cycling() {
        let mut form = AddItemComponent::new();
        assert_eq!(form.draft.course, Course::Starters);
        form.course_next();
        assert_eq!(form.draft.course, Course::Main);
        form.course_prev();
        form.course_prev();
        assert_eq!(form.draft.course, Course::Dessert);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = AddItemComponent::new();
        form.error = Some("Price is required".to_string());
        form.input('4');
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_key_mapping() {
        let mut form = AddItemComponent::new();
        assert_eq!(
            form.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CancelDraft)
        );
        assert_eq!(
            form.handle_key_event(key(KeyCode::Char('x'))).unwrap(),
            Some(Action::Input('x'))
        );
        assert_eq!(
            form.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::SaveDraft)
        );

        // Enter advances until the last field, where it saves
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::NextField)
        );
        form.focus = Field::Image;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SaveDraft)
        );
    }

    #[test]
    fn test_course_arrows_only_on_course_field() {
        let mut form = AddItemComponent::new();
        // On a text field the arrows do nothing
        assert_eq!(form.handle_key_event(key(KeyCode::Left)).unwrap(), None);

        form.focus = Field::Course;
        assert_eq!(
            form.handle_key_event(key(KeyCode::Left)).unwrap(),
            Some(Action::CoursePrev)
        );
        assert_eq!(
            form.handle_key_event(key(KeyCode::Right)).unwrap(),
            Some(Action::CourseNext)
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = AddItemComponent::new();
        form.input('S');
        form.focus = Field::Course;
        form.course_next();
        form.error = Some("Price is required".to_string());

        form.reset();
        assert_eq!(form.draft, Draft::default());
        assert_eq!(form.focus, Field::Name);
        assert_eq!(form.error, None);
    }
}
