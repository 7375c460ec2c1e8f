//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own presentation state, event
//! handling, and rendering logic. Components communicate through
//! Actions rather than direct state mutation.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` - Convert key events to semantic Actions
/// 2. `draw` - Render the component
///
/// State changes happen in the App reducer, never in
/// `handle_key_event`.
pub trait Component {
    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// Pure rendering - no state changes. Use the provided `area` to
    /// determine where to draw.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
