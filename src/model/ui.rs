//! UI state - which screen is active
//!
//! Exactly one screen is active at any time. Presentation state local
//! to a screen (field focus, chip cursor, list scroll) lives in the
//! screen's component.

/// The three mutually-exclusive application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddItem,
    Menu,
}
