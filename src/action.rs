//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to key events, and the App
//! reducer processes them to update state. Every screen transition in
//! the application is one of these values.

use crate::model::CourseFilter;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no input is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit immediately
    ForceQuit,
    /// Open the quit confirmation dialog
    OpenQuitConfirm,
    /// Dismiss the quit confirmation dialog
    CloseQuitConfirm,

    // ─────────────────────────────────────────────────────────────────────────
    // Screen Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Return to the Home screen
    GoHome,
    /// Open the AddItem screen with a fresh draft
    OpenAddItem,
    /// Open the Menu screen with the given filter
    OpenMenu(CourseFilter),

    // ─────────────────────────────────────────────────────────────────────────
    // Home Screen
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the course chip cursor left
    ChipLeft,
    /// Move the course chip cursor right
    ChipRight,

    // ─────────────────────────────────────────────────────────────────────────
    // AddItem Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next form field
    NextField,
    /// Move focus to the previous form field
    PrevField,
    /// Type a character into the focused text field
    Input(char),
    /// Delete the last character of the focused text field
    Backspace,
    /// Cycle the draft course backward
    CoursePrev,
    /// Cycle the draft course forward
    CourseNext,
    /// Validate and commit the draft
    SaveDraft,
    /// Discard the draft and return Home
    CancelDraft,

    // ─────────────────────────────────────────────────────────────────────────
    // Menu Screen
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the list selection down
    NextItem,
    /// Move the list selection up
    PrevItem,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitConfirm => write!(f, "OpenQuitConfirm"),
            Action::CloseQuitConfirm => write!(f, "CloseQuitConfirm"),
            Action::GoHome => write!(f, "GoHome"),
            Action::OpenAddItem => write!(f, "OpenAddItem"),
            Action::OpenMenu(filter) => write!(f, "OpenMenu({})", filter.name()),
            Action::ChipLeft => write!(f, "ChipLeft"),
            Action::ChipRight => write!(f, "ChipRight"),
            Action::NextField => write!(f, "NextField"),
            Action::PrevField => write!(f, "PrevField"),
            Action::Input(c) => write!(f, "Input('{}')", c),
            Action::Backspace => write!(f, "Backspace"),
            Action::CoursePrev => write!(f, "CoursePrev"),
            Action::CourseNext => write!(f, "CourseNext"),
            Action::SaveDraft => write!(f, "SaveDraft"),
            Action::CancelDraft => write!(f, "CancelDraft"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
        }
    }
}
