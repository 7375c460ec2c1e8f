//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `MenuState` - the menu store (items, id counter, filter)
//! - `menu` - domain types (courses, items, drafts)
//! - `Screen` - which of the three screens is active

pub mod domain;
pub mod menu;
pub mod ui;

// Re-export commonly used types
pub use domain::MenuState;
pub use menu::{Course, CourseFilter, Draft, DraftError, MenuItem};
pub use ui::Screen;
