//! UI Components
//!
//! Each component encapsulates its own presentation state, event
//! handling, and rendering logic. Components communicate through
//! Actions rather than direct state mutation.

pub mod add_item;
pub mod home;
pub mod layout;
pub mod menu_list;
pub mod quit_dialog;

pub use add_item::AddItemComponent;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{centered_column, centered_popup, screen_frame};
pub use menu_list::{draw_menu_screen, MenuListComponent, MenuRenderContext};
pub use quit_dialog::QuitDialog;

use ratatui::style::Color;

/// Maroon accent used for titles, chips, borders, and highlights
pub const ACCENT: Color = Color::Rgb(128, 0, 0);
