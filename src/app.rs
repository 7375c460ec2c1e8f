//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to the active
//! screen. All state changes happen in `update`: screen components
//! translate key events into Actions, and this reducer is the single
//! writer over `MenuState` and the active `Screen`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, draw_menu_screen, AddItemComponent, HomeComponent, HomeRenderContext,
    MenuListComponent, MenuRenderContext, QuitDialog,
};
use crate::config::Config;
use crate::model::{MenuState, Screen};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// Active screen; exactly one at any time
    pub screen: Screen,

    /// Domain state (menu data)
    pub state: MenuState,

    /// Whether the quit confirmation overlay is showing
    ///
    /// The overlay is not a fourth screen: `screen` stays Home under it.
    pub show_quit_confirm: bool,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// User configuration
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub add_item: AddItemComponent,
    pub menu_list: MenuListComponent,
    pub quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> App {
        App {
            screen: Screen::Home,
            state: MenuState::new(),
            show_quit_confirm: false,
            should_quit: false,
            config,
            home: HomeComponent::new(),
            add_item: AddItemComponent::new(),
            menu_list: MenuListComponent::new(),
            quit_dialog: QuitDialog,
        }
    }

    /// Process an action and update state
    ///
    /// Returns a follow-up action when the update should trigger
    /// another transition (e.g. a successful save returns to Home).
    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::OpenQuitConfirm => {
                self.show_quit_confirm = true;
            }
            Action::CloseQuitConfirm => {
                self.show_quit_confirm = false;
            }

            // ─────────────────────────────────────────────────────────────────
            // Screen Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::GoHome => {
                self.screen = Screen::Home;
            }
            Action::OpenAddItem => {
                // Draft is reset on entry as well as on exit
                self.add_item.reset();
                self.screen = Screen::AddItem;
            }
            Action::OpenMenu(filter) => {
                self.state.set_filter(filter);
                self.menu_list.reset(self.state.visible_count());
                self.screen = Screen::Menu;
            }

            // ─────────────────────────────────────────────────────────────────
            // Home Screen (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ChipLeft => self.home.chip_left(),
            Action::ChipRight => self.home.chip_right(),

            // ─────────────────────────────────────────────────────────────────
            // AddItem Form (delegate to AddItemComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextField => self.add_item.focus_next(),
            Action::PrevField => self.add_item.focus_prev(),
            Action::Input(c) => self.add_item.input(c),
            Action::Backspace => self.add_item.backspace(),
            Action::CoursePrev => self.add_item.course_prev(),
            Action::CourseNext => self.add_item.course_next(),
            Action::SaveDraft => match self.state.add_item(&self.add_item.draft) {
                Ok(_) => {
                    self.add_item.reset();
                    return Ok(Some(Action::GoHome));
                }
                // Invalid draft: nothing committed, stay on the form
                Err(e) => self.add_item.error = Some(e.to_string()),
            },
            Action::CancelDraft => {
                self.add_item.reset();
                return Ok(Some(Action::GoHome));
            }

            // ─────────────────────────────────────────────────────────────────
            // Menu Screen (delegate to MenuListComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.menu_list.next(self.state.visible_count()),
            Action::PrevItem => self.menu_list.previous(self.state.visible_count()),
        }

        Ok(None)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The overlay swallows all input while visible
        if self.show_quit_confirm {
            return self.quit_dialog.handle_key_event(key);
        }

        match self.screen {
            Screen::Home => self.home.handle_key_event(key),
            Screen::AddItem => self.add_item.handle_key_event(key),
            Screen::Menu => self.menu_list.handle_key_event(key),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.screen {
            Screen::Home => {
                let ctx = HomeRenderContext {
                    item_count: self.state.items().len(),
                };
                draw_home_screen(frame, area, &self.home, &ctx)?;
            }
            Screen::AddItem => {
                self.add_item.draw(frame, area)?;
            }
            Screen::Menu => {
                let ctx = MenuRenderContext {
                    items: self.state.visible_items().collect(),
                    filter: self.state.filter,
                    currency_symbol: &self.config.currency_symbol,
                };
                draw_menu_screen(frame, area, &mut self.menu_list, &ctx)?;
            }
        }

        if self.show_quit_confirm {
            self.quit_dialog.draw(frame, area)?;
        }

        Ok(())
    }
}
