//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles keyboard and mouse events.
//! It does not do any rendering - that's delegated to the views module.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::{debug, trace};

use super::state::{AppState, InteractionMode};
use crate::content::Portfolio;
use crate::section::Section;

/// Lines scrolled per wheel notch
const WHEEL_LINES: u16 = 3;

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(portfolio: Portfolio, today: NaiveDate, cell_aspect: f64) -> Self {
        debug!("App::new: called");
        Self {
            state: AppState::new(portfolio, today, cell_aspect),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        trace!("App::state: called");
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        trace!("App::state_mut: called");
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::Help => {
                // Any key closes help
                self.state.interaction_mode = InteractionMode::Normal;
                false
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_normal_key: called");
        let on_career_track = self.state.current_section == Section::Experience;
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                debug!("App::handle_normal_key: quit requested");
                self.state.should_quit = true;
                return true;
            }

            // === Help ===
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                self.release_pointer();
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Section navigation ===
            (KeyCode::Tab, _) => self.state.go_to(self.state.current_section.next()),
            (KeyCode::BackTab, _) => self.state.go_to(self.state.current_section.prev()),
            (KeyCode::Char(c @ '1'..='7'), _) => {
                let index = (c as usize) - ('1' as usize);
                self.state.go_to(Section::ALL[index]);
            }
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.state.scroll = 0,

            // === Career track: switch company ===
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) | (KeyCode::Right, _) if on_career_track => {
                self.state.next_company();
            }
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) | (KeyCode::Left, _) if on_career_track => {
                self.state.prev_company();
            }

            // === Scrolling ===
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.state.scroll_down(1),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.state.scroll_up(1),
            (KeyCode::PageDown, _) => self.state.scroll_down(10),
            (KeyCode::PageUp, _) => self.state.scroll_up(10),

            _ => {
                trace!("App::handle_normal_key: unbound key");
            }
        }
        false
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        trace!(?mouse, "App::handle_mouse: called");
        // The help overlay covers the dial
        if self.state.interaction_mode == InteractionMode::Help {
            return;
        }
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.state.current_section == Section::Experience
                    && let Some(change) = self.state.pointer_moved(mouse.column, mouse.row)
                {
                    debug!(?change, "App::handle_mouse: dial selection changed");
                }
            }
            MouseEventKind::ScrollDown => self.state.scroll_down(WHEEL_LINES),
            MouseEventKind::ScrollUp => self.state.scroll_up(WHEEL_LINES),
            _ => {}
        }
    }

    /// Terminal lost focus or was resized; the pointer is no longer tracked
    pub fn release_pointer(&mut self) {
        if let Some(change) = self.state.pointer_left() {
            debug!(?change, "App::release_pointer: dial reset");
        }
    }
}
