//! TUI Runner - main loop that owns the terminal
//!
//! The TuiRunner is responsible for:
//! - Drawing the current state every loop
//! - Dispatching events to App for handling

use std::time::Duration;

use eyre::Result;
use tracing::debug;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, tick_rate: Duration) -> Self {
        Self {
            app,
            terminal,
            event_handler: EventHandler::new(tick_rate),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: called");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state_mut(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => {}
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => self.app.handle_mouse(mouse_event),
                Event::Resize(width, height) => {
                    debug!(width, height, "TuiRunner::run: resized");
                    // Geometry is stale until the next draw
                    self.app.release_pointer();
                    self.app.state_mut().dial_geometry = None;
                }
                Event::FocusLost => self.app.release_pointer(),
            }

            if self.app.state().should_quit {
                break;
            }
        }

        debug!("TuiRunner::run: exiting");
        Ok(())
    }
}
