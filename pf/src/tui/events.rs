//! TUI event handling
//!
//! Terminal events are polled on a blocking thread and forwarded over a
//! tokio channel, so the runner can await them.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent};
use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Mouse movement, drag, click or wheel
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Terminal window lost focus
    FocusLost,
    /// Tick (periodic refresh)
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        debug!(?tick_rate, "EventHandler::new: called");
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || poll_terminal(&tx, tick_rate));
        Self { rx }
    }

    /// Get the next event (async)
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}

/// Forward terminal events until the receiver is dropped
///
/// A poll that times out becomes a `Tick`.
fn poll_terminal(tx: &mpsc::UnboundedSender<Event>, tick_rate: Duration) {
    debug!("poll_terminal: started");
    loop {
        let next = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(raw) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Err(e) => {
                    trace!(error = %e, "poll_terminal: read failed");
                    continue;
                }
            },
            _ => Event::Tick,
        };
        if tx.send(next).is_err() {
            break;
        }
    }
    debug!("poll_terminal: receiver dropped, exiting");
}

/// Map a crossterm event to one the UI handles
///
/// Key releases (reported by some terminals), focus gained and paste are dropped.
fn translate(raw: event::Event) -> Option<Event> {
    match raw {
        event::Event::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        event::Event::Mouse(mouse) => Some(Event::Mouse(mouse)),
        event::Event::Resize(w, h) => {
            debug!(w, h, "translate: resize");
            Some(Event::Resize(w, h))
        }
        event::Event::FocusLost => Some(Event::FocusLost),
        other => {
            trace!(?other, "translate: skipped");
            None
        }
    }
}
