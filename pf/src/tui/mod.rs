//! Terminal User Interface for the portfolio
//!
//! One screen per section with in-page jumps between them. The career
//! track shows a mouse-driven dial over each company's role history.

mod app;
mod events;
mod runner;
pub mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, DialGeometry, InteractionMode};

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::TuiConfig;
use crate::content::Portfolio;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, DisableFocusChange)?;
    Ok(())
}

/// Run the TUI until the user quits
pub async fn run(portfolio: Portfolio, today: NaiveDate, config: &TuiConfig) -> Result<()> {
    let terminal = init()?;

    // Use a guard to ensure terminal is restored even on early return/error
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = restore();
        }
    }
    let _guard = TerminalGuard;

    let app = App::new(portfolio, today, config.cell_aspect);
    let mut runner = TuiRunner::new(terminal, app, Duration::from_millis(config.tick_rate_ms.max(1)));
    runner.run().await
}
