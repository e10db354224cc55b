//! Portfolio - CLI entry point
//!
//! Prints tenure labels, renders the portfolio as text, evaluates the
//! dial, or launches the interactive UI.

use std::fs;
use std::path::PathBuf;

use careertrack::{DialSelector, Point, compute_tenure_at, pointer_angle, try_tenure_at};
use chrono::{Local, NaiveDate};
use clap::Parser;
use eyre::{Context, Result, eyre};
use serde_json::json;
use tracing::{debug, info};

use portfolio::cli::{Cli, Command, OutputFormat};
use portfolio::config::Config;
use portfolio::content::Portfolio;
use portfolio::render::render_portfolio;
use portfolio::section::Section;
use portfolio::tui;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = portfolio::cli::get_log_path();
    let log_dir = log_path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let today = Local::now().date_naive();

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Tenure { periods, at, format }) => {
            debug!(count = periods.len(), ?at, "main: matched Tenure command");
            let today = match at {
                Some(at) => parse_year_month(&at)?,
                None => today,
            };
            cmd_tenure(&periods, today, format)
        }
        Some(Command::Show { section, content }) => {
            debug!(?section, "main: matched Show command");
            let portfolio = load_content(content, &config)?;
            cmd_show(&portfolio, section, today)
        }
        Some(Command::Dial {
            entries,
            x,
            y,
            cx,
            cy,
            format,
        }) => {
            debug!(entries, x, y, cx, cy, "main: matched Dial command");
            cmd_dial(entries, Point::new(x, y), Point::new(cx, cy), format)
        }
        Some(Command::Tui { content }) => {
            debug!("main: matched Tui command");
            let portfolio = load_content(content, &config)?;
            tui::run(portfolio, today, &config.tui).await
        }
        None => {
            debug!("main: no command, launching TUI");
            let portfolio = load_content(None, &config)?;
            tui::run(portfolio, today, &config.tui).await
        }
    }
}

/// Content path priority: CLI --content > config > bundled sample
fn load_content(cli_path: Option<PathBuf>, config: &Config) -> Result<Portfolio> {
    let path = cli_path.or_else(|| config.content.path.clone());
    Portfolio::load_or_builtin(path.as_deref()).context("Failed to load portfolio content")
}

/// Parse `YYYY-MM` into the first day of that month
fn parse_year_month(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|e| eyre!("Invalid --at '{}': expected YYYY-MM ({})", text, e))
}

fn cmd_tenure(periods: &[String], today: NaiveDate, format: OutputFormat) -> Result<()> {
    debug!(count = periods.len(), %today, "cmd_tenure: called");
    match format {
        OutputFormat::Text => {
            for period in periods {
                println!("{}", compute_tenure_at(period, today));
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = periods
                .iter()
                .map(|period| match try_tenure_at(period, today) {
                    Ok(tenure) => json!({
                        "period": period,
                        "label": tenure.to_string(),
                        "years": tenure.years(),
                        "months": tenure.months(),
                        "total-months": tenure.total_months(),
                    }),
                    Err(e) => json!({
                        "period": period,
                        "label": "",
                        "error": e.to_string(),
                    }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn cmd_show(portfolio: &Portfolio, section: Option<Section>, today: NaiveDate) -> Result<()> {
    debug!(?section, "cmd_show: called");
    print!("{}", render_portfolio(portfolio, section, today));
    Ok(())
}

fn cmd_dial(entries: usize, pointer: Point, center: Point, format: OutputFormat) -> Result<()> {
    debug!(entries, "cmd_dial: called");
    let mut dial = DialSelector::new(entries).ok_or_else(|| eyre!("Dial needs at least one entry"))?;
    let angle = pointer_angle(pointer, center);
    dial.on_pointer_move(pointer, center);
    let index = dial.active_index();

    match format {
        OutputFormat::Text => {
            println!("angle: {:.1}", angle);
            println!("active: {} of {}", index + 1, dial.len());
            println!("progress: {:.0}%", dial.progress_fraction() * 100.0);
        }
        OutputFormat::Json => {
            let value = json!({
                "entries": dial.len(),
                "angle": angle,
                "active-index": index,
                "progress": dial.progress_fraction(),
                "interactive": dial.is_interactive(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
