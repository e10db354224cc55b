//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::section::Section;

/// Portfolio - a personal portfolio in the terminal
#[derive(Parser)]
#[command(
    name = "pf",
    about = "Personal portfolio with an interactive career-track dial",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to the interactive UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print tenure labels for period strings
    Tenure {
        /// Periods such as "Feb 2022 – Nov 2024" or "2017 - Present"
        #[arg(required = true)]
        periods: Vec<String>,

        /// Evaluate "Present" at this month (YYYY-MM) instead of today
        #[arg(long, value_name = "YYYY-MM")]
        at: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the portfolio as text
    Show {
        /// Only print this section (about, education, skills, experience, projects, contact)
        #[arg(short, long)]
        section: Option<Section>,

        /// Portfolio content file (overrides config)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Evaluate the timeline dial for a pointer position
    Dial {
        /// Number of entries on the dial
        #[arg(short = 'n', long)]
        entries: usize,

        /// Pointer x
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y (grows downward)
        #[arg(short, long, allow_negative_numbers = true)]
        y: f64,

        /// Dial center x
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        cx: f64,

        /// Dial center y
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        cy: f64,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Browse the portfolio interactively (default)
    Tui {
        /// Portfolio content file (overrides config)
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

/// Output format for tenure/dial commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Valid formats: text, json", s)),
        }
    }
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
        .join("logs")
        .join("portfolio.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_tenure_command() {
        let cli = Cli::try_parse_from(["pf", "tenure", "2017 - 2020", "--at", "2025-01", "-f", "json"]).unwrap();
        match cli.command {
            Some(Command::Tenure { periods, at, format }) => {
                assert_eq!(periods, vec!["2017 - 2020".to_string()]);
                assert_eq!(at.as_deref(), Some("2025-01"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_show_section() {
        let cli = Cli::try_parse_from(["pf", "show", "--section", "experience"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Show {
                section: Some(Section::Experience),
                ..
            })
        ));
        assert!(Cli::try_parse_from(["pf", "show", "--section", "blog"]).is_err());
    }

    #[test]
    fn test_parse_dial_negative_coordinates() {
        let cli = Cli::try_parse_from(["pf", "dial", "-n", "3", "-x", "-4", "-y", "-2.5"]).unwrap();
        match cli.command {
            Some(Command::Dial { entries, x, y, cx, cy, .. }) => {
                assert_eq!(entries, 3);
                assert_eq!((x, y, cx, cy), (-4.0, -2.5, 0.0, 0.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["pf"]).unwrap();
        assert!(cli.command.is_none());
    }
}
