//! Portfolio - a personal portfolio in the terminal
//!
//! Loads portfolio content from YAML and presents it either as plain text
//! or as an interactive terminal UI. The career track section uses the
//! [`careertrack`] crate for tenure labels and the role-history dial.

pub mod cli;
pub mod config;
pub mod content;
pub mod render;
pub mod section;
pub mod tui;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use content::{ContentError, Experience, Portfolio};
pub use section::Section;
