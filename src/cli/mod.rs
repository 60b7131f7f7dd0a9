//! CLI module
//!
//! Command-line interface for rendering paginations.
//!
//! # Commands
//!
//! - `render` - Render pagination HTML
//! - `resolve` - Show the items a render would produce
//! - `presets` - List built-in presets
//! - `validate` - Check an options file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs, StyleKind, UrlArgs};
pub use runner::Runner;
