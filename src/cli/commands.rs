//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Pager CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render pagination HTML
    Render {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        url: UrlArgs,
    },

    /// Show the items a render would produce, without URLs
    Resolve {
        #[command(flatten)]
        page: PageArgs,
    },

    /// List built-in presets
    Presets,

    /// Validate an options file and show the effective options
    Validate {
        /// Options file (YAML or JSON)
        file: PathBuf,
    },
}

/// Where the options come from
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Options file (YAML or JSON)
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Built-in preset to start from (ignored when --options is given)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Total number of pages
    #[arg(short = 't', long)]
    pub total_pages: Option<i64>,

    /// Current page (1-based)
    #[arg(short = 'c', long)]
    pub current_page: Option<i64>,

    /// Option override, e.g. --set number_limit=2 (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// How page URLs are built
#[derive(Args, Debug, Clone)]
pub struct UrlArgs {
    /// URL style
    #[arg(long, default_value = "query")]
    pub style: StyleKind,

    /// Base URL for the query and path styles
    #[arg(short, long, default_value = "https://example.com/")]
    pub base_url: String,

    /// Query argument name (query style)
    #[arg(long, default_value = "page")]
    pub param: String,

    /// Path segment before the page number (path style)
    #[arg(long, default_value = "page")]
    pub segment: String,

    /// URL template with {PAGE_ID} / {PAGE_NUMBER} (ids style)
    #[arg(long)]
    pub url_template: Option<String>,
}

/// URL style
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleKind {
    /// `?page=N`
    Query,
    /// `/page/N/`
    Path,
    /// URL template filled from page identifiers
    Ids,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain HTML / human-readable text
    Text,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "solidafy-pager",
            "render",
            "--preset",
            "full",
            "-t",
            "40",
            "-c",
            "7",
            "--set",
            "number_limit=1",
            "--set",
            "enable_last=false",
            "--style",
            "path",
            "--base-url",
            "https://example.com/blog/",
        ])
        .unwrap();

        match cli.command {
            Commands::Render { page, url } => {
                assert_eq!(page.preset.as_deref(), Some("full"));
                assert_eq!(page.total_pages, Some(40));
                assert_eq!(page.current_page, Some(7));
                assert_eq!(page.overrides, vec!["number_limit=1", "enable_last=false"]);
                assert_eq!(url.style, StyleKind::Path);
                assert_eq!(url.segment, "page");
            }
            other => panic!("Expected Render, got {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "solidafy-pager",
            "resolve",
            "-o",
            "pagination.yaml",
            "-s",
            "number_limit=1",
            "-s",
            "enable_first=true",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve { page } => {
                assert_eq!(page.options, Some(PathBuf::from("pagination.yaml")));
                assert_eq!(page.overrides, vec!["number_limit=1", "enable_first=true"]);
            }
            other => panic!("Expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["solidafy-pager", "presets", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Presets));
    }
}
