//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs, StyleKind, UrlArgs};
use crate::collection::Collection;
use crate::config::{OptionKey, PaginationOptions};
use crate::error::{Error, Result};
use crate::loader::{load_options, load_preset, parse_override, preset_info, validate_options};
use crate::pager::Pager;
use crate::pagination::NeighborResolver;
use crate::render::RenderOutput;
use crate::style::{PageIdStyle, PaginationStyle, PathSegmentStyle, QueryArgStyle};
use crate::types::JsonObject;
use serde::Serialize;
use serde_json::json;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render { page, url } => self.render(page, url),
            Commands::Resolve { page } => self.resolve(page),
            Commands::Presets => self.presets(),
            Commands::Validate { file } => self.validate(file),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn render(&self, page: &PageArgs, url: &UrlArgs) -> Result<()> {
        let options = build_options(page)?;
        let style = build_style(url)?;
        let pager = Pager::new(options, style)?;
        let output = pager.render()?;

        log_failures(&output);
        match self.cli.format {
            OutputFormat::Text => println!("{}", output.html),
            OutputFormat::Json => self.output_message(&output),
        }
        Ok(())
    }

    fn resolve(&self, page: &PageArgs) -> Result<()> {
        let options = build_options(page)?.normalized()?;
        let collection = Collection::build(&options, &NeighborResolver::new())?;

        match self.cli.format {
            OutputFormat::Text => {
                for item in &collection {
                    match (&item.label, item.page_number()) {
                        (Some(label), _) => println!("{:<20} {}", item.kind, label),
                        (None, Some(number)) => println!("{:<20} -> {}", item.kind, number),
                        (None, None) => println!("{}", item.kind),
                    }
                }
            }
            OutputFormat::Json => self.output_message(&json!({
                "current_page": collection.current_page_index() + 1,
                "total_pages": collection.total_pages(),
                "items": collection.items(),
            })),
        }
        Ok(())
    }

    fn presets(&self) -> Result<()> {
        let presets = preset_info()?;
        match self.cli.format {
            OutputFormat::Text => {
                for preset in &presets {
                    println!("{:<10} {}", preset.name, preset.description);
                }
            }
            OutputFormat::Json => self.output_message(&presets),
        }
        Ok(())
    }

    fn validate(&self, file: &Path) -> Result<()> {
        let (options, warnings) = validate_file(file)?;

        match self.cli.format {
            OutputFormat::Text => {
                println!("Options file is valid: {}", file.display());
                for warning in &warnings {
                    println!("  warning: {warning}");
                }
                let yaml = serde_yaml::to_string(&options).map_err(Error::YamlSerialize)?;
                print!("{yaml}");
            }
            OutputFormat::Json => self.output_message(&json!({
                "valid": true,
                "warnings": warnings,
                "options": options,
            })),
        }
        Ok(())
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn output_message<T: Serialize + ?Sized>(&self, msg: &T) {
        println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
    }
}

/// Build options from an options file or preset, then flags and overrides
///
/// `--total-pages`, `--current-page` and every `--set` override are merged
/// into one map and applied together, so the current page is clamped
/// against the final page count. The flags win over `--set` for the same key.
fn build_options(args: &PageArgs) -> Result<PaginationOptions> {
    let mut options = match (&args.options, &args.preset) {
        (Some(path), _) => load_options(path)?,
        (None, Some(name)) => load_preset(name)?,
        (None, None) => PaginationOptions::default(),
    };

    let mut overrides = args
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<JsonObject>>()?;
    if let Some(total) = args.total_pages {
        overrides.insert(OptionKey::TotalPages.name().to_string(), json!(total));
    }
    if let Some(current) = args.current_page {
        overrides.insert(OptionKey::CurrentPage.name().to_string(), json!(current));
    }

    if !overrides.is_empty() {
        let applied = options.apply(&overrides)?;
        tracing::debug!("Applied {} of {} overrides", applied, overrides.len());
    }

    validate_options(&options)?;
    Ok(options)
}

/// Load an options file and collect its template warnings (logged once)
fn validate_file(file: &Path) -> Result<(PaginationOptions, Vec<String>)> {
    let options = load_options(file)?;
    let warnings = validate_options(&options)?;
    Ok((options, warnings))
}

fn build_style(args: &UrlArgs) -> Result<Box<dyn PaginationStyle>> {
    Ok(match args.style {
        StyleKind::Query => Box::new(QueryArgStyle::new(&args.base_url, args.param.as_str())?),
        StyleKind::Path => Box::new(PathSegmentStyle::new(
            &args.base_url,
            args.segment.as_str(),
        )?),
        StyleKind::Ids => {
            let template = args
                .url_template
                .as_deref()
                .ok_or_else(|| Error::config("--style ids requires --url-template"))?;
            Box::new(PageIdStyle::new(template))
        }
    })
}

fn log_failures(output: &RenderOutput) {
    for failure in &output.failures {
        tracing::warn!(
            "Item {} ({}) rendered empty: {}",
            failure.position,
            failure.kind,
            failure.message
        );
    }
}
