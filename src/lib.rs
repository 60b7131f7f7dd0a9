// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Pager
//!
//! Pagination HTML rendering: decide which page links to show for a
//! position in a paged sequence, then render them through configurable
//! HTML templates.
//!
//! ## Features
//!
//! - **Page Set Resolution**: Neighbors of the current page, far "large page"
//!   jumps at a fixed interval, and limiter markers for every gap
//! - **Template Rendering**: Every item is a `{TOKEN}` HTML template
//! - **URL Styles**: Query argument, path segment, page identifiers or a callback
//! - **Hooks**: Per-item and whole-output filters plus a final sanitizer
//! - **Presets**: Built-in option sets loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_pager::{Pager, PaginationOptions, QueryArgStyle, Result};
//!
//! fn main() -> Result<()> {
//!     let mut options = PaginationOptions::new();
//!     options.set_total_pages(20);
//!     options.set_current_page(7);
//!     options.enable_numbers = true;
//!
//!     let style = QueryArgStyle::new("https://example.com/blog", "page")?;
//!     let html = Pager::new(options, style)?.to_html()?;
//!     println!("{html}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            Pager                             │
//! │   options + resolver + style + renderer  →  RenderOutput     │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┼──────────────┬────────────────┐
//! │  Options   │   Pagination    │  Collection  │    Render      │
//! ├────────────┼─────────────────┼──────────────┼────────────────┤
//! │ Defaults   │ Neighbors       │ Prev / First │ Templates      │
//! │ YAML/JSON  │ Large pages     │ Numbers      │ URL styles     │
//! │ Presets    │ Limiters        │ Last / Next  │ Hooks          │
//! │ Validation │                 │ Page X of Y  │ Sanitizer      │
//! └────────────┴─────────────────┴──────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// `{TOKEN}` template substitution
pub mod template;

/// Rendering options
pub mod config;

/// Page set resolution
pub mod pagination;

/// Page URL styles
pub mod style;

/// Ordered pagination items
pub mod collection;

/// HTML rendering, hooks and sanitizing
pub mod render;

/// Pager entry point
pub mod pager;

/// Built-in option presets
pub mod presets;

/// YAML/JSON loader for options files
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use collection::{Collection, PageItem};
pub use config::{OptionKey, PaginationOptions};
pub use loader::{load_options, load_options_from_str, load_preset};
pub use pager::Pager;
pub use pagination::{NeighborResolver, PageSetResolver, ResolveParams, ResolvedPage};
pub use render::{RenderOutput, Renderer};
pub use style::{CallbackStyle, PageIdStyle, PaginationStyle, PathSegmentStyle, QueryArgStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
