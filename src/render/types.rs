//! Rendering types and traits

use crate::collection::PageItem;
use crate::config::PaginationOptions;
use crate::error::Result;
use crate::style::PaginationStyle;
use crate::types::ItemKind;
use serde::Serialize;

/// Everything an item needs to render itself
pub struct RenderContext<'a> {
    /// Normalized options of this render
    pub options: &'a PaginationOptions,
    /// URL strategy
    pub style: &'a dyn PaginationStyle,
    /// 0-based current page
    pub current_page_index: usize,
    /// Total number of pages
    pub total_pages: usize,
}

/// Renders a single item to HTML
pub trait ItemRenderer: Send + Sync {
    /// HTML of the item; errors are isolated to this item
    fn render_item(&self, item: &PageItem, ctx: &RenderContext<'_>) -> Result<String>;
}

/// Final pass over the rendered HTML before it is displayed
pub trait HtmlSanitizer: Send + Sync {
    /// Return the sanitized HTML
    fn sanitize(&self, html: &str) -> String;
}

impl<F> HtmlSanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, html: &str) -> String {
        self(html)
    }
}

/// Sanitizer that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl HtmlSanitizer for Passthrough {
    fn sanitize(&self, html: &str) -> String {
        html.to_string()
    }
}

/// An item that failed to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    /// Position of the item in the collection
    pub position: usize,
    /// Kind of the failed item
    pub kind: ItemKind,
    /// Page the item referred to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<usize>,
    /// Error description
    pub message: String,
}

/// Result of a render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    /// Sanitized HTML
    pub html: String,
    /// Items that rendered as empty strings because of an error
    pub failures: Vec<ItemFailure>,
}

impl RenderOutput {
    /// Check if every item rendered
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
