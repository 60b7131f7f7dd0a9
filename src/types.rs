//! Common types used throughout Solidafy Pager
//!
//! This module contains shared type definitions, type aliases,
//! and the token names understood by item templates.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Token name to replacement value
pub type TokenMap = HashMap<String, String>;

// ============================================================================
// Template Tokens
// ============================================================================

/// Link target of the item
pub const TOKEN_URL: &str = "URL";

/// 1-based page number of a number item
pub const TOKEN_PAGE_NUMBER: &str = "PAGE_NUMBER";

/// Display label of a number item (page identifier or page number)
pub const TOKEN_PAGE_LABEL: &str = "PAGE_LABEL";

/// 1-based current page number
pub const TOKEN_CURRENT_PAGE: &str = "CURRENT_PAGE";

/// Total number of pages
pub const TOKEN_TOTAL_PAGES: &str = "TOTAL_PAGES";

/// All tokens any item template may reference
pub const KNOWN_TOKENS: [&str; 5] = [
    TOKEN_URL,
    TOKEN_PAGE_NUMBER,
    TOKEN_PAGE_LABEL,
    TOKEN_CURRENT_PAGE,
    TOKEN_TOTAL_PAGES,
];

// ============================================================================
// Item Kind
// ============================================================================

/// Kind of a renderable pagination item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Link to the previous page
    Prev,
    /// Link to the first page
    First,
    /// Link to a page that is not the current one
    Number,
    /// The current page in the number sequence
    CurrentNumber,
    /// "..." marker between non-contiguous page numbers
    Limiter,
    /// Link to the last page
    Last,
    /// Link to the next page
    Next,
    /// "Page X of Y" text
    CurrentPageText,
}

impl ItemKind {
    /// Whether this item belongs inside the numbers wrapper
    pub fn is_number_sequence(self) -> bool {
        matches!(self, Self::Number | Self::CurrentNumber | Self::Limiter)
    }

    /// Snake case name, matching the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::First => "first",
            Self::Number => "number",
            Self::CurrentNumber => "current_number",
            Self::Limiter => "limiter",
            Self::Last => "last",
            Self::Next => "next",
            Self::CurrentPageText => "current_page_text",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
