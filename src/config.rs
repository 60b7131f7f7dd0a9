//! Rendering options and their validating setters
//!
//! `PaginationOptions` holds every knob of a render: page counts, enable
//! flags, limits and the HTML templates of each item. Options are set
//! through an explicit schema (`OptionKey`) so that loose key/value input
//! (YAML, JSON, CLI overrides) maps onto typed fields with validation.

use crate::error::{Error, Result};
use crate::template::extract_tokens;
use crate::types::{JsonObject, JsonValue, KNOWN_TOKENS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Options
// ============================================================================

/// Complete set of rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationOptions {
    /// Markup before the whole pagination
    pub wrapper_before: String,

    /// Markup after the whole pagination
    pub wrapper_after: String,

    /// Explicit page identifiers (e.g. post IDs). Empty means pages `1..=total_pages`.
    pub pages: Vec<String>,

    /// Total number of pages (at least 1)
    pub total_pages: usize,

    /// 1-based current page, within `1..=total_pages`
    pub current_page: usize,

    /// Whether the previous page link is displayed
    pub enable_prev: bool,

    /// Whether the next page link is displayed
    pub enable_next: bool,

    /// Whether the first page link is displayed
    pub enable_first: bool,

    /// Whether the last page link is displayed
    pub enable_last: bool,

    /// Whether page number links are displayed
    pub enable_numbers: bool,

    /// Whether the "Page X of Y" text is displayed
    pub enable_current_page_text: bool,

    /// Page number links on each side of the current page.
    /// `0` shows only the current page, `-1` shows every page.
    pub number_limit: i64,

    /// Large page number links on each side of the current page (`0` = none)
    pub large_page_number_limit: usize,

    /// Distance between large page number links (at least 1)
    pub large_page_number_interval: usize,

    /// Markup before the page number links
    pub numbers_wrapper_before: String,

    /// Markup after the page number links
    pub numbers_wrapper_after: String,

    /// Previous page link. Tokens: `{URL}`
    pub prev_html: String,

    /// Next page link. Tokens: `{URL}`
    pub next_html: String,

    /// First page link. Tokens: `{URL}`
    pub first_html: String,

    /// Last page link. Tokens: `{URL}`
    pub last_html: String,

    /// Page number link. Tokens: `{URL}`, `{PAGE_NUMBER}`, `{PAGE_LABEL}`
    pub number_html: String,

    /// Current page number link. Tokens: `{URL}`, `{PAGE_NUMBER}`, `{PAGE_LABEL}`
    pub current_number_html: String,

    /// Marker between non-contiguous page numbers
    pub limiter_html: String,

    /// Current page text. Tokens: `{CURRENT_PAGE}`, `{TOTAL_PAGES}`
    pub current_page_html: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            wrapper_before: r#"<div class="paging">"#.to_string(),
            wrapper_after: "</div>".to_string(),
            pages: Vec::new(),
            total_pages: 1,
            current_page: 1,
            enable_prev: true,
            enable_next: true,
            enable_first: false,
            enable_last: false,
            enable_numbers: false,
            enable_current_page_text: false,
            number_limit: -1,
            large_page_number_limit: 0,
            large_page_number_interval: 10,
            numbers_wrapper_before: "<ul>".to_string(),
            numbers_wrapper_after: "</ul>".to_string(),
            prev_html: r#"<a href="{URL}" class="paging-prev"></a>"#.to_string(),
            next_html: r#"<a href="{URL}" class="paging-next"></a>"#.to_string(),
            first_html: r#"<a href="{URL}" class="paging-first"></a>"#.to_string(),
            last_html: r#"<a href="{URL}" class="paging-last"></a>"#.to_string(),
            number_html: r#"<li><a href="{URL}">{PAGE_NUMBER}</a></li>"#.to_string(),
            current_number_html: r#"<li class="current"><a href="{URL}">{PAGE_NUMBER}</a></li>"#
                .to_string(),
            limiter_html: r#"<li class="paging-spacer">...</li>"#.to_string(),
            current_page_html:
                r#"<span class="paging-label">Page {CURRENT_PAGE} of {TOTAL_PAGES}</span>"#
                    .to_string(),
        }
    }
}

impl PaginationOptions {
    /// Create options with the library defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create default options merged with loose overrides
    pub fn from_map(overrides: &JsonObject) -> Result<Self> {
        let mut options = Self::default();
        options.apply(overrides)?;
        Ok(options)
    }

    /// Apply loose key/value overrides through the option schema
    ///
    /// Keys are applied in schema order (`pages`, `total_pages`,
    /// `current_page`, then the rest) regardless of map order, so the
    /// current page is clamped against the final page count. Unknown keys
    /// are ignored. Returns the number of options applied.
    pub fn apply(&mut self, overrides: &JsonObject) -> Result<usize> {
        for key in overrides.keys() {
            if OptionKey::from_name(key).is_none() {
                tracing::debug!("Ignoring unknown pagination option '{}'", key);
            }
        }

        let has_pages = match overrides.get(OptionKey::Pages.name()) {
            None | Some(JsonValue::Null) => false,
            Some(JsonValue::Array(items)) => !items.is_empty(),
            Some(_) => true,
        };

        let mut applied = 0;
        for key in OptionKey::ALL {
            if key == OptionKey::TotalPages && has_pages {
                // Explicit pages already fixed the page count
                continue;
            }
            if let Some(value) = overrides.get(key.name()) {
                self.set(key, value)?;
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Set a single option from a loose value
    pub fn set(&mut self, key: OptionKey, value: &JsonValue) -> Result<()> {
        match key {
            OptionKey::Pages => self.set_pages(coerce_pages(key, value)?),
            OptionKey::TotalPages => self.set_total_pages(coerce_int(key, value)?),
            OptionKey::CurrentPage => self.set_current_page(coerce_int(key, value)?),
            OptionKey::WrapperBefore => self.wrapper_before = coerce_string(key, value)?,
            OptionKey::WrapperAfter => self.wrapper_after = coerce_string(key, value)?,
            OptionKey::EnablePrev => self.enable_prev = coerce_bool(key, value)?,
            OptionKey::EnableNext => self.enable_next = coerce_bool(key, value)?,
            OptionKey::EnableFirst => self.enable_first = coerce_bool(key, value)?,
            OptionKey::EnableLast => self.enable_last = coerce_bool(key, value)?,
            OptionKey::EnableNumbers => self.enable_numbers = coerce_bool(key, value)?,
            OptionKey::EnableCurrentPageText => {
                self.enable_current_page_text = coerce_bool(key, value)?;
            }
            OptionKey::NumberLimit => self.set_number_limit(coerce_int(key, value)?)?,
            OptionKey::LargePageNumberLimit => {
                self.set_large_page_number_limit(coerce_int(key, value)?);
            }
            OptionKey::LargePageNumberInterval => {
                self.set_large_page_number_interval(coerce_int(key, value)?);
            }
            OptionKey::NumbersWrapperBefore => {
                self.numbers_wrapper_before = coerce_string(key, value)?;
            }
            OptionKey::NumbersWrapperAfter => {
                self.numbers_wrapper_after = coerce_string(key, value)?;
            }
            OptionKey::PrevHtml => self.prev_html = coerce_string(key, value)?,
            OptionKey::NextHtml => self.next_html = coerce_string(key, value)?,
            OptionKey::FirstHtml => self.first_html = coerce_string(key, value)?,
            OptionKey::LastHtml => self.last_html = coerce_string(key, value)?,
            OptionKey::NumberHtml => self.number_html = coerce_string(key, value)?,
            OptionKey::CurrentNumberHtml => self.current_number_html = coerce_string(key, value)?,
            OptionKey::LimiterHtml => self.limiter_html = coerce_string(key, value)?,
            OptionKey::CurrentPageHtml => self.current_page_html = coerce_string(key, value)?,
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Validating setters
    // ------------------------------------------------------------------------

    /// Use explicit page identifiers; the page count follows the list length
    pub fn set_pages(&mut self, pages: Vec<String>) {
        self.total_pages = pages.len().max(1);
        self.pages = pages;
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Use sequential pages `1..=total_pages`; values below 1 become 1
    pub fn set_total_pages(&mut self, total_pages: i64) {
        self.total_pages = usize::try_from(total_pages.max(1)).unwrap_or(usize::MAX);
        self.pages.clear();
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }

    /// Set the 1-based current page, clamped into `1..=total_pages`
    pub fn set_current_page(&mut self, current_page: i64) {
        let total = self.total_pages();
        let page = usize::try_from(current_page.max(1)).unwrap_or(usize::MAX);
        self.current_page = page.min(total);
    }

    /// Set the number limit; anything below `-1` is rejected
    pub fn set_number_limit(&mut self, number_limit: i64) -> Result<()> {
        check_number_limit(number_limit)?;
        self.number_limit = number_limit;
        Ok(())
    }

    /// Set the large page number limit (negative values are made positive)
    pub fn set_large_page_number_limit(&mut self, limit: i64) {
        self.large_page_number_limit = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
    }

    /// Set the large page number interval (made positive, at least 1)
    pub fn set_large_page_number_interval(&mut self, interval: i64) {
        let interval = usize::try_from(interval.unsigned_abs()).unwrap_or(usize::MAX);
        self.large_page_number_interval = interval.max(1);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Total number of pages, derived from `pages` when it is set
    pub fn total_pages(&self) -> usize {
        if self.pages.is_empty() {
            self.total_pages.max(1)
        } else {
            self.pages.len()
        }
    }

    /// 0-based index of the current page
    pub fn current_page_index(&self) -> usize {
        self.current_page.clamp(1, self.total_pages()) - 1
    }

    /// Display label of a page: its identifier, or its 1-based number
    pub fn page_label(&self, page_index: usize) -> String {
        self.pages
            .get(page_index)
            .cloned()
            .unwrap_or_else(|| (page_index + 1).to_string())
    }

    /// Explicit identifier of a page, if `pages` is set
    pub fn page_id(&self, page_index: usize) -> Option<&str> {
        self.pages.get(page_index).map(String::as_str)
    }

    /// Return a copy with every invariant enforced
    ///
    /// Page counts and the current page are clamped, the interval is
    /// raised to 1. A number limit below `-1` is a configuration error.
    pub fn normalized(&self) -> Result<Self> {
        check_number_limit(self.number_limit)?;

        let mut options = self.clone();
        options.total_pages = options.total_pages();
        options.current_page = options.current_page.clamp(1, options.total_pages);
        options.large_page_number_interval = options.large_page_number_interval.max(1);
        Ok(options)
    }

    /// Item templates keyed by their option
    pub fn templates(&self) -> [(OptionKey, &str); 8] {
        [
            (OptionKey::PrevHtml, self.prev_html.as_str()),
            (OptionKey::NextHtml, self.next_html.as_str()),
            (OptionKey::FirstHtml, self.first_html.as_str()),
            (OptionKey::LastHtml, self.last_html.as_str()),
            (OptionKey::NumberHtml, self.number_html.as_str()),
            (OptionKey::CurrentNumberHtml, self.current_number_html.as_str()),
            (OptionKey::LimiterHtml, self.limiter_html.as_str()),
            (OptionKey::CurrentPageHtml, self.current_page_html.as_str()),
        ]
    }

    /// Describe template tokens that no item will ever substitute
    pub fn template_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (key, template) in self.templates() {
            for token in extract_tokens(template) {
                if !KNOWN_TOKENS.contains(&token.as_str()) {
                    warnings.push(format!("{key}: unknown token {{{token}}}"));
                }
            }
        }
        warnings
    }
}

fn check_number_limit(number_limit: i64) -> Result<()> {
    if number_limit < -1 {
        return Err(Error::invalid_value(
            OptionKey::NumberLimit.name(),
            format!("must be -1 (unlimited) or greater, got {number_limit}"),
        ));
    }
    Ok(())
}

// ============================================================================
// Option Schema
// ============================================================================

/// Every recognised option name, in the order they are applied
///
/// Variants map one-to-one onto the fields of [`PaginationOptions`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Pages,
    TotalPages,
    CurrentPage,
    WrapperBefore,
    WrapperAfter,
    EnablePrev,
    EnableNext,
    EnableFirst,
    EnableLast,
    EnableNumbers,
    EnableCurrentPageText,
    NumberLimit,
    LargePageNumberLimit,
    LargePageNumberInterval,
    NumbersWrapperBefore,
    NumbersWrapperAfter,
    PrevHtml,
    NextHtml,
    FirstHtml,
    LastHtml,
    NumberHtml,
    CurrentNumberHtml,
    LimiterHtml,
    CurrentPageHtml,
}

impl OptionKey {
    /// All keys in application order
    pub const ALL: [OptionKey; 24] = [
        OptionKey::Pages,
        OptionKey::TotalPages,
        OptionKey::CurrentPage,
        OptionKey::WrapperBefore,
        OptionKey::WrapperAfter,
        OptionKey::EnablePrev,
        OptionKey::EnableNext,
        OptionKey::EnableFirst,
        OptionKey::EnableLast,
        OptionKey::EnableNumbers,
        OptionKey::EnableCurrentPageText,
        OptionKey::NumberLimit,
        OptionKey::LargePageNumberLimit,
        OptionKey::LargePageNumberInterval,
        OptionKey::NumbersWrapperBefore,
        OptionKey::NumbersWrapperAfter,
        OptionKey::PrevHtml,
        OptionKey::NextHtml,
        OptionKey::FirstHtml,
        OptionKey::LastHtml,
        OptionKey::NumberHtml,
        OptionKey::CurrentNumberHtml,
        OptionKey::LimiterHtml,
        OptionKey::CurrentPageHtml,
    ];

    /// Option name as used in config files
    pub fn name(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::TotalPages => "total_pages",
            Self::CurrentPage => "current_page",
            Self::WrapperBefore => "wrapper_before",
            Self::WrapperAfter => "wrapper_after",
            Self::EnablePrev => "enable_prev",
            Self::EnableNext => "enable_next",
            Self::EnableFirst => "enable_first",
            Self::EnableLast => "enable_last",
            Self::EnableNumbers => "enable_numbers",
            Self::EnableCurrentPageText => "enable_current_page_text",
            Self::NumberLimit => "number_limit",
            Self::LargePageNumberLimit => "large_page_number_limit",
            Self::LargePageNumberInterval => "large_page_number_interval",
            Self::NumbersWrapperBefore => "numbers_wrapper_before",
            Self::NumbersWrapperAfter => "numbers_wrapper_after",
            Self::PrevHtml => "prev_html",
            Self::NextHtml => "next_html",
            Self::FirstHtml => "first_html",
            Self::LastHtml => "last_html",
            Self::NumberHtml => "number_html",
            Self::CurrentNumberHtml => "current_number_html",
            Self::LimiterHtml => "limiter_html",
            Self::CurrentPageHtml => "current_page_html",
        }
    }

    /// Look up a key by its option name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::config(format!("Unknown option: {s}")))
    }
}

// ============================================================================
// Value Coercion
// ============================================================================

fn type_error(key: OptionKey, expected: &str, value: &JsonValue) -> Error {
    Error::invalid_value(key.name(), format!("expected {expected}, got {value}"))
}

fn coerce_string(key: OptionKey, value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Null => Ok(String::new()),
        _ => Err(type_error(key, "a string", value)),
    }
}

fn coerce_bool(key: OptionKey, value: &JsonValue) -> Result<bool> {
    match value {
        JsonValue::Bool(b) => Ok(*b),
        JsonValue::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        JsonValue::Null => Ok(false),
        JsonValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" | "off" => Ok(false),
            "1" | "true" | "yes" | "on" => Ok(true),
            _ => Err(type_error(key, "a boolean", value)),
        },
        _ => Err(type_error(key, "a boolean", value)),
    }
}

fn coerce_int(key: OptionKey, value: &JsonValue) -> Result<i64> {
    match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .ok_or_else(|| type_error(key, "an integer", value)),
        JsonValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| type_error(key, "an integer", value)),
        JsonValue::Bool(b) => Ok(i64::from(*b)),
        _ => Err(type_error(key, "an integer", value)),
    }
}

fn coerce_pages(key: OptionKey, value: &JsonValue) -> Result<Vec<String>> {
    match value {
        JsonValue::Array(items) => items.iter().map(|v| coerce_page_id(key, v)).collect(),
        JsonValue::Null => Ok(Vec::new()),
        // A single identifier is treated as a one-page list
        _ => Ok(vec![coerce_page_id(key, value)?]),
    }
}

fn coerce_page_id(key: OptionKey, value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        _ => Err(type_error(key, "a page identifier", value)),
    }
}
