//! URL style implementations
//!
//! Each style handles one way of addressing pages.

use super::types::{PageRef, PaginationStyle};
use crate::error::{Error, Result};
use crate::template::render_token_template;
use crate::types::TokenMap;
use regex::Regex;
use url::Url;

// ============================================================================
// Query Argument Style
// ============================================================================

/// Page number in a query argument
///
/// Common patterns:
/// - `/blog?page=2`
/// - `/search?q=rust&paged=3`
#[derive(Debug, Clone)]
pub struct QueryArgStyle {
    /// Base URL, other query arguments are preserved
    pub base: Url,
    /// Query argument name for the page number
    pub param: String,
    /// Drop the argument entirely for page 1
    pub omit_first: bool,
}

impl QueryArgStyle {
    /// Create a new query argument style
    pub fn new(base_url: &str, param: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
            param: param.into(),
            omit_first: true,
        })
    }

    /// Keep `param=1` on the first page
    #[must_use]
    pub fn keep_first(mut self) -> Self {
        self.omit_first = false;
        self
    }
}

impl PaginationStyle for QueryArgStyle {
    fn page_url(&self, page: PageRef<'_>) -> Result<String> {
        let mut url = self.base.clone();
        let retained: Vec<(String, String)> = self
            .base
            .query_pairs()
            .filter(|(k, _)| k != self.param.as_str())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.set_query(None);
        let with_page = !(self.omit_first && page.index == 0);
        if !retained.is_empty() || with_page {
            let mut pairs = url.query_pairs_mut();
            pairs.extend_pairs(retained);
            if with_page {
                pairs.append_pair(&self.param, &page.number().to_string());
            }
        }
        Ok(url.into())
    }
}

// ============================================================================
// Path Segment Style
// ============================================================================

/// Page number as a trailing path segment
///
/// Common patterns:
/// - `/blog/page/2/`
/// - `/archive/2024/p/3/`
#[derive(Debug, Clone)]
pub struct PathSegmentStyle {
    /// Base URL; an existing `/<segment>/<n>` suffix is stripped
    pub base: Url,
    /// Path segment preceding the page number
    pub segment: String,
    /// Whether generated paths end with `/`
    pub trailing_slash: bool,
    suffix: Regex,
}

impl PathSegmentStyle {
    /// Create a new path segment style
    pub fn new(base_url: &str, segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        if segment.is_empty() || segment.contains('/') {
            return Err(Error::invalid_value(
                "segment",
                format!("must be a single non-empty path segment, got '{segment}'"),
            ));
        }
        let suffix = Regex::new(&format!(r"/{}/\d+/?$", regex::escape(&segment)))
            .map_err(|e| Error::config(format!("Invalid path segment pattern: {e}")))?;

        Ok(Self {
            base: Url::parse(base_url)?,
            segment,
            trailing_slash: true,
            suffix,
        })
    }

    /// Generate paths without a trailing `/`
    #[must_use]
    pub fn without_trailing_slash(mut self) -> Self {
        self.trailing_slash = false;
        self
    }

    fn base_path(&self) -> String {
        let path = self.suffix.replace(self.base.path(), "");
        path.trim_end_matches('/').to_string()
    }
}

impl PaginationStyle for PathSegmentStyle {
    fn page_url(&self, page: PageRef<'_>) -> Result<String> {
        let base_path = self.base_path();
        let mut path = if page.index == 0 {
            base_path
        } else {
            format!("{base_path}/{}/{}", self.segment, page.number())
        };
        if self.trailing_slash || path.is_empty() {
            path.push('/');
        }

        let mut url = self.base.clone();
        url.set_path(&path);
        Ok(url.into())
    }
}

// ============================================================================
// Page ID Style
// ============================================================================

/// Token replaced by the page identifier in a [`PageIdStyle`] template
pub const TOKEN_PAGE_ID: &str = "PAGE_ID";

/// URL template filled from explicit page identifiers
///
/// Template tokens: `{PAGE_ID}` and `{PAGE_NUMBER}`, e.g.
/// `https://example.com/?p={PAGE_ID}`.
#[derive(Debug, Clone)]
pub struct PageIdStyle {
    /// URL template
    pub template: String,
}

impl PageIdStyle {
    /// Create a new page id style
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl PaginationStyle for PageIdStyle {
    fn page_url(&self, page: PageRef<'_>) -> Result<String> {
        let mut tokens = TokenMap::new();
        tokens.insert(
            crate::types::TOKEN_PAGE_NUMBER.to_string(),
            page.number().to_string(),
        );
        match page.id {
            Some(id) => {
                tokens.insert(TOKEN_PAGE_ID.to_string(), id.to_string());
            }
            None if self.template.contains("{PAGE_ID}") => {
                return Err(Error::page_url(page.index, "page has no identifier"));
            }
            None => {}
        }
        Ok(render_token_template(&self.template, &tokens))
    }
}

// ============================================================================
// Callback Style
// ============================================================================

/// URL produced by an application-supplied `get_page_url` callback
pub struct CallbackStyle<F> {
    callback: F,
}

impl<F> CallbackStyle<F>
where
    F: Fn(usize) -> Result<String> + Send + Sync,
{
    /// Wrap a callback taking the 0-based page index
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> std::fmt::Debug for CallbackStyle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackStyle").finish_non_exhaustive()
    }
}

impl<F> PaginationStyle for CallbackStyle<F>
where
    F: Fn(usize) -> Result<String> + Send + Sync,
{
    fn page_url(&self, page: PageRef<'_>) -> Result<String> {
        (self.callback)(page.index)
    }
}
