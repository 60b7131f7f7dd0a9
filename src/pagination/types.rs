//! Page selection types and traits
//!
//! Defines the core abstractions shared by every page set resolver.

use crate::config::PaginationOptions;
use crate::error::{Error, Result};
use serde::Serialize;

/// How many page number links surround the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLimit {
    /// Every page is shown
    #[default]
    Unlimited,
    /// Up to N pages on each side of the current page (0 = current only)
    Around(usize),
}

impl TryFrom<i64> for NumberLimit {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Self::Unlimited),
            n if n >= 0 => Ok(Self::Around(usize::try_from(n).unwrap_or(usize::MAX))),
            n => Err(Error::invalid_value(
                "number_limit",
                format!("must be -1 (unlimited) or greater, got {n}"),
            )),
        }
    }
}

impl From<NumberLimit> for i64 {
    fn from(limit: NumberLimit) -> Self {
        match limit {
            NumberLimit::Unlimited => -1,
            NumberLimit::Around(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

/// Inputs of a page set resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveParams {
    /// 0-based current page, within `0..total_pages`
    pub current_page_index: usize,
    /// Number of pages (at least 1)
    pub total_pages: usize,
    /// Neighbouring page links to show
    pub number_limit: NumberLimit,
    /// Large page number links on each side (0 = none)
    pub large_limit: usize,
    /// Distance between large page number links
    pub large_interval: usize,
}

impl ResolveParams {
    /// Create params showing every page
    pub fn new(current_page_index: usize, total_pages: usize) -> Self {
        Self {
            current_page_index,
            total_pages,
            number_limit: NumberLimit::Unlimited,
            large_limit: 0,
            large_interval: 10,
        }
    }

    /// Set the number limit
    #[must_use]
    pub fn with_number_limit(mut self, number_limit: NumberLimit) -> Self {
        self.number_limit = number_limit;
        self
    }

    /// Set large page number links
    #[must_use]
    pub fn with_large_pages(mut self, limit: usize, interval: usize) -> Self {
        self.large_limit = limit;
        self.large_interval = interval;
        self
    }

    /// Derive params from rendering options
    pub fn from_options(options: &PaginationOptions) -> Result<Self> {
        Ok(Self {
            current_page_index: options.current_page_index(),
            total_pages: options.total_pages(),
            number_limit: NumberLimit::try_from(options.number_limit)?,
            large_limit: options.large_page_number_limit,
            large_interval: options.large_page_number_interval.max(1),
        })
    }
}

/// One entry of a resolved page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page_index", rename_all = "snake_case")]
pub enum ResolvedPage {
    /// A page other than the current one
    Number(usize),
    /// The current page
    Current(usize),
    /// Gap marker between non-contiguous pages
    Limiter,
}

impl ResolvedPage {
    /// Page index, or `None` for limiters
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Number(i) | Self::Current(i) => Some(*i),
            Self::Limiter => None,
        }
    }

    /// Check if this is the current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current(_))
    }

    /// Check if this is a limiter
    pub fn is_limiter(&self) -> bool {
        matches!(self, Self::Limiter)
    }
}

/// Strategy choosing which page numbers to display
pub trait PageSetResolver: Send + Sync {
    /// Resolve the ordered page sequence, limiters included
    fn resolve(&self, params: &ResolveParams) -> Vec<ResolvedPage>;
}
