//! Default page set resolution
//!
//! Shows the current page, its neighbours within the number limit, and
//! large page number links at fixed strides from the current page.

use super::types::{NumberLimit, PageSetResolver, ResolveParams, ResolvedPage};
use std::collections::BTreeSet;

/// Resolver showing neighbours of the current page plus large page jumps
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborResolver;

impl NeighborResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }
}

impl PageSetResolver for NeighborResolver {
    fn resolve(&self, params: &ResolveParams) -> Vec<ResolvedPage> {
        resolve(params)
    }
}

/// Compute the page sequence for the given params
///
/// The result is strictly increasing by page index, holds no duplicates,
/// and has exactly one [`ResolvedPage::Limiter`] wherever two consecutive
/// indices differ by more than one. Out-of-range inputs are clamped:
/// `total_pages` to at least 1 and the current index into the page range.
pub fn resolve(params: &ResolveParams) -> Vec<ResolvedPage> {
    let total = params.total_pages.max(1);
    let last = total - 1;
    let current = params.current_page_index.min(last);

    let page = |index: usize| {
        if index == current {
            ResolvedPage::Current(index)
        } else {
            ResolvedPage::Number(index)
        }
    };

    let limit = match params.number_limit {
        NumberLimit::Unlimited => return (0..total).map(page).collect(),
        NumberLimit::Around(n) => n,
    };

    let mut indices = BTreeSet::new();
    let start = current.saturating_sub(limit);
    let end = current.saturating_add(limit).min(last);
    indices.extend(start..=end);

    if params.large_limit > 0 && params.large_interval > 0 {
        for k in 1..=params.large_limit {
            let offset = k.saturating_mul(params.large_interval);
            let below = current.checked_sub(offset);
            let above = current.checked_add(offset).filter(|&i| i <= last);
            if below.is_none() && above.is_none() {
                break;
            }
            indices.extend(below);
            indices.extend(above);
        }
    }

    let mut sequence = Vec::with_capacity(indices.len() * 2);
    let mut previous: Option<usize> = None;
    for index in indices {
        if previous.is_some_and(|p| index - p > 1) {
            sequence.push(ResolvedPage::Limiter);
        }
        sequence.push(page(index));
        previous = Some(index);
    }
    sequence
}
