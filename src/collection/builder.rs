//! Collection assembly
//!
//! Orders the enabled item kinds into the final render sequence.

use super::types::PageItem;
use crate::config::PaginationOptions;
use crate::error::Result;
use crate::pagination::{PageSetResolver, ResolveParams};
use crate::types::ItemKind;

/// Ordered items of one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    items: Vec<PageItem>,
    current_page_index: usize,
    total_pages: usize,
}

impl Collection {
    /// Build the collection for the given options
    ///
    /// Direction items only appear when their target page exists: prev and
    /// first need a page before the current one, next and last a page after
    /// it. First and last are kept even when the number sequence already
    /// shows page 1 or the final page.
    pub fn build(options: &PaginationOptions, resolver: &dyn PageSetResolver) -> Result<Self> {
        let params = ResolveParams::from_options(options)?;
        let current = params.current_page_index;
        let total = params.total_pages;
        let last = total - 1;
        let has_prev = current > 0;
        let has_next = current < last;

        let mut items = Vec::new();

        if options.enable_prev && has_prev {
            items.push(PageItem::link(ItemKind::Prev, current - 1));
        }
        if options.enable_first && has_prev {
            items.push(PageItem::link(ItemKind::First, 0));
        }
        if options.enable_numbers {
            items.extend(
                resolver
                    .resolve(&params)
                    .into_iter()
                    .map(|page| PageItem::from_resolved(page, |i| options.page_label(i))),
            );
        }
        if options.enable_last && has_next {
            items.push(PageItem::link(ItemKind::Last, last));
        }
        if options.enable_next && has_next {
            items.push(PageItem::link(ItemKind::Next, current + 1));
        }
        if options.enable_current_page_text {
            items.push(PageItem::current_page_text());
        }

        tracing::debug!(
            "Built pagination collection: {} items, page {} of {}",
            items.len(),
            current + 1,
            total
        );

        Ok(Self {
            items,
            current_page_index: current,
            total_pages: total,
        })
    }

    /// All items in render order
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// Iterate over items in render order
    pub fn iter(&self) -> std::slice::Iter<'_, PageItem> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Kinds of the items, in render order
    pub fn kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(|item| item.kind).collect()
    }

    /// Whether any number sequence items are present
    pub fn has_numbers(&self) -> bool {
        self.items.iter().any(|item| item.kind.is_number_sequence())
    }

    /// 0-based current page
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Total number of pages
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a PageItem;
    type IntoIter = std::slice::Iter<'a, PageItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
