//! Extension hooks
//!
//! Hooks let the embedding application rewrite generated HTML at two
//! points: after each item renders, and after the whole pagination is
//! assembled (before sanitizing). Hooks run in registration order.

use crate::collection::PageItem;
use crate::types::ItemKind;

/// Callback invoked while rendering
pub trait RenderHook: Send + Sync {
    /// Rewrite the HTML of one item
    fn filter_item(&self, _item: &PageItem, html: String) -> String {
        html
    }

    /// Rewrite the assembled pagination HTML
    fn filter_output(&self, html: String) -> String {
        html
    }
}

/// Item hook from a closure, optionally limited to one item kind
pub struct ItemFilter<F> {
    kind: Option<ItemKind>,
    filter: F,
}

impl<F> ItemFilter<F>
where
    F: Fn(&PageItem, String) -> String + Send + Sync,
{
    /// Run for every item
    pub fn all(filter: F) -> Self {
        Self { kind: None, filter }
    }

    /// Run only for items of `kind`
    pub fn for_kind(kind: ItemKind, filter: F) -> Self {
        Self {
            kind: Some(kind),
            filter,
        }
    }
}

impl<F> RenderHook for ItemFilter<F>
where
    F: Fn(&PageItem, String) -> String + Send + Sync,
{
    fn filter_item(&self, item: &PageItem, html: String) -> String {
        match self.kind {
            Some(kind) if kind != item.kind => html,
            _ => (self.filter)(item, html),
        }
    }
}

/// Output hook from a closure
pub struct OutputFilter<F> {
    filter: F,
}

impl<F> OutputFilter<F>
where
    F: Fn(String) -> String + Send + Sync,
{
    /// Wrap a closure over the assembled HTML
    pub fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F> RenderHook for OutputFilter<F>
where
    F: Fn(String) -> String + Send + Sync,
{
    fn filter_output(&self, html: String) -> String {
        (self.filter)(html)
    }
}
