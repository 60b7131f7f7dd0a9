//! Item types

use crate::pagination::ResolvedPage;
use crate::types::ItemKind;
use serde::Serialize;

/// A single renderable pagination item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItem {
    /// What the item is
    pub kind: ItemKind,
    /// 0-based index of the page the item refers to; `None` for limiters
    /// and the current page text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<usize>,
    /// Display label of number items (page identifier or page number)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PageItem {
    /// Create a direction item (prev, next, first, last) linking to a page
    pub fn link(kind: ItemKind, page_index: usize) -> Self {
        Self {
            kind,
            page_index: Some(page_index),
            label: None,
        }
    }

    /// Create a page number item
    pub fn number(page_index: usize, label: impl Into<String>, current: bool) -> Self {
        Self {
            kind: if current {
                ItemKind::CurrentNumber
            } else {
                ItemKind::Number
            },
            page_index: Some(page_index),
            label: Some(label.into()),
        }
    }

    /// Create a limiter item
    pub fn limiter() -> Self {
        Self {
            kind: ItemKind::Limiter,
            page_index: None,
            label: None,
        }
    }

    /// Create the "Page X of Y" item
    pub fn current_page_text() -> Self {
        Self {
            kind: ItemKind::CurrentPageText,
            page_index: None,
            label: None,
        }
    }

    /// Build a number sequence item from a resolved page
    pub fn from_resolved(page: ResolvedPage, label: impl FnOnce(usize) -> String) -> Self {
        match page {
            ResolvedPage::Number(i) => Self::number(i, label(i), false),
            ResolvedPage::Current(i) => Self::number(i, label(i), true),
            ResolvedPage::Limiter => Self::limiter(),
        }
    }

    /// 1-based page number, when the item refers to a page
    pub fn page_number(&self) -> Option<usize> {
        self.page_index.map(|i| i + 1)
    }
}
