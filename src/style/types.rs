//! URL style types and traits

use crate::error::Result;

/// A page whose URL is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef<'a> {
    /// 0-based page index
    pub index: usize,
    /// Explicit page identifier, when the pagination has one
    pub id: Option<&'a str>,
}

impl<'a> PageRef<'a> {
    /// Create a reference to a sequential page
    pub fn new(index: usize) -> Self {
        Self { index, id: None }
    }

    /// Create a reference to a page with an explicit identifier
    pub fn with_id(index: usize, id: &'a str) -> Self {
        Self {
            index,
            id: Some(id),
        }
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Strategy producing the URL of a page
///
/// Implementations must be deterministic for a given page within one render.
pub trait PaginationStyle: Send + Sync {
    /// URL of the given page
    fn page_url(&self, page: PageRef<'_>) -> Result<String>;
}

impl<T: PaginationStyle + ?Sized> PaginationStyle for Box<T> {
    fn page_url(&self, page: PageRef<'_>) -> Result<String> {
        (**self).page_url(page)
    }
}
