//! URL styles
//!
//! Supports: Query argument, Path segment, Page ID template, Callback
//!
//! # Overview
//!
//! A style turns a page index into the URL its link points at. The
//! embedding application either picks one of the built-in styles or
//! supplies its own `get_page_url` callback.

mod strategies;
mod types;

pub use strategies::{CallbackStyle, PageIdStyle, PathSegmentStyle, QueryArgStyle};
pub use types::{PageRef, PaginationStyle};

#[cfg(test)]
mod tests;
