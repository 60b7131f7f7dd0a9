//! Page number selection
//!
//! Decides which page numbers a pagination shows and where "..." limiters
//! go between them.
//!
//! # Overview
//!
//! Given the current page, the page count, a number limit and an optional
//! large page number interval, the resolver produces a strictly increasing
//! sequence of page indices with exactly one limiter in every gap. The
//! default implementation is [`NeighborResolver`]; custom strategies plug
//! in through the [`PageSetResolver`] trait.

mod resolver;
mod types;

pub use resolver::{resolve, NeighborResolver};
pub use types::{NumberLimit, PageSetResolver, ResolveParams, ResolvedPage};

#[cfg(test)]
mod tests;
