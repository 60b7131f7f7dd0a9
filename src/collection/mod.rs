//! Item model and collection
//!
//! # Overview
//!
//! A [`Collection`] is the ordered list of items one render produces:
//!
//! ```text
//! [Prev] [First] [Number | CurrentNumber | Limiter ...] [Last] [Next] [CurrentPageText]
//! ```
//!
//! Items are derived from the options and the resolved page sequence, and
//! are discarded once the render is done.

mod builder;
mod types;

pub use builder::Collection;
pub use types::PageItem;
