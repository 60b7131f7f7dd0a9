//! HTML rendering
//!
//! # Overview
//!
//! The renderer walks a [`Collection`](crate::collection::Collection),
//! renders every item through an [`ItemRenderer`], runs the registered
//! [`RenderHook`]s, and joins the pieces:
//!
//! ```text
//! wrapper_before + prev + first
//!   + numbers_wrapper_before + numbers... + numbers_wrapper_after
//!   + last + next + current_page_text + wrapper_after
//! ```
//!
//! The joined HTML passes through the [`HtmlSanitizer`] once. An item whose
//! URL cannot be resolved renders as an empty string and is reported in
//! [`RenderOutput::failures`]; the remaining items are unaffected.

mod hooks;
mod renderer;
mod types;

pub use hooks::{ItemFilter, OutputFilter, RenderHook};
pub use renderer::{Renderer, TemplateItemRenderer};
pub use types::{HtmlSanitizer, ItemFailure, ItemRenderer, Passthrough, RenderContext, RenderOutput};
