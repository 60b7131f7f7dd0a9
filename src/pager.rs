//! Pagination entry point
//!
//! [`Pager`] wires options, a page set resolver, a URL style and a
//! renderer together. Every collaborator is injected through the builder;
//! the defaults are [`NeighborResolver`] and a plain [`Renderer`].

use crate::collection::Collection;
use crate::config::PaginationOptions;
use crate::error::Result;
use crate::pagination::{NeighborResolver, PageSetResolver};
use crate::render::{RenderContext, RenderOutput, Renderer};
use crate::style::PaginationStyle;

/// A configured pagination, ready to render
pub struct Pager {
    options: PaginationOptions,
    resolver: Box<dyn PageSetResolver>,
    style: Box<dyn PaginationStyle>,
    renderer: Renderer,
}

impl Pager {
    /// Create a pager; options are validated and normalized here
    pub fn new(options: PaginationOptions, style: impl PaginationStyle + 'static) -> Result<Self> {
        Ok(Self {
            options: options.normalized()?,
            resolver: Box::new(NeighborResolver::new()),
            style: Box::new(style),
            renderer: Renderer::new(),
        })
    }

    /// Replace the page set resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl PageSetResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the renderer (item renderer, hooks, sanitizer)
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// The normalized options
    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Build the item collection without rendering it
    pub fn collection(&self) -> Result<Collection> {
        Collection::build(&self.options, self.resolver.as_ref())
    }

    /// Render the pagination
    pub fn render(&self) -> Result<RenderOutput> {
        let collection = self.collection()?;
        let ctx = RenderContext {
            options: &self.options,
            style: self.style.as_ref(),
            current_page_index: collection.current_page_index(),
            total_pages: collection.total_pages(),
        };
        Ok(self.renderer.render(&collection, &ctx))
    }

    /// Render the pagination and return only the HTML
    pub fn to_html(&self) -> Result<String> {
        self.render().map(|output| output.html)
    }
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
