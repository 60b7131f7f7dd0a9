//! Item and pagination renderers

use super::hooks::RenderHook;
use super::types::{
    HtmlSanitizer, ItemFailure, ItemRenderer, Passthrough, RenderContext, RenderOutput,
};
use crate::collection::{Collection, PageItem};
use crate::error::Result;
use crate::style::PageRef;
use crate::template::render_token_template;
use crate::types::{
    ItemKind, TokenMap, TOKEN_CURRENT_PAGE, TOKEN_PAGE_LABEL, TOKEN_PAGE_NUMBER,
    TOKEN_TOTAL_PAGES, TOKEN_URL,
};

// ============================================================================
// Template Item Renderer
// ============================================================================

/// Renders items by token substitution into the option templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateItemRenderer;

impl TemplateItemRenderer {
    /// Create a new template renderer
    pub fn new() -> Self {
        Self
    }

    fn template<'a>(kind: ItemKind, ctx: &RenderContext<'a>) -> &'a str {
        let options = ctx.options;
        match kind {
            ItemKind::Prev => &options.prev_html,
            ItemKind::First => &options.first_html,
            ItemKind::Number => &options.number_html,
            ItemKind::CurrentNumber => &options.current_number_html,
            ItemKind::Limiter => &options.limiter_html,
            ItemKind::Last => &options.last_html,
            ItemKind::Next => &options.next_html,
            ItemKind::CurrentPageText => &options.current_page_html,
        }
    }
}

impl ItemRenderer for TemplateItemRenderer {
    fn render_item(&self, item: &PageItem, ctx: &RenderContext<'_>) -> Result<String> {
        let mut tokens = TokenMap::new();
        tokens.insert(
            TOKEN_CURRENT_PAGE.to_string(),
            (ctx.current_page_index + 1).to_string(),
        );
        tokens.insert(TOKEN_TOTAL_PAGES.to_string(), ctx.total_pages.to_string());

        if let Some(index) = item.page_index {
            let page = match ctx.options.page_id(index) {
                Some(id) => PageRef::with_id(index, id),
                None => PageRef::new(index),
            };
            tokens.insert(TOKEN_URL.to_string(), ctx.style.page_url(page)?);
            tokens.insert(TOKEN_PAGE_NUMBER.to_string(), page.number().to_string());
            let label = item
                .label
                .clone()
                .unwrap_or_else(|| ctx.options.page_label(index));
            tokens.insert(TOKEN_PAGE_LABEL.to_string(), label);
        }

        Ok(render_token_template(Self::template(item.kind, ctx), &tokens))
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Assembles the HTML of a whole collection
pub struct Renderer {
    item_renderer: Box<dyn ItemRenderer>,
    hooks: Vec<Box<dyn RenderHook>>,
    sanitizer: Box<dyn HtmlSanitizer>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer using the option templates and no sanitizing
    pub fn new() -> Self {
        Self {
            item_renderer: Box::new(TemplateItemRenderer::new()),
            hooks: Vec::new(),
            sanitizer: Box::new(Passthrough),
        }
    }

    /// Replace the item renderer
    #[must_use]
    pub fn with_item_renderer(mut self, item_renderer: impl ItemRenderer + 'static) -> Self {
        self.item_renderer = Box::new(item_renderer);
        self
    }

    /// Register a hook; hooks run in registration order
    #[must_use]
    pub fn with_hook(mut self, hook: impl RenderHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Replace the sanitizer
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: impl HtmlSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Number of registered hooks
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Render a collection
    pub fn render(&self, collection: &Collection, ctx: &RenderContext<'_>) -> RenderOutput {
        let options = ctx.options;
        let mut html = String::new();
        let mut failures = Vec::new();
        let mut in_numbers = false;

        html.push_str(&options.wrapper_before);

        for (position, item) in collection.iter().enumerate() {
            let numbered = item.kind.is_number_sequence();
            if numbered && !in_numbers {
                html.push_str(&options.numbers_wrapper_before);
            } else if !numbered && in_numbers {
                html.push_str(&options.numbers_wrapper_after);
            }
            in_numbers = numbered;

            match self.item_renderer.render_item(item, ctx) {
                Ok(item_html) => {
                    let item_html = self
                        .hooks
                        .iter()
                        .fold(item_html, |acc, hook| hook.filter_item(item, acc));
                    html.push_str(&item_html);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to render {} item at position {}: {}",
                        item.kind,
                        position,
                        e
                    );
                    failures.push(ItemFailure {
                        position,
                        kind: item.kind,
                        page_index: item.page_index,
                        message: e.to_string(),
                    });
                }
            }
        }

        if in_numbers {
            html.push_str(&options.numbers_wrapper_after);
        }
        html.push_str(&options.wrapper_after);

        let html = self
            .hooks
            .iter()
            .fold(html, |acc, hook| hook.filter_output(acc));

        tracing::debug!(
            "Rendered {} pagination items ({} failed)",
            collection.len(),
            failures.len()
        );

        RenderOutput {
            html: self.sanitizer.sanitize(&html),
            failures,
        }
    }
}
