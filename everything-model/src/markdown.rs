//! Markdown ⇄ HTML synchronization for entities that declare markdown fields.
//!
//! An entity opts in by implementing [`MarkdownSync`]: it lists its markdown
//! field names and maps each one to its text/HTML sibling pair. The render
//! methods are shared default methods and walk the declared list in order.

use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Converts between markdown source and rendered HTML.
///
/// Conversions are pure and never fail; the round trip is not lossless.
pub trait MarkdownConverter {
    fn to_html(&self, markdown: &str) -> String;
    fn to_text(&self, html: &str) -> String;
}

/// Parser extensions enabled by [`CommonMark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonMarkOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
}

impl Default for CommonMarkOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
        }
    }
}

impl CommonMarkOptions {
    fn parser_options(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options
    }
}

/// The default converter: `pulldown-cmark` for rendering and `htmd` for the
/// way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonMark {
    options: CommonMarkOptions,
}

impl CommonMark {
    #[must_use]
    pub const fn new(options: CommonMarkOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> CommonMarkOptions {
        self.options
    }
}

impl MarkdownConverter for CommonMark {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options.parser_options());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }

    fn to_text(&self, html: &str) -> String {
        match htmd::convert(html) {
            Ok(markdown) => markdown.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "html to markdown conversion failed");
                String::new()
            }
        }
    }
}

/// Mutable view of one markdown field and its `_html` sibling.
///
/// `None` on either side is the wire's `null` and is never rendered from.
pub struct MarkdownPair<'a> {
    pub text: &'a mut Option<String>,
    pub html: &'a mut Option<String>,
}

impl<'a> MarkdownPair<'a> {
    pub fn new(text: &'a mut Option<String>, html: &'a mut Option<String>) -> Self {
        Self { text, html }
    }
}

/// Markdown sync mixin.
///
/// Implementors declare [`MARKDOWN_FIELDS`](Self::MARKDOWN_FIELDS) and
/// resolve each name in [`markdown_pair_mut`](Self::markdown_pair_mut); the
/// render methods come for free and return `&mut Self` for chaining.
pub trait MarkdownSync {
    /// Markdown field names, in render order. Each `f` has an `f_html` sibling.
    const MARKDOWN_FIELDS: &'static [&'static str];

    /// Resolves a declared field name to its text/HTML pair.
    ///
    /// Returning `None` makes the render methods skip the name.
    fn markdown_pair_mut(&mut self, field: &str) -> Option<MarkdownPair<'_>>;

    /// Renders every declared markdown field into its `_html` sibling.
    fn render_all_to_html_with<C>(&mut self, converter: &C) -> &mut Self
    where
        C: MarkdownConverter + ?Sized,
    {
        for field in Self::MARKDOWN_FIELDS {
            let Some(pair) = self.markdown_pair_mut(field) else {
                continue;
            };
            if let Some(text) = pair.text.as_deref() {
                *pair.html = Some(converter.to_html(text));
            }
        }
        self
    }

    /// Converts every declared `_html` sibling back into its markdown field.
    fn render_all_from_html_with<C>(&mut self, converter: &C) -> &mut Self
    where
        C: MarkdownConverter + ?Sized,
    {
        for field in Self::MARKDOWN_FIELDS {
            let Some(pair) = self.markdown_pair_mut(field) else {
                continue;
            };
            if let Some(html) = pair.html.as_deref() {
                *pair.text = Some(converter.to_text(html));
            }
        }
        self
    }

    /// [`render_all_to_html_with`](Self::render_all_to_html_with) using [`CommonMark`].
    fn render_all_to_html(&mut self) -> &mut Self {
        self.render_all_to_html_with(&CommonMark::default())
    }

    /// [`render_all_from_html_with`](Self::render_all_from_html_with) using [`CommonMark`].
    fn render_all_from_html(&mut self) -> &mut Self {
        self.render_all_from_html_with(&CommonMark::default())
    }
}
