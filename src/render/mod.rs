//! Output rendering for Markdown sources.
//!
//! This module renders a Markdown source to HTML, plain text, or
//! canonical Markdown. Every function parses the source itself; the
//! plain-text path always gets a tree of its own because it rewrites
//! link labels in place.
//!
//! # Example
//!
//! ```
//! use mdcopy::render::*;
//!
//! let options = RenderOptions::default().with_format(TextFormat::Text);
//! let source = "# Hi [x](http://e.co)";
//!
//! let html = render_html(source, &options)?;
//! assert!(html.contains("<a href=\"http://e.co\">x</a>"));
//!
//! let text = render_text(source, &options)?;
//! assert_eq!(text, "Hi http://e.co\n");
//! # Ok::<(), mdcopy::Error>(())
//! ```

mod html;
mod markdown;
mod options;
mod text;

pub use html::to_html;
pub use markdown::to_markdown;
pub use options::{RenderOptions, TextFormat, DEFAULT_WIDTH};
pub use text::to_plain_text;

use comrak::Arena;
use tracing::debug;

use crate::error::Result;
use crate::parse::parse;
use crate::tree::substitute_link_targets;

/// Every representation of one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renditions {
    /// HTML, link labels intact
    pub html: String,
    /// Word-wrapped plain text with link labels replaced by targets
    pub plain_text: String,
    /// Canonical re-serialized Markdown
    pub markup_text: String,
    /// The source, unchanged
    pub raw: String,
}

/// Render `source` to HTML.
pub fn render_html(source: &str, options: &RenderOptions) -> Result<String> {
    let arena = Arena::new();
    let root = parse(&arena, source, options);
    let html = to_html(root, options)?;

    debug!(format = "html", bytes = html.len(), "rendered");
    Ok(html)
}

/// Render `source` back to canonical Markdown wrapped at `options.width`.
pub fn render_markdown(source: &str, options: &RenderOptions) -> Result<String> {
    let arena = Arena::new();
    let root = parse(&arena, source, options);
    let markdown = to_markdown(root, options)?;

    debug!(format = "markdown", bytes = markdown.len(), "rendered");
    Ok(markdown)
}

/// Render `source` as plain text, showing link targets instead of labels.
pub fn render_plain_text(source: &str, options: &RenderOptions) -> Result<String> {
    // Own arena: the rewrite below must never reach a tree used elsewhere.
    let arena = Arena::new();
    let root = parse(&arena, source, options);
    substitute_link_targets(root)?;
    let text = to_plain_text(root, options.width);

    debug!(format = "text", bytes = text.len(), "rendered");
    Ok(text)
}

/// The source itself.
pub fn render_raw(source: &str) -> String {
    source.to_string()
}

/// Render the plain-text representation selected by `options.format`.
pub fn render_text(source: &str, options: &RenderOptions) -> Result<String> {
    match options.format {
        TextFormat::Raw => Ok(render_raw(source)),
        TextFormat::Text => render_plain_text(source, options),
        TextFormat::Markdown => render_markdown(source, options),
    }
}

/// Render every representation of `source`.
///
/// HTML and Markdown share one parse; plain text is rendered from a
/// separate parse.
pub fn render_all(source: &str, options: &RenderOptions) -> Result<Renditions> {
    let arena = Arena::new();
    let root = parse(&arena, source, options);
    let html = to_html(root, options)?;
    let markup_text = to_markdown(root, options)?;

    Ok(Renditions {
        html,
        plain_text: render_plain_text(source, options)?,
        markup_text,
        raw: render_raw(source),
    })
}
