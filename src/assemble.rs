//! Final packaging of rendered output for the clipboard.

use tracing::debug;

use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Prepended to every HTML payload.
///
/// Without it, applications that sniff the encoding of pasted HTML fall
/// back to Latin-1 and mangle non-ASCII text.
pub const CHARSET_DECLARATION: &str = "<meta charset=\"UTF-8\">";

/// Representations written to the clipboard in one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardContents {
    /// Rich text representation, starting with [`CHARSET_DECLARATION`]
    pub html: String,
    /// Plain text representation
    pub text: String,
    /// Ask clipboard managers not to keep this entry in their history
    pub transient: bool,
}

/// Add the charset declaration and apply the trim policy.
pub fn assemble(html: &str, text: &str, trim: bool, transient: bool) -> ClipboardContents {
    let html = format!("{}{}", CHARSET_DECLARATION, html);

    let (html, text) = if trim {
        (html.trim().to_string(), text.trim().to_string())
    } else {
        (html, text.to_string())
    };

    ClipboardContents {
        html,
        text,
        transient,
    }
}

/// Run the whole pipeline: HTML plus the selected text format, assembled.
pub fn prepare(source: &str, options: &RenderOptions, transient: bool) -> Result<ClipboardContents> {
    let html = render::render_html(source, options)?;
    let text = render::render_text(source, options)?;

    debug!(format = %options.format, trim = options.trim, transient, "assembling clipboard contents");
    Ok(assemble(&html, &text, options.trim, transient))
}

/// Render `source` and publish it to `sink`.
///
/// Nothing is written unless every representation rendered.
pub fn copy(
    source: &str,
    options: &RenderOptions,
    transient: bool,
    sink: &mut dyn ClipboardSink,
) -> Result<ClipboardContents> {
    let contents = prepare(source, options, transient)?;
    sink.publish(&contents)?;
    Ok(contents)
}
