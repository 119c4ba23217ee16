//! Rendering options configuration.

use std::fmt;
use std::str::FromStr;

/// Default wrap width in columns.
pub const DEFAULT_WIDTH: usize = 80;

/// Which rendering becomes the plain-text clipboard representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// The source, verbatim
    #[default]
    Raw,
    /// Word-wrapped plain text with link labels replaced by their targets
    Text,
    /// Canonical re-serialized Markdown
    Markdown,
}

impl TextFormat {
    /// Returns the lowercase name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            TextFormat::Raw => "raw",
            TextFormat::Text => "text",
            TextFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(TextFormat::Raw),
            "text" => Ok(TextFormat::Text),
            "markdown" => Ok(TextFormat::Markdown),
            other => Err(format!("unknown text format: {}", other)),
        }
    }
}

/// Options for rendering a document.
///
/// One set is built per invocation and shared by every render; the
/// renderers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replace straight quotes, dashes and ellipses with typographic ones
    pub smart_quotes: bool,

    /// Wrap width for the `text` and `markdown` formats (0 = no wrapping)
    pub width: usize,

    /// Format of the plain-text representation
    pub format: TextFormat,

    /// Strip leading and trailing whitespace from the emitted strings
    pub trim: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            smart_quotes: false,
            width: DEFAULT_WIDTH,
            format: TextFormat::Raw,
            trim: false,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable typographic quote substitution.
    pub fn with_smart_quotes(mut self, smart: bool) -> Self {
        self.smart_quotes = smart;
        self
    }

    /// Set the wrap width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the plain-text format.
    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable whitespace trimming.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Build the comrak option set for parsing and rendering.
    ///
    /// All GFM extensions are on and raw HTML passes through untouched.
    pub fn parser_options(&self) -> comrak::Options<'static> {
        let mut options = comrak::Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.tagfilter = true;
        options.parse.smart = self.smart_quotes;
        options.render.unsafe_ = true;
        options.render.github_pre_lang = true;
        options.render.width = self.width;
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert!(!opts.smart_quotes);
        assert!(!opts.trim);
        assert_eq!(opts.width, 80);
        assert_eq!(opts.format, TextFormat::Raw);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = RenderOptions::new()
            .with_smart_quotes(true)
            .with_width(40)
            .with_format(TextFormat::Text)
            .with_trim(true);

        assert!(opts.smart_quotes);
        assert!(opts.trim);
        assert_eq!(opts.width, 40);
        assert_eq!(opts.format, TextFormat::Text);
    }

    #[test]
    fn test_text_format_names() {
        assert_eq!("raw".parse::<TextFormat>().unwrap(), TextFormat::Raw);
        assert_eq!("Markdown".parse::<TextFormat>().unwrap(), TextFormat::Markdown);
        assert_eq!(TextFormat::Text.to_string(), "text");
        assert!("html".parse::<TextFormat>().is_err());
    }

    #[test]
    fn test_parser_options() {
        let comrak_opts = RenderOptions::new()
            .with_smart_quotes(true)
            .with_width(72)
            .parser_options();

        assert!(comrak_opts.parse.smart);
        assert!(comrak_opts.render.unsafe_);
        assert!(comrak_opts.render.github_pre_lang);
        assert!(comrak_opts.extension.strikethrough);
        assert!(comrak_opts.extension.table);
        assert_eq!(comrak_opts.render.width, 72);

        assert!(!RenderOptions::new().parser_options().parse.smart);
    }
}
