//! Markdown re-serialization.

use comrak::nodes::AstNode;

use crate::error::{Error, Result};

use super::options::RenderOptions;

/// Convert a document tree back to canonical CommonMark.
///
/// Paragraphs are wrapped at `options.width` columns; 0 disables wrapping.
pub fn to_markdown<'a>(root: &'a AstNode<'a>, options: &RenderOptions) -> Result<String> {
    let mut output = Vec::new();
    comrak::format_commonmark(root, &options.parser_options(), &mut output)
        .map_err(|e| Error::Render(format!("markdown: {}", e)))?;

    String::from_utf8(output).map_err(|e| Error::Render(format!("markdown: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use comrak::Arena;

    fn markdown(source: &str, width: usize) -> String {
        let options = RenderOptions::default().with_width(width);
        let arena = Arena::new();
        let root = parse(&arena, source, &options);
        to_markdown(root, &options).unwrap()
    }

    #[test]
    fn test_canonical_emphasis() {
        assert_eq!(markdown("_word_\n", 80), "*word*\n");
    }

    #[test]
    fn test_wraps_paragraphs() {
        let out = markdown("alpha beta gamma delta epsilon\n", 12);
        assert!(out.lines().count() > 1);
        assert!(out.contains("epsilon"));
    }

    #[test]
    fn test_zero_width_does_not_wrap() {
        let source = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi\n";
        assert_eq!(markdown(source, 0), source);
    }
}
