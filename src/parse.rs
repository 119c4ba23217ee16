//! Markdown parsing.
//!
//! Thin wrapper over [`comrak::parse_document`]. Parsing is total over any
//! UTF-8 string, so there is no error path here; input decoding failures
//! are caught earlier by [`crate::input`].

use comrak::nodes::AstNode;
use comrak::Arena;
use tracing::debug;

use crate::render::RenderOptions;

/// Parse `source` into a document tree allocated in `arena`.
///
/// Each call builds an independent tree, so callers that intend to mutate
/// a tree should parse into their own arena.
pub fn parse<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    options: &RenderOptions,
) -> &'a AstNode<'a> {
    debug!(bytes = source.len(), smart = options.smart_quotes, "parsing markdown");
    comrak::parse_document(arena, source, &options.parser_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comrak::nodes::NodeValue;

    #[test]
    fn test_parse_heading() {
        let arena = Arena::new();
        let root = parse(&arena, "# Title\n", &RenderOptions::default());

        let first = root.first_child().unwrap();
        assert!(matches!(first.data.borrow().value, NodeValue::Heading(_)));
    }

    #[test]
    fn test_parse_empty() {
        let arena = Arena::new();
        let root = parse(&arena, "", &RenderOptions::default());

        assert!(matches!(root.data.borrow().value, NodeValue::Document));
        assert!(root.first_child().is_none());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "Some *text* with [a link](http://example.com).\n";
        let options = RenderOptions::default();

        let first = Arena::new();
        let second = Arena::new();
        let a = parse(&first, source, &options);
        let b = parse(&second, source, &options);

        assert_eq!(a.descendants().count(), b.descendants().count());
    }
}
