//! HTML renderer implementation.

use comrak::nodes::AstNode;

use crate::error::{Error, Result};

use super::options::RenderOptions;

/// Convert a document tree to HTML.
///
/// Raw HTML in the source is passed through and fenced code blocks carry
/// their language on the `<pre>` element.
pub fn to_html<'a>(root: &'a AstNode<'a>, options: &RenderOptions) -> Result<String> {
    let mut output = Vec::new();
    comrak::format_html(root, &options.parser_options(), &mut output)
        .map_err(|e| Error::Render(format!("html: {}", e)))?;

    String::from_utf8(output).map_err(|e| Error::Render(format!("html: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use comrak::Arena;

    fn html(source: &str, options: &RenderOptions) -> String {
        let arena = Arena::new();
        let root = parse(&arena, source, options);
        to_html(root, options).unwrap()
    }

    #[test]
    fn test_link_label_preserved() {
        let out = html("[label](http://x.io)\n", &RenderOptions::default());
        assert_eq!(out, "<p><a href=\"http://x.io\">label</a></p>\n");
    }

    #[test]
    fn test_raw_html_passthrough() {
        let out = html("<span class=\"k\">hi</span>\n", &RenderOptions::default());
        assert!(out.contains("<span class=\"k\">hi</span>"));
    }

    #[test]
    fn test_strikethrough() {
        let out = html("~~gone~~\n", &RenderOptions::default());
        assert!(out.contains("<del>gone</del>"));
    }

    #[test]
    fn test_pre_lang() {
        let out = html("```rust\nlet x = 1;\n```\n", &RenderOptions::default());
        assert!(out.contains("<pre lang=\"rust\">"));
    }

    #[test]
    fn test_smart_quotes() {
        let plain = html("\"quoted\" -- text...\n", &RenderOptions::default());
        assert!(plain.contains("&quot;quoted&quot;"));

        let smart = html(
            "\"quoted\" -- text...\n",
            &RenderOptions::default().with_smart_quotes(true),
        );
        assert!(smart.contains("\u{201c}quoted\u{201d}"));
        assert!(smart.contains('\u{2013}'));
        assert!(smart.contains('\u{2026}'));
    }

    #[test]
    fn test_empty() {
        assert_eq!(html("", &RenderOptions::default()), "");
    }
}
