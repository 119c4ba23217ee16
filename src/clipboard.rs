//! Clipboard sinks.
//!
//! The pipeline never talks to the system clipboard directly; it hands
//! [`ClipboardContents`] to a [`ClipboardSink`]. The system-backed sink
//! lives in the command-line crate.

use std::collections::BTreeMap;

use crate::assemble::ClipboardContents;
use crate::error::Result;

/// Representation name for HTML.
pub const HTML_TYPE: &str = "public.html";

/// Representation name for UTF-8 plain text.
pub const TEXT_TYPE: &str = "public.utf8-plain-text";

/// Zero-length marker asking clipboard managers to skip this entry.
pub const TRANSIENT_TYPE: &str = "org.nspasteboard.TransientType";

/// Destination for rendered output.
pub trait ClipboardSink {
    /// Replace the clipboard contents.
    ///
    /// Prior contents are cleared, then HTML and text are written together,
    /// plus the transient marker when `contents.transient` is set.
    fn publish(&mut self, contents: &ClipboardContents) -> Result<()>;
}

/// In-process clipboard keyed by representation name.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    representations: BTreeMap<&'static str, String>,
    updates: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored under a representation name.
    pub fn get(&self, representation: &str) -> Option<&str> {
        self.representations.get(representation).map(String::as_str)
    }

    pub fn html(&self) -> Option<&str> {
        self.get(HTML_TYPE)
    }

    pub fn text(&self) -> Option<&str> {
        self.get(TEXT_TYPE)
    }

    pub fn is_transient(&self) -> bool {
        self.representations.contains_key(TRANSIENT_TYPE)
    }

    /// Names of the stored representations, sorted.
    pub fn representations(&self) -> Vec<&'static str> {
        self.representations.keys().copied().collect()
    }

    /// Number of completed publishes.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl ClipboardSink for MemoryClipboard {
    fn publish(&mut self, contents: &ClipboardContents) -> Result<()> {
        self.representations.clear();
        self.representations.insert(HTML_TYPE, contents.html.clone());
        self.representations.insert(TEXT_TYPE, contents.text.clone());
        if contents.transient {
            self.representations.insert(TRANSIENT_TYPE, String::new());
        }
        self.updates += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(transient: bool) -> ClipboardContents {
        ClipboardContents {
            html: "<meta charset=\"UTF-8\"><p>a</p>".to_string(),
            text: "a".to_string(),
            transient,
        }
    }

    #[test]
    fn test_publish_writes_both() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.publish(&contents(false)).unwrap();

        assert_eq!(clipboard.html(), Some("<meta charset=\"UTF-8\"><p>a</p>"));
        assert_eq!(clipboard.text(), Some("a"));
        assert!(!clipboard.is_transient());
        assert_eq!(clipboard.representations(), vec![HTML_TYPE, TEXT_TYPE]);
    }

    #[test]
    fn test_transient_marker_is_empty() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.publish(&contents(true)).unwrap();

        assert!(clipboard.is_transient());
        assert_eq!(clipboard.get(TRANSIENT_TYPE), Some(""));
    }

    #[test]
    fn test_publish_clears_previous() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.publish(&contents(true)).unwrap();
        clipboard.publish(&contents(false)).unwrap();

        assert!(!clipboard.is_transient());
        assert_eq!(clipboard.updates(), 2);
    }
}
