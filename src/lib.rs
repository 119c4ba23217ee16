//! # mdcopy
//!
//! Render Markdown into several representations at once, for the clipboard.
//!
//! A single source becomes HTML (with a UTF-8 charset declaration) plus one
//! plain-text representation: the source verbatim, word-wrapped plain text
//! with link targets in place of labels, or canonical Markdown. Applications
//! pasting the result pick whichever representation they understand.
//!
//! ## Quick Start
//!
//! ```
//! use mdcopy::{prepare, RenderOptions, TextFormat};
//!
//! let options = RenderOptions::default().with_format(TextFormat::Text);
//! let contents = prepare("Read [the docs](https://docs.rs)", &options, false)?;
//!
//! assert!(contents.html.starts_with("<meta charset=\"UTF-8\">"));
//! assert_eq!(contents.text, "Read https://docs.rs\n");
//! # Ok::<(), mdcopy::Error>(())
//! ```
//!
//! ## Publishing
//!
//! ```
//! use mdcopy::{copy, MemoryClipboard, RenderOptions};
//!
//! let mut clipboard = MemoryClipboard::new();
//! copy("*hello*", &RenderOptions::default(), true, &mut clipboard)?;
//!
//! assert_eq!(clipboard.text(), Some("*hello*"));
//! assert!(clipboard.is_transient());
//! # Ok::<(), mdcopy::Error>(())
//! ```

pub mod assemble;
pub mod clipboard;
pub mod error;
pub mod input;
pub mod parse;
pub mod render;
pub mod tree;

// Re-exports
pub use assemble::{assemble, copy, prepare, ClipboardContents, CHARSET_DECLARATION};
pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use error::{Error, Result};
pub use input::Source;
pub use render::{render_all, RenderOptions, Renditions, TextFormat};
pub use tree::{substitute_link_targets, walk, Event, Phase};
