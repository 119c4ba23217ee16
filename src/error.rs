//! Error types for the mdcopy library.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for mdcopy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, rendering or publishing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the input source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// A renderer failed to produce its output.
    #[error("Render error: {0}")]
    Render(String),

    /// The clipboard rejected the write.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
