//! Input sources.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

/// Where the Markdown source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A string given on the command line
    Literal(String),
    /// The full contents of a file
    File(PathBuf),
    /// Everything on standard input until EOF
    Stdin,
}

impl Source {
    /// Pick a source: a file wins over a literal, and stdin is the fallback.
    pub fn from_args(literal: Option<String>, file: Option<PathBuf>) -> Self {
        match (file, literal) {
            (Some(path), _) => Source::File(path),
            (None, Some(text)) => Source::Literal(text),
            (None, None) => Source::Stdin,
        }
    }

    /// Read the raw bytes of the source.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            Source::Literal(text) => text.as_bytes().to_vec(),
            Source::File(path) => read_all(File::open(path)?)?,
            Source::Stdin => read_all(io::stdin().lock())?,
        };

        debug!(source = ?self, bytes = bytes.len(), "read input");
        Ok(bytes)
    }

    /// Read the source and decode it as UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        decode(self.read_bytes()?)
    }
}

/// Read everything from `reader` until it is exhausted.
pub fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Decode bytes as strict UTF-8.
pub fn decode(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{Cursor, Write};

    #[test]
    fn test_source_precedence() {
        let file = Some(PathBuf::from("notes.md"));
        let literal = Some("# hi".to_string());

        assert_eq!(
            Source::from_args(literal.clone(), file.clone()),
            Source::File(PathBuf::from("notes.md"))
        );
        assert_eq!(
            Source::from_args(literal, None),
            Source::Literal("# hi".to_string())
        );
        assert_eq!(Source::from_args(None, None), Source::Stdin);
    }

    #[test]
    fn test_literal_source() {
        let source = Source::Literal("caf\u{e9}".to_string());
        assert_eq!(source.read_to_string().unwrap(), "caf\u{e9}");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# From file\n").unwrap();

        let source = Source::File(file.path().to_path_buf());
        assert_eq!(source.read_to_string().unwrap(), "# From file\n");
    }

    #[test]
    fn test_missing_file() {
        let source = Source::File(PathBuf::from("/nonexistent/mdcopy/input.md"));
        assert!(matches!(source.read_to_string(), Err(Error::Io(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'a', 0xc3, 0x28]).unwrap();

        let source = Source::File(file.path().to_path_buf());
        assert!(matches!(source.read_to_string(), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_read_all_until_eof() {
        let data = vec![b'x'; 100_000];
        assert_eq!(read_all(Cursor::new(data.clone())).unwrap(), data);
    }
}
