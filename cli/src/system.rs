//! System clipboard sink backed by arboard.
//!
//! On X11 the clipboard is owned by the process that set it; once that
//! process exits the contents are gone unless a clipboard manager copied
//! them. [`SystemClipboard::with_wait`] keeps the process alive until
//! another application takes over the selection.

use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
#[cfg(target_os = "macos")]
use arboard::SetExtApple;
#[cfg(target_os = "windows")]
use arboard::SetExtWindows;
use mdcopy::{ClipboardContents, ClipboardSink, Error, Result};
use tracing::debug;

pub struct SystemClipboard {
    clipboard: Clipboard,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().map_err(clipboard_error)?;
        Ok(Self {
            clipboard,
            wait: false,
        })
    }

    /// Block in `publish` until the clipboard is overwritten (Linux only).
    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

impl ClipboardSink for SystemClipboard {
    fn publish(&mut self, contents: &ClipboardContents) -> Result<()> {
        self.clipboard.clear().map_err(clipboard_error)?;

        let mut set = self.clipboard.set();
        if contents.transient {
            set = exclude_from_history(set);
        }
        if self.wait {
            set = wait_for_takeover(set);
        }
        set.html(contents.html.as_str(), Some(contents.text.as_str()))
            .map_err(clipboard_error)?;

        debug!(
            html = contents.html.len(),
            text = contents.text.len(),
            transient = contents.transient,
            "clipboard updated"
        );
        Ok(())
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn exclude_from_history(set: arboard::Set<'_>) -> arboard::Set<'_> {
    set.exclude_from_history()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn exclude_from_history(set: arboard::Set<'_>) -> arboard::Set<'_> {
    tracing::warn!("transient clipboard marker is not supported on this platform");
    set
}

#[cfg(target_os = "linux")]
fn wait_for_takeover(set: arboard::Set<'_>) -> arboard::Set<'_> {
    debug!("holding clipboard until another application takes it");
    set.wait()
}

// Clipboard contents outlive the process on other platforms.
#[cfg(not(target_os = "linux"))]
fn wait_for_takeover(set: arboard::Set<'_>) -> arboard::Set<'_> {
    set
}

fn clipboard_error(err: arboard::Error) -> Error {
    Error::Clipboard(err.to_string())
}
