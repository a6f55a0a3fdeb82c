//! Clipboard access behind a trait so the app can be tested without a display

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Something that can receive copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard. A handle is opened per copy so a missing
/// display only fails the copy, not startup.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
