//! Clipboard collaborator

use async_trait::async_trait;

/// Clipboard write failure
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard in this environment
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Clipboard refused the text
    #[error("copy failed: {0}")]
    CopyFailed(String),
}

/// Places text on the system clipboard
///
/// One attempt per call; implementations do not retry.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Copy `text`
    ///
    /// # Errors
    /// Returns [`ClipboardError`] when the text could not be placed.
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}
