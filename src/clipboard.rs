use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ClipboardError;

pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last copied text in process memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Result<Option<String>, ClipboardError> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".into()))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyNotice {
    pub copied: bool,
    pub message: String,
}

/// Single write, no retry. The outcome is reported to the user as a notice.
pub fn copy_token(clipboard: &dyn Clipboard, token: &str) -> CopyNotice {
    match clipboard.copy_text(token) {
        Ok(()) => {
            info!(len = token.len(), "token copied");
            CopyNotice {
                copied: true,
                message: format!("Copied: {token}"),
            }
        }
        Err(e) => {
            warn!(error = %e, "token copy failed");
            CopyNotice {
                copied: false,
                message: format!("Copy failed: {e}"),
            }
        }
    }
}
