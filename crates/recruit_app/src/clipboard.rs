use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Host clipboard. The UI shell provides the platform implementation.
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard for headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|err| ClipboardError(err.to_string()))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}
