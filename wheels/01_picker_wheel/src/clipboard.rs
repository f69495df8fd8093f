//! System clipboard access for the share link
//!
//! nannou_egui does not forward egui's copied text to the OS, so the link is
//! written through arboard. The handle lives as long as the app because on
//! X11 the copied text disappears with its owner.

use tracing::{info, warn};

pub const COPIED_MESSAGE: &str = "Link copied to clipboard";

/// Anything that can take a line of text
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error>;
}

impl TextClipboard for arboard::Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        arboard::Clipboard::set_text(self, text)
    }
}

/// Open the system clipboard, or `None` when the platform has none
pub fn open() -> Option<arboard::Clipboard> {
    match arboard::Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            warn!(error = %e, "clipboard unavailable");
            None
        }
    }
}

/// Copy `link` and return the status line for the sidebar
pub fn copy_link<C: TextClipboard>(clipboard: Option<&mut C>, link: &str) -> String {
    let result = match clipboard {
        Some(clipboard) => clipboard.set_text(link),
        None => Err(arboard::Error::ClipboardNotSupported),
    };
    match result {
        Ok(()) => {
            info!(link = %link, "share link copied");
            COPIED_MESSAGE.to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to copy share link");
            format!("Could not copy link: {}", e)
        }
    }
}
