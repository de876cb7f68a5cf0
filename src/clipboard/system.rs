use super::ClipboardStrategy;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copies text through the OS clipboard API via arboard.
///
/// On Linux, clipboard contents set this way persist while the
/// application is running.
pub struct SystemClipboard;

impl ClipboardStrategy for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn attempt(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_returns_a_result_in_headless_environments() {
        // Without a display server arboard reports an error; either
        // outcome is acceptable, it just must not panic.
        let result = SystemClipboard.attempt("test");
        let _ = result.is_ok();
    }
}
