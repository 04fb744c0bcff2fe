//! Clipboard helper
//!
//! One operation: copy a string, report success or failure. Clipboard access
//! fails routinely (headless sessions, Wayland restrictions), so failures
//! are logged and returned as `false`, never propagated.

use tracing::warn;

pub fn copy(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            warn!("Clipboard unavailable: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Requires a real clipboard; headless CI has none.
    #[test]
    #[ignore]
    fn test_copy_roundtrip() {
        let text = "https://short.ly/abc123";
        assert!(copy(text));

        let mut clipboard = arboard::Clipboard::new().unwrap();
        assert_eq!(clipboard.get_text().unwrap(), text);
    }
}
