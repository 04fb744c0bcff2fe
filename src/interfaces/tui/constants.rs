//! TUI constants
//!
//! Display sizing lives here so the screens stay free of magic numbers.

/// Truncation length for original URLs in the recent table.
pub const URL_TRUNCATE_LENGTH: usize = 42;

/// Truncation length for short URLs in the recent table.
pub const SHORT_URL_TRUNCATE_LENGTH: usize = 30;

/// Rows shown per breakdown table on the analytics screen.
pub const BREAKDOWN_ROW_LIMIT: usize = 8;

/// Popup size as percentages of the frame.
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    pub width: u16,
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub mod popup {
    use super::PopupSize;

    pub const HELP: PopupSize = PopupSize::new(72, 80);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}
