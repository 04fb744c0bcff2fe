//! Reusable widget builders shared by the screens.

mod input_field;
mod popup;
mod stat_card;

pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
pub use stat_card::StatCard;
