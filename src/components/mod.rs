//! UI Components
//!
//! Reusable Leptos components.

mod budget_items_editor;
mod dream_card;
mod dream_form;
mod icons;
mod image_upload;
mod progress_bar;
mod remove_confirm_button;

pub use dream_card::DreamCard;
pub use dream_form::DreamForm;
pub use icons::CoinIcon;
pub use progress_bar::ProgressBar;
