//! Reusable UI components

mod button;
mod dialog;

pub use button::{Button, ButtonRole, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_review_dialog};
