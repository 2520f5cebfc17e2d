//! Form domain layer

mod field;
mod review_form;

pub use review_form::{FocusedControl, ReviewFocus, ReviewForm, ReviewModal, ReviewModalState};
