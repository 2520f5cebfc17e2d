//! Application state module

mod app_state;
mod audit;
mod cache;
mod forms;
mod identity;
mod submission;

pub use app_state::*;
pub use audit::*;
pub use forms::*;
pub use identity::*;
pub use submission::*;
