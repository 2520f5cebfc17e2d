//! Review state change workflow

mod error;
mod orchestrator;

pub use error::ReviewError;
pub use orchestrator::{spawn_submit, ReviewCompletion, ReviewRequest};

#[cfg(test)]
pub use error::GENERIC_FAILURE_MESSAGE;
