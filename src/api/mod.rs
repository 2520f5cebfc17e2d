//! HTTP client for the submission API

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use error::Problem;
#[cfg(test)]
pub use traits::MockApiClientTrait;
