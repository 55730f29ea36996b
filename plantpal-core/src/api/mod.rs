//! HTTP gateway to the PlantPal REST API.

mod client;
mod error;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use error::ApiError;
