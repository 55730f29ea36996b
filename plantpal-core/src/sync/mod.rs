//! Synchronization facade: remote-first operations with transparent
//! local fallback.

mod error;
mod service;

pub use error::SyncError;
pub use service::PlantService;
