//! Facade error types.

use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// Errors surfaced by the facade's write operations.
///
/// Reads never fail. A write fails only when the remote call failed and
/// the local fallback could not complete either, or when an update
/// targets an identifier unknown to both backends.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("plant not found: {0}")]
    PlantNotFound(Uuid),
    #[error(transparent)]
    Store(#[from] StoreError),
}
