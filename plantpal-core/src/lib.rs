//! PlantPal Core Library
//!
//! Shared types and logic for PlantPal applications: entity models, the
//! JSON-file local store, the REST gateway, and the synchronization
//! facade that serves every operation remote-first with transparent
//! local fallback.

pub mod api;
pub mod models;
pub mod reminders;
pub mod store;
pub mod sync;

pub use api::{ApiClient, ApiError, DEFAULT_TIMEOUT};
pub use models::{
    CareCategory, CareNote, GrowthLog, HealthStatus, ImageSource, NewCareNote, NewGrowthLog,
    NewPlant, NewPlantImage, Plant, PlantImage, PlantUpdate,
};
pub use reminders::{overdue_reminders, water_reminders, WaterReminder};
pub use store::{Collection, LocalStore, Record, StoreError};
pub use sync::{PlantService, SyncError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
