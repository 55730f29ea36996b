//! The unified read/write surface over the remote API and the local
//! store.
//!
//! Every operation tries the remote gateway first. Reads fall back to
//! the local store on any failure and never error. Writes mirror the
//! server-confirmed record into the local store on success, or perform
//! the equivalent mutation locally on failure; the caller cannot tell a
//! server-backed result from a fallback result. Data written locally
//! during an outage is never replayed to the server.

use tracing::warn;
use uuid::Uuid;

use super::error::SyncError;
use crate::api::ApiClient;
use crate::models::{
    CareNote, GrowthLog, NewCareNote, NewGrowthLog, NewPlant, NewPlantImage, Plant, PlantImage,
    PlantUpdate,
};
use crate::store::{LocalStore, StoreError};

/// Facade over the remote gateway and the local store.
///
/// Constructed once at application start and passed by reference to
/// consumers.
#[derive(Debug, Clone)]
pub struct PlantService {
    api: ApiClient,
    store: LocalStore,
}

impl PlantService {
    pub fn new(api: ApiClient, store: LocalStore) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    // Plant operations

    /// Lists all plants. Server results are returned as-is and are not
    /// mirrored locally; only writes update the local store.
    pub async fn get_plants(&self) -> Vec<Plant> {
        match self.api.get_plants().await {
            Ok(plants) => plants,
            Err(e) => {
                warn!("fetching plants from server failed, reading local store: {}", e);
                self.store.read_all()
            }
        }
    }

    pub async fn add_plant(&self, plant: NewPlant) -> Result<Plant, SyncError> {
        match self.api.create_plant(&plant).await {
            Ok(created) => {
                self.mirror_upsert(&created, "plant");
                Ok(created)
            }
            Err(e) => {
                warn!("creating plant on server failed, saving locally: {}", e);
                let created = plant.into_plant(Uuid::new_v4());
                self.store.upsert(&created)?;
                Ok(created)
            }
        }
    }

    pub async fn update_plant(&self, id: Uuid, updates: &PlantUpdate) -> Result<Plant, SyncError> {
        match self.api.update_plant(id, updates).await {
            Ok(updated) => {
                self.mirror_upsert(&updated, "plant");
                Ok(updated)
            }
            Err(e) => {
                warn!("updating plant on server failed, updating locally: {}", e);
                let mut plants: Vec<Plant> = self.store.read_all();
                let plant = plants
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(SyncError::PlantNotFound(id))?;
                updates.apply(plant);
                let updated = plant.clone();
                self.store.write_all(&plants)?;
                Ok(updated)
            }
        }
    }

    /// Deletes a plant and cascades to its growth logs and care notes.
    /// Returns whether a removal occurred.
    pub async fn delete_plant(&self, id: Uuid) -> Result<bool, SyncError> {
        match self.api.delete_plant(id).await {
            Ok(()) => {
                if let Err(e) = self.remove_plant_locally(id) {
                    warn!("failed to mirror deletion of plant {} locally: {}", id, e);
                }
                Ok(true)
            }
            Err(e) => {
                warn!("deleting plant on server failed, deleting locally: {}", e);
                Ok(self.remove_plant_locally(id)?)
            }
        }
    }

    // Growth log operations

    pub async fn get_growth_logs(&self) -> Vec<GrowthLog> {
        match self.api.get_growth_logs().await {
            Ok(logs) => logs,
            Err(e) => {
                warn!(
                    "fetching growth logs from server failed, reading local store: {}",
                    e
                );
                self.store.read_all()
            }
        }
    }

    pub async fn growth_logs_for(&self, plant_id: Uuid) -> Vec<GrowthLog> {
        self.get_growth_logs()
            .await
            .into_iter()
            .filter(|log| log.plant_id == plant_id)
            .collect()
    }

    pub async fn add_growth_log(&self, log: NewGrowthLog) -> Result<GrowthLog, SyncError> {
        match self.api.create_growth_log(&log).await {
            Ok(created) => {
                self.mirror_upsert(&created, "growth log");
                Ok(created)
            }
            Err(e) => {
                warn!("creating growth log on server failed, saving locally: {}", e);
                let created = log.into_log(Uuid::new_v4());
                self.store.upsert(&created)?;
                Ok(created)
            }
        }
    }

    // Care note operations

    pub async fn get_care_notes(&self) -> Vec<CareNote> {
        match self.api.get_care_notes().await {
            Ok(notes) => notes,
            Err(e) => {
                warn!(
                    "fetching care notes from server failed, reading local store: {}",
                    e
                );
                self.store.read_all()
            }
        }
    }

    pub async fn care_notes_for(&self, plant_id: Uuid) -> Vec<CareNote> {
        self.get_care_notes()
            .await
            .into_iter()
            .filter(|note| note.plant_id == plant_id)
            .collect()
    }

    pub async fn add_care_note(&self, note: NewCareNote) -> Result<CareNote, SyncError> {
        match self.api.create_care_note(&note).await {
            Ok(created) => {
                self.mirror_upsert(&created, "care note");
                Ok(created)
            }
            Err(e) => {
                warn!("creating care note on server failed, saving locally: {}", e);
                let created = note.into_note(Uuid::new_v4());
                self.store.upsert(&created)?;
                Ok(created)
            }
        }
    }

    // Plant image operations

    /// Lists a plant's images, falling back to the image list embedded
    /// in the locally stored plant.
    pub async fn plant_images(&self, plant_id: Uuid) -> Vec<PlantImage> {
        match self.api.get_plant_images(plant_id).await {
            Ok(images) => images,
            Err(e) => {
                warn!(
                    "fetching images from server failed, reading local store: {}",
                    e
                );
                self.store
                    .read_all::<Plant>()
                    .into_iter()
                    .find(|p| p.id == plant_id)
                    .and_then(|p| p.images)
                    .unwrap_or_default()
            }
        }
    }

    pub async fn add_plant_image(
        &self,
        plant_id: Uuid,
        image: NewPlantImage,
    ) -> Result<PlantImage, SyncError> {
        match self.api.add_plant_image(plant_id, &image).await {
            Ok(created) => {
                if let Err(e) = self.attach_image_locally(plant_id, &created) {
                    warn!(
                        "failed to mirror image {} onto plant {} locally: {}",
                        created.id, plant_id, e
                    );
                }
                Ok(created)
            }
            Err(e) => {
                warn!("attaching image on server failed, saving locally: {}", e);
                let created = image.into_image(Uuid::new_v4().to_string());
                self.attach_image_locally(plant_id, &created)?;
                Ok(created)
            }
        }
    }

    /// Removes an image from a plant. Returns whether a removal occurred.
    pub async fn delete_plant_image(
        &self,
        plant_id: Uuid,
        image_id: &str,
    ) -> Result<bool, SyncError> {
        match self.api.delete_plant_image(plant_id, image_id).await {
            Ok(()) => {
                if let Err(e) = self.detach_image_locally(plant_id, image_id) {
                    warn!(
                        "failed to mirror removal of image {} from plant {} locally: {}",
                        image_id, plant_id, e
                    );
                }
                Ok(true)
            }
            Err(e) => {
                warn!("removing image on server failed, removing locally: {}", e);
                self.detach_image_locally(plant_id, image_id)
            }
        }
    }

    /// Mirrors a server-confirmed record into the local store. A mirror
    /// failure is reported but does not fail the operation; the server
    /// result is still authoritative.
    fn mirror_upsert<T: crate::store::Record + Clone>(&self, item: &T, kind: &str) {
        if let Err(e) = self.store.upsert(item) {
            warn!("failed to mirror {} {} locally: {}", kind, item.id(), e);
        }
    }

    fn remove_plant_locally(&self, id: Uuid) -> Result<bool, StoreError> {
        let removed = self.store.delete_by_id::<Plant>(id)?;
        self.store
            .delete_where::<GrowthLog, _>(|log| log.plant_id == id)?;
        self.store
            .delete_where::<CareNote, _>(|note| note.plant_id == id)?;
        Ok(removed)
    }

    fn attach_image_locally(&self, plant_id: Uuid, image: &PlantImage) -> Result<(), SyncError> {
        let mut plants: Vec<Plant> = self.store.read_all();
        let plant = plants
            .iter_mut()
            .find(|p| p.id == plant_id)
            .ok_or(SyncError::PlantNotFound(plant_id))?;

        let images = plant.images.get_or_insert_with(Vec::new);
        match images.iter().position(|existing| existing.id == image.id) {
            Some(index) => images[index] = image.clone(),
            None => images.push(image.clone()),
        }
        self.store.write_all(&plants)?;
        Ok(())
    }

    fn detach_image_locally(&self, plant_id: Uuid, image_id: &str) -> Result<bool, SyncError> {
        let mut plants: Vec<Plant> = self.store.read_all();
        let plant = plants
            .iter_mut()
            .find(|p| p.id == plant_id)
            .ok_or(SyncError::PlantNotFound(plant_id))?;

        let Some(images) = plant.images.as_mut() else {
            return Ok(false);
        };
        let len_before = images.len();
        images.retain(|image| image.id != image_id);
        if images.len() == len_before {
            return Ok(false);
        }
        self.store.write_all(&plants)?;
        Ok(true)
    }
}
