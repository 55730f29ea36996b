mod care_category;
mod care_note;
mod growth_log;
mod health_status;
mod plant;
mod plant_image;

pub use care_category::CareCategory;
pub use care_note::{CareNote, NewCareNote};
pub use growth_log::{GrowthLog, NewGrowthLog};
pub use health_status::HealthStatus;
pub use plant::{NewPlant, Plant, PlantUpdate};
pub use plant_image::{ImageSource, NewPlantImage, PlantImage};
