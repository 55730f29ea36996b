use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::growth_log::GrowthLog;
use super::plant_image::PlantImage;

/// A tracked houseplant record with care metadata.
///
/// Growth logs are embedded when the server chooses to include them;
/// locally created plants start with an empty list and the standalone
/// growth-log collection remains the source of truth for lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    pub species: String,
    pub date_added: NaiveDate,
    pub last_watered: NaiveDate,
    /// Days between waterings.
    pub watering_frequency: u32,
    pub location: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PlantImage>>,
    #[serde(default)]
    pub growth_logs: Vec<GrowthLog>,
}

impl Plant {
    /// The date this plant is next due for watering.
    pub fn next_watering(&self) -> NaiveDate {
        self.last_watered + chrono::Days::new(u64::from(self.watering_frequency))
    }
}

/// Payload for registering a new plant; the identifier and the embedded
/// growth-log list are assigned by whichever side performs the create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    pub name: String,
    pub species: String,
    pub date_added: NaiveDate,
    pub last_watered: NaiveDate,
    pub watering_frequency: u32,
    pub location: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewPlant {
    pub fn new(name: impl Into<String>, species: impl Into<String>, date_added: NaiveDate) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            date_added,
            last_watered: date_added,
            watering_frequency: 7,
            location: String::new(),
            notes: String::new(),
            image_url: None,
        }
    }

    pub fn with_last_watered(mut self, last_watered: NaiveDate) -> Self {
        self.last_watered = last_watered;
        self
    }

    /// Days between waterings.
    pub fn with_watering_frequency(mut self, days: u32) -> Self {
        self.watering_frequency = days;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds the stored record with an assigned identifier and an empty
    /// growth-log list.
    pub fn into_plant(self, id: Uuid) -> Plant {
        Plant {
            id,
            name: self.name,
            species: self.species,
            date_added: self.date_added,
            last_watered: self.last_watered,
            watering_frequency: self.watering_frequency,
            location: self.location,
            notes: self.notes,
            image_url: self.image_url,
            images: None,
            growth_logs: Vec::new(),
        }
    }
}

/// Partial update applied over an existing plant, shallow-merge with
/// last-writer-wins per field. Absent fields leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watering_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PlantUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.date_added.is_none()
            && self.last_watered.is_none()
            && self.watering_frequency.is_none()
            && self.location.is_none()
            && self.notes.is_none()
            && self.image_url.is_none()
    }

    /// Overwrites each provided field on the target plant.
    pub fn apply(&self, plant: &mut Plant) {
        if let Some(name) = &self.name {
            plant.name = name.clone();
        }
        if let Some(species) = &self.species {
            plant.species = species.clone();
        }
        if let Some(date_added) = self.date_added {
            plant.date_added = date_added;
        }
        if let Some(last_watered) = self.last_watered {
            plant.last_watered = last_watered;
        }
        if let Some(watering_frequency) = self.watering_frequency {
            plant.watering_frequency = watering_frequency;
        }
        if let Some(location) = &self.location {
            plant.location = location.clone();
        }
        if let Some(notes) = &self.notes {
            plant.notes = notes.clone();
        }
        if let Some(image_url) = &self.image_url {
            plant.image_url = Some(image_url.clone());
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;
        writeln!(f, "Species: {}", self.species)?;
        if !self.location.is_empty() {
            writeln!(f, "Location: {}", self.location)?;
        }
        writeln!(f, "Added: {}", self.date_added)?;
        writeln!(
            f,
            "Watering: every {} day(s), last watered {}",
            self.watering_frequency, self.last_watered
        )?;
        if !self.notes.is_empty() {
            writeln!(f, "\nNotes:\n{}", self.notes)?;
        }
        Ok(())
    }
}
