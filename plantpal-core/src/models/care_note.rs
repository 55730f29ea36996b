use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::care_category::CareCategory;

/// A dated record of a care action taken on a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareNote {
    pub id: Uuid,
    pub plant_id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    #[serde(rename = "type")]
    pub category: CareCategory,
}

/// Payload for recording a new care note; the identifier is assigned by
/// whichever side performs the create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareNote {
    pub plant_id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    #[serde(rename = "type")]
    pub category: CareCategory,
}

impl NewCareNote {
    pub fn new(plant_id: Uuid, date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            plant_id,
            date,
            content: content.into(),
            category: CareCategory::General,
        }
    }

    pub fn with_category(mut self, category: CareCategory) -> Self {
        self.category = category;
        self
    }

    /// Builds the stored record with an assigned identifier.
    pub fn into_note(self, id: Uuid) -> CareNote {
        CareNote {
            id,
            plant_id: self.plant_id,
            date: self.date,
            content: self.content,
            category: self.category,
        }
    }
}

impl fmt::Display for CareNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [{}]  {}", self.date, self.category, self.content)
    }
}
