use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::health_status::HealthStatus;

/// A dated observation of a plant's height and health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthLog {
    pub id: Uuid,
    pub plant_id: Uuid,
    pub date: NaiveDate,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub health_status: HealthStatus,
}

/// Payload for recording a new growth log; the identifier is assigned by
/// whichever side performs the create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGrowthLog {
    pub plant_id: Uuid,
    pub date: NaiveDate,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub health_status: HealthStatus,
}

impl NewGrowthLog {
    pub fn new(plant_id: Uuid, date: NaiveDate) -> Self {
        Self {
            plant_id,
            date,
            notes: String::new(),
            image_url: None,
            height: None,
            health_status: HealthStatus::Good,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Height in centimeters.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_health_status(mut self, health_status: HealthStatus) -> Self {
        self.health_status = health_status;
        self
    }

    /// Builds the stored record with an assigned identifier.
    pub fn into_log(self, id: Uuid) -> GrowthLog {
        GrowthLog {
            id,
            plant_id: self.plant_id,
            date: self.date,
            notes: self.notes,
            image_url: self.image_url,
            height: self.height,
            health_status: self.health_status,
        }
    }
}

impl fmt::Display for GrowthLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.date, self.health_status)?;
        if let Some(height) = self.height {
            write!(f, "  {:.1} cm", height)?;
        }
        if !self.notes.is_empty() {
            write!(f, "  {}", self.notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn test_new_growth_log_defaults() {
        let plant_id = Uuid::new_v4();
        let log = NewGrowthLog::new(plant_id, test_date());

        assert_eq!(log.plant_id, plant_id);
        assert_eq!(log.health_status, HealthStatus::Good);
        assert!(log.notes.is_empty());
        assert!(log.height.is_none());
    }

    #[test]
    fn test_into_log() {
        let plant_id = Uuid::new_v4();
        let id = Uuid::new_v4();
        let log = NewGrowthLog::new(plant_id, test_date())
            .with_notes("New frond unfurling")
            .with_height(32.5)
            .with_health_status(HealthStatus::Excellent)
            .into_log(id);

        assert_eq!(log.id, id);
        assert_eq!(log.plant_id, plant_id);
        assert_eq!(log.height, Some(32.5));
        assert_eq!(log.health_status, HealthStatus::Excellent);
    }

    #[test]
    fn test_growth_log_json_field_names() {
        let log = NewGrowthLog::new(Uuid::new_v4(), test_date())
            .with_height(10.0)
            .into_log(Uuid::new_v4());
        let json = serde_json::to_value(&log).unwrap();

        assert!(json.get("plantId").is_some());
        assert_eq!(json["healthStatus"], "good");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_growth_log_display() {
        let log = NewGrowthLog::new(Uuid::new_v4(), test_date())
            .with_height(18.0)
            .with_notes("two new leaves")
            .into_log(Uuid::new_v4());

        let output = format!("{}", log);
        assert!(output.contains("2025-03-15"));
        assert!(output.contains("18.0 cm"));
        assert!(output.contains("two new leaves"));
    }
}
