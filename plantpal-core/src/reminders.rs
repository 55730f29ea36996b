//! Watering reminder computation.
//!
//! Pure functions over a plant list and a reference date; no I/O. The
//! caller supplies "today" so results are deterministic.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Plant;

/// A plant's watering state relative to a reference date.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterReminder {
    pub plant_id: Uuid,
    pub plant_name: String,
    /// Days past the watering interval, clamped to zero.
    pub days_overdue: i64,
    pub is_overdue: bool,
}

/// Computes the watering state of every plant.
pub fn water_reminders(plants: &[Plant], today: NaiveDate) -> Vec<WaterReminder> {
    plants
        .iter()
        .map(|plant| {
            let days_since_watered = (today - plant.last_watered).num_days();
            let days_overdue = days_since_watered - i64::from(plant.watering_frequency);
            WaterReminder {
                plant_id: plant.id,
                plant_name: plant.name.clone(),
                days_overdue: days_overdue.max(0),
                is_overdue: days_overdue > 0,
            }
        })
        .collect()
}

/// Computes reminders for overdue plants only.
pub fn overdue_reminders(plants: &[Plant], today: NaiveDate) -> Vec<WaterReminder> {
    water_reminders(plants, today)
        .into_iter()
        .filter(|reminder| reminder.is_overdue)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPlant;

    fn plant_watered_on(day: u32, frequency: u32) -> Plant {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        NewPlant::new("Fern", "Nephrolepis exaltata", date)
            .with_watering_frequency(frequency)
            .into_plant(Uuid::new_v4())
    }

    #[test]
    fn test_not_yet_due() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        // Watered on the 1st, due every 4 days
        let plants = vec![plant_watered_on(1, 4)];

        let reminders = water_reminders(&plants, today);
        assert_eq!(reminders.len(), 1);
        assert!(!reminders[0].is_overdue);
        assert_eq!(reminders[0].days_overdue, 0);
        assert!(overdue_reminders(&plants, today).is_empty());
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        // Exactly at the interval boundary
        let plants = vec![plant_watered_on(1, 4)];

        let reminders = water_reminders(&plants, today);
        assert!(!reminders[0].is_overdue);
        assert_eq!(reminders[0].days_overdue, 0);
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        let plants = vec![plant_watered_on(1, 4)];

        let overdue = overdue_reminders(&plants, today);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].days_overdue, 3);
        assert!(overdue[0].is_overdue);
    }

    #[test]
    fn test_mixed_plants_filtered() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let plants = vec![plant_watered_on(1, 4), plant_watered_on(9, 7)];

        let overdue = overdue_reminders(&plants, today);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].plant_id, plants[0].id);
    }
}
