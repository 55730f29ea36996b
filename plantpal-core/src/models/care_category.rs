use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of care action recorded by a care note.
///
/// Serializes under the `type` field of a care note on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CareCategory {
    Watering,
    Fertilizing,
    Repotting,
    Pruning,
    #[default]
    General,
}

impl fmt::Display for CareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareCategory::Watering => write!(f, "watering"),
            CareCategory::Fertilizing => write!(f, "fertilizing"),
            CareCategory::Repotting => write!(f, "repotting"),
            CareCategory::Pruning => write!(f, "pruning"),
            CareCategory::General => write!(f, "general"),
        }
    }
}

impl FromStr for CareCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "watering" => Ok(CareCategory::Watering),
            "fertilizing" => Ok(CareCategory::Fertilizing),
            "repotting" => Ok(CareCategory::Repotting),
            "pruning" => Ok(CareCategory::Pruning),
            "general" => Ok(CareCategory::General),
            _ => Err(format!(
                "Invalid care category '{}'. Valid options: watering, fertilizing, repotting, pruning, general",
                s
            )),
        }
    }
}
