use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Excellent => write!(f, "excellent"),
            HealthStatus::Good => write!(f, "good"),
            HealthStatus::Fair => write!(f, "fair"),
            HealthStatus::Poor => write!(f, "poor"),
        }
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(HealthStatus::Excellent),
            "good" => Ok(HealthStatus::Good),
            "fair" => Ok(HealthStatus::Fair),
            "poor" => Ok(HealthStatus::Poor),
            _ => Err(format!(
                "Invalid health status '{}'. Valid options: excellent, good, fair, poor",
                s
            )),
        }
    }
}
