//! Wire types for aircraft requests and responses.

use serde::{Deserialize, Serialize};

/// Aircraft info (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftMedia {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Maximum number of passengers.
    pub capacity: i32,
    /// Count of registered units.
    pub count: i64,
    /// Average altitude ever tracked, in meters.
    pub avg_ceiling: f64,
    /// Maximum altitude ever tracked, in meters.
    pub max_ceiling_tracked: f64,
    /// Rate of climb in m/s.
    pub rate_of_climb: f64,
    /// Maximum altitude in meters.
    pub service_ceiling: f64,
    /// Useful load in kg.
    pub useful_load: f64,
}

/// Aircraft info (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftMediaLink {
    pub href: String,
    pub image: String,
    pub name: String,
}

/// Request payload for `POST /aircrafts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftForm {
    pub name: String,
    pub capacity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_of_climb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ceiling: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful_load: Option<f64>,
}

/// Request payload for `PATCH /aircrafts/{aircraft_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftUpdateForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_of_climb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ceiling: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful_load: Option<f64>,
}
