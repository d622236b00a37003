//! Wire types for geographic locations.

use serde::{Deserialize, Serialize};

/// Geographic location (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMedia {
    pub id: i64,
    /// Country code.
    pub country: String,
    pub region: String,
    pub state: String,
    pub settlement: String,
    /// Elevation over sea level, in meters.
    pub elevation: f64,
    pub latitude: String,
    pub longitude: String,
}

/// Geographic location (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMediaLink {
    pub href: String,
    pub country: String,
    pub settlement: String,
}

/// Location embedded in a user record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationPayload {
    pub country: String,
    pub region: String,
    pub state: String,
    pub settlement: String,
    pub elevation: f64,
    pub latitude: String,
    pub longitude: String,
}
