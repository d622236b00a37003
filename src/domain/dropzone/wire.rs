//! Wire types for dropzone requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::aircraft::wire::{AircraftMedia, AircraftMediaLink};
use crate::domain::location::wire::{LocationMedia, LocationMediaLink};

/// Dropzone info (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropzoneMedia {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Jumps tracked by all skydivers on this dropzone.
    pub jumps_tracked: i64,
    pub rating: f64,
    pub ratings_count: i64,
    pub aircrafts: Vec<AircraftMedia>,
    pub location: LocationMedia,
    pub links: DropzoneMediaLinks,
}

/// Dropzone info (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropzoneMediaLink {
    pub id: i64,
    pub href: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub links: DropzoneMediaLinks,
}

/// Links to resources related to a dropzone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropzoneMediaLinks {
    pub aircrafts: Vec<AircraftMediaLink>,
    pub location: LocationMediaLink,
}

/// Request payload for `POST /dropzones`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropzoneForm {
    pub name: String,
    pub location_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for `PATCH /dropzones/{dropzone_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropzoneUpdateForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
