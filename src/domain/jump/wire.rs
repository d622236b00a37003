//! Wire types for logged jumps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dropzone::wire::DropzoneMediaLink;
use crate::domain::jump_group::wire::JumpGroupMediaLink;
use crate::domain::user::wire::UserMediaLink;
use crate::domain::user_gear::wire::UserGearMediaLink;

/// Skydive jump info (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpMedia {
    pub id: i64,
    /// `skydive` or `base`.
    pub kind: String,
    /// Discipline: wingsuit, freefly, rw, ...
    #[serde(rename = "type")]
    pub discipline: String,
    /// Exit altitude over ground, in meters.
    pub altitude: f64,
    /// Parachute deployment altitude, in meters.
    pub deployment_altitude: f64,
    /// Freefall duration, in seconds.
    pub freefall_duration: f64,
    /// Maximum vertical velocity, in m/s.
    pub max_vertical_velocity: f64,
    pub freefall_started_at: Option<DateTime<Utc>>,
    pub deployment_at: Option<DateTime<Utc>>,
    pub landed_at: Option<DateTime<Utc>>,
    pub links: JumpMediaLinks,
}

/// Skydive jump info (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpMediaLink {
    pub id: i64,
    pub href: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub discipline: String,
    pub altitude: f64,
    pub freefall_started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpMediaLinks {
    pub dropzone: DropzoneMediaLink,
    pub gear: UserGearMediaLink,
    pub jump_group: JumpGroupMediaLink,
    pub user: UserMediaLink,
}

/// Request payload for `POST /users/{user_id}/jumps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpForm {
    pub kind: String,
    #[serde(rename = "type")]
    pub discipline: String,
    pub dropzone_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_gear_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// `(longitude,latitude)` pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freefall_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertical_velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freefall_started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landed_at: Option<DateTime<Utc>>,
}

/// Request payload for `PATCH /users/{user_id}/jumps/{jump_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpUpdateForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropzone_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_gear_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freefall_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertical_velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freefall_started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landed_at: Option<DateTime<Utc>>,
}
