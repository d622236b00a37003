//! Wire types for jump groups (one aircraft load).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aircraft::wire::AircraftMediaLink;
use crate::domain::dropzone::wire::DropzoneMediaLink;

/// Jump group info (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpGroupMedia {
    pub id: i64,
    /// When the aircraft lifted off the ground.
    pub lift_off_at: Option<DateTime<Utc>>,
    /// Number of people in the group.
    pub size: i32,
    pub links: JumpGroupMediaLinks,
}

/// Jump group info (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpGroupMediaLink {
    pub href: String,
    pub lift_off_at: Option<DateTime<Utc>>,
    pub size: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpGroupMediaLinks {
    pub aircraft: AircraftMediaLink,
    pub dropzone: DropzoneMediaLink,
}

/// Request payload for creating and updating a jump group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpGroupForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub aircraft_id: i64,
    pub dropzone_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift_off_at: Option<DateTime<Utc>>,
    pub size: i32,
}
