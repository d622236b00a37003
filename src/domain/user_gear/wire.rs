//! Wire types for gear owned by a user.

use serde::{Deserialize, Serialize};

use crate::domain::gear::wire::GearMedia;

/// A user's own piece of gear (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGearMedia {
    pub gear: GearMedia,
    /// Comment or note by the owner.
    pub comment: String,
    pub jumps_tracked: i64,
    pub jumps_claimed: i64,
    /// Owner-specific properties, like canopy area or last reserve repack.
    pub properties: serde_json::Value,
    pub rating: f64,
}

/// User gear (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGearMediaLink {
    pub href: String,
    pub image: String,
    pub name: String,
}

/// Request payload for `POST /users/{user_id}/gear`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGearForm {
    pub gear_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumps_claimed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}
