//! Wire types for the gear catalog.

use serde::{Deserialize, Serialize};

use crate::domain::manufacturer::wire::ManufacturerMediaLink;

/// Gear info (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearMedia {
    pub id: i64,
    pub href: String,
    /// Name of the gear, e.g. `Fire 2`.
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: i32,
    pub links: GearMediaLinks,
}

/// Gear info (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearMediaLink {
    pub href: String,
    pub image: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearMediaLinks {
    pub manufacturer: ManufacturerMediaLink,
}

/// Request payload for `POST /gears`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearForm {
    pub name: String,
    pub manufacturer_id: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form properties, like available canopy sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// Request payload for `PATCH /gears/{gear_id}` and `PATCH /users/{user_id}/gear/{gear_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearUpdateForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}
