//! Wire types for user profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::location::wire::LocationMediaLink;

/// Public user profile (default view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMedia {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Country code.
    pub country: String,
    /// Skydiving license (A, B, C, ...).
    pub license: String,
    /// Name of the profile picture.
    pub profile_image: String,
    pub created_at: Option<DateTime<Utc>>,
    pub jumps_tracked: i64,
    pub jumps_claimed: i64,
    pub base_jumps_tracked: i64,
    pub base_jumps_claimed: i64,
    pub wingsuit_jumps_tracked: i64,
    pub wingsuit_jumps_claimed: i64,
    /// Total freefall, in seconds.
    pub freefall_duration_tracked: f64,
    pub freefall_duration_claimed: f64,
    pub wing_load: f64,
    pub links: UserMediaLinks,
}

/// Own profile of the authenticated user (private view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMediaPrivate {
    #[serde(flatten)]
    pub profile: UserMedia,
    pub email: String,
}

/// User (link view).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMediaLink {
    pub href: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMediaLinks {
    pub location: LocationMediaLink,
}

/// Request payload for `PATCH /users/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumps_claimed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_jumps_claimed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wingsuit_jumps_claimed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freefall_duration_claimed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wing_load: Option<f64>,
}
