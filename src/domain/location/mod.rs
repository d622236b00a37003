//! Location domain — read-only geographic places dropzones and users refer to.

pub mod client;
pub mod wire;

pub use wire::{LocationMedia, LocationMediaLink, LocationPayload};

/// `/locations`
pub fn collection_path() -> String {
    "/locations".to_string()
}

/// `/locations/{location_id}`
pub fn item_path(location_id: impl std::fmt::Display) -> String {
    format!("/locations/{}", location_id)
}
