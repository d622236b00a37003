//! Dropzone domain — skydiving centres, their aircraft and location.

pub mod client;
pub mod wire;

pub use wire::{DropzoneForm, DropzoneMedia, DropzoneMediaLink, DropzoneMediaLinks, DropzoneUpdateForm};

/// `/dropzones`
pub fn collection_path() -> String {
    "/dropzones".to_string()
}

/// `/dropzones/{dropzone_id}`
pub fn item_path(dropzone_id: impl std::fmt::Display) -> String {
    format!("/dropzones/{}", dropzone_id)
}
