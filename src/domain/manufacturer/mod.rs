//! Manufacturer domain — gear makers.

pub mod client;
pub mod wire;

pub use wire::{ManufacturerForm, ManufacturerMedia, ManufacturerMediaLink, ManufacturerUpdateForm};

/// `/manufacturers`
pub fn collection_path() -> String {
    "/manufacturers".to_string()
}

/// `/manufacturers/{manufacturer_id}`
pub fn item_path(manufacturer_id: impl std::fmt::Display) -> String {
    format!("/manufacturers/{}", manufacturer_id)
}
