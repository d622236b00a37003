//! Gear domain — the shared catalog of canopies, containers and other equipment.

pub mod client;
pub mod wire;

pub use wire::{GearForm, GearMedia, GearMediaLink, GearMediaLinks, GearUpdateForm};

/// `/gears`
pub fn collection_path() -> String {
    "/gears".to_string()
}

/// `/gears/{gear_id}`
pub fn item_path(gear_id: impl std::fmt::Display) -> String {
    format!("/gears/{}", gear_id)
}
