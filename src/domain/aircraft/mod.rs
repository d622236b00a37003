//! Aircraft domain — aircraft types flown at dropzones.

pub mod client;
pub mod wire;

pub use wire::{AircraftForm, AircraftMedia, AircraftMediaLink, AircraftUpdateForm};

/// `/aircrafts`
pub fn collection_path() -> String {
    "/aircrafts".to_string()
}

/// `/aircrafts/{aircraft_id}`
pub fn item_path(aircraft_id: impl std::fmt::Display) -> String {
    format!("/aircrafts/{}", aircraft_id)
}
