//! User gear domain — the equipment a user owns, linked to catalog gear.

pub mod client;
pub mod wire;

pub use wire::{UserGearForm, UserGearMedia, UserGearMediaLink};

/// `/users/{user_id}/gear`
pub fn collection_path(user_id: impl std::fmt::Display) -> String {
    format!("/users/{}/gear", user_id)
}

/// `/users/{user_id}/gear/{gear_id}`
pub fn item_path(user_id: impl std::fmt::Display, gear_id: impl std::fmt::Display) -> String {
    format!("/users/{}/gear/{}", user_id, gear_id)
}
