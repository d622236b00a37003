//! Jump group domain — people who jumped from the same aircraft load.

pub mod client;
pub mod wire;

pub use wire::{JumpGroupForm, JumpGroupMedia, JumpGroupMediaLink, JumpGroupMediaLinks};

/// `/jump_groups`
pub fn collection_path() -> String {
    "/jump_groups".to_string()
}

/// `/jump_groups/{jump_group_id}`
pub fn item_path(jump_group_id: impl std::fmt::Display) -> String {
    format!("/jump_groups/{}", jump_group_id)
}
