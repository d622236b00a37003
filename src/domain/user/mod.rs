//! User domain — skydiver profiles.

pub mod client;
pub mod wire;

pub use wire::{UserMedia, UserMediaLink, UserMediaLinks, UserMediaPrivate, UserUpdatePayload};

/// `/users`
pub fn collection_path() -> String {
    "/users".to_string()
}

/// `/users/{user_id}`
pub fn item_path(user_id: impl std::fmt::Display) -> String {
    format!("/users/{}", user_id)
}

/// `/users/_me`
pub fn me_path() -> String {
    "/users/_me".to_string()
}
