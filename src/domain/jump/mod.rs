//! Jump domain — jumps logged by a user.

pub mod client;
pub mod wire;

pub use wire::{JumpForm, JumpMedia, JumpMediaLink, JumpMediaLinks, JumpUpdateForm};

/// `/users/{user_id}/jumps`
pub fn collection_path(user_id: impl std::fmt::Display) -> String {
    format!("/users/{}/jumps", user_id)
}

/// `/users/{user_id}/jumps/{jump_id}`
pub fn item_path(user_id: impl std::fmt::Display, jump_id: impl std::fmt::Display) -> String {
    format!("/users/{}/jumps/{}", user_id, jump_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_interpolate_ids_verbatim() {
        assert_eq!(collection_path(7), "/users/7/jumps");
        assert_eq!(item_path("_me", 12), "/users/_me/jumps/12");
        assert_eq!(item_path("a b", "c/d"), "/users/a b/jumps/c/d");
    }
}
