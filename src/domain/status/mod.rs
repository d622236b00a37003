//! API status.

pub mod client;
pub mod wire;

pub use wire::ApiStatus;

/// `/`
pub fn status_path() -> String {
    "/".to_string()
}
