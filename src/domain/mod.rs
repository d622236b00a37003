//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — path builders for the resource's endpoints
//! - `wire.rs` — serde structs matching request payloads and responses
//! - `client.rs` — sub-client with one method per endpoint

pub mod aircraft;
pub mod dropzone;
pub mod gear;
pub mod jump;
pub mod jump_group;
pub mod location;
pub mod manufacturer;
pub mod status;
pub mod user;
pub mod user_gear;
