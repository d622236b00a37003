//! Wire types for the API status endpoint.

use serde::{Deserialize, Serialize};

/// Response of `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiStatus {
    pub status: String,
}
