//! # Fallkeeper SDK
//!
//! A Rust client for the Fallkeeper skydiving log API: users, jumps, gear,
//! dropzones, aircraft.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Error taxonomy, shared query types, domain wire types
//! 2. **HTTP** — `FallkeeperHttp`: config merge, auth header overlay, transport, timeout race
//! 3. **Auth** — Login/registration storing the session header
//! 4. **High-Level Client** — `FallkeeperClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fallkeeper_sdk::prelude::*;
//!
//! let client = FallkeeperClient::builder()
//!     .scheme("https")
//!     .host("api.fallkeeper.example")
//!     .build()?;
//!
//! let dropzones = client.dropzones().list(&ListQuery::new().limit(10)).await?;
//! let me = client.users().me().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared query types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): paths, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Default connection settings.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request executor, transport collaborator and timeout race.
pub mod http;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Authentication: login, registration, session header.
pub mod auth;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FallkeeperClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{ListQuery, View};

    // Domain types
    pub use crate::domain::aircraft::{AircraftForm, AircraftMedia, AircraftUpdateForm};
    pub use crate::domain::dropzone::{DropzoneForm, DropzoneMedia, DropzoneUpdateForm};
    pub use crate::domain::gear::{GearForm, GearMedia, GearUpdateForm};
    pub use crate::domain::jump::{JumpForm, JumpMedia, JumpUpdateForm};
    pub use crate::domain::jump_group::{JumpGroupForm, JumpGroupMedia};
    pub use crate::domain::location::LocationMedia;
    pub use crate::domain::manufacturer::{
        ManufacturerForm, ManufacturerMedia, ManufacturerUpdateForm,
    };
    pub use crate::domain::status::ApiStatus;
    pub use crate::domain::user::{UserMedia, UserMediaPrivate, UserUpdatePayload};
    pub use crate::domain::user_gear::{UserGearForm, UserGearMedia};

    // Auth
    pub use crate::auth::RegisterPayload;

    // Errors
    pub use crate::error::{ApiError, ErrorKind, SdkError};

    // Network
    pub use crate::network::{DEFAULT_HOST, DEFAULT_SCHEME, DEFAULT_TIMEOUT};

    // HTTP layer
    pub use crate::http::{
        FallkeeperHttp, Headers, Method, RawResponse, RequestConfig, RequestOptions, Transport,
        TransportFailure,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{
        AircraftsClient, AuthClient, DropzonesClient, FallkeeperClient, FallkeeperClientBuilder,
        GearsClient, JumpGroupsClient, JumpsClient, LocationsClient, ManufacturersClient,
        StatusClient, UserGearClient, UsersClient,
    };
}
