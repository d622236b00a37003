//! Authentication — login, registration, and the session's auth header.
//!
//! The API hands out a JWT in the `Authorization` response header of a
//! successful login or registration. The auth sub-client stores that header
//! on the client, after which it is overlaid on every request. There is no
//! refresh: when the token expires requests fail with
//! `ErrorKind::Unauthorized` and the caller logs in again.

pub mod client;

use serde::{Deserialize, Serialize};

/// Name of the header carrying the session token.
pub const AUTHORIZATION: &str = "Authorization";

/// `/auth/login`
pub fn login_path() -> String {
    "/auth/login".to_string()
}

/// `/auth/register`
pub fn register_path() -> String {
    "/auth/register".to_string()
}

/// Request payload for `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Country code.
    pub country: String,
}
