//! Default connection settings for the Fallkeeper API.

use std::time::Duration;

/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "http";

/// Default host (and port).
pub const DEFAULT_HOST: &str = "localhost:9099";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);
