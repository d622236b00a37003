//! HTTP layer — `FallkeeperHttp`, request configuration, transport, timeout race.

pub mod classify;
pub mod client;
pub mod config;
pub mod timeout;
pub mod transport;

pub use classify::classify;
pub use client::FallkeeperHttp;
pub use config::{merge_deep, set_header, Headers, Method, RequestConfig, RequestOptions};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{RawResponse, Transport, TransportFailure};
