//! Swift service client with configuration management.
//!
//! This module provides the connection handle used by every object operation:
//! a validated endpoint/token configuration and a cheap-to-clone client that
//! builds authenticated requests against `/{container}` and
//! `/{container}/{object}` paths.

mod config;
mod swift_client;

pub use config::SwiftConfig;
pub use swift_client::SwiftClient;

pub(crate) use swift_client::expect_status;
