//! HTTP endpoints for configurations, overrides and value resolution

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod handler;
mod prelude;
pub mod types;
pub mod value;

// vim: ts=4
