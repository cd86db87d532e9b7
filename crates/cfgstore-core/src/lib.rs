//! Core of the cfgstore configuration-value store.
//!
//! Holds the shared application state, the value resolution engine, and the
//! request plumbing (middleware and extractors) used by the feature crates.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod middleware;
pub mod prelude;
pub mod resolver;

pub use app::{App, AppBuilderOpts, AppState, VERSION};
pub use extract::{CsJson, CsPath, CsQuery, OptionalRequestId, RequestId};
pub use resolver::ValueResolver;

// vim: ts=4
