//! cfgstore is a configuration-value store.
//!
//! Services register named configurations with a default value, attach
//! per-entity overrides (a user, a group, ...), and ask for the value that
//! applies to a given set of entity attributes.
//!
//! # Crates
//!
//! - `cfgstore-types`: data model, errors, and the `StoreAdapter` trait
//! - `cfgstore-core`: application state and the value resolver
//! - `cfgstore-config`: HTTP handlers
//! - this crate: app builder, router, and server

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod prelude;
pub mod routes;

pub use app::AppBuilder;
pub use cfgstore_core::{App, AppBuilderOpts, AppState, VERSION};
pub use cfgstore_types::{error, store_adapter, types};

// vim: ts=4
