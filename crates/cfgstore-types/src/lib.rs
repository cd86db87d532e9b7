//! Shared types, the store adapter trait, and error types for cfgstore.
//!
//! This crate holds everything the resolution engine and the storage
//! adapters agree on. It carries no HTTP routing and no runtime, so adapters
//! and the core can be built and tested without the server.

#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod store_adapter;
pub mod types;

// vim: ts=4
