//! Adapter that stores configuration definitions and their overrides.
//!
//! A definition and its override set are one aggregate: implementations must
//! create, replace and remove them together so a definition never exists
//! without an override set (and vice versa).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// Lists all configuration definitions, in no particular order
	async fn list_configs(&self) -> CsResult<Vec<ConfigDef>>;

	/// Upserts a definition by identity.
	///
	/// An existing override set is preserved; a new identity starts with an
	/// empty one. Last write wins.
	async fn add_config(&self, def: &ConfigDef) -> CsResult<()>;

	/// Upserts a definition by identity and clears its override set
	async fn register_config(&self, def: &ConfigDef) -> CsResult<()>;

	/// Reads a definition. Fails with `Error::NotFound` if absent.
	async fn get_config(&self, id: &ConfigId) -> CsResult<ConfigDef>;

	/// Removes a definition together with its overrides. No-op if absent.
	async fn delete_config(&self, id: &ConfigId) -> CsResult<()>;

	/// Lists the overrides of a config. Fails with `Error::NotFound` if the
	/// config is absent.
	async fn list_overrides(&self, id: &ConfigId) -> CsResult<Vec<Override>>;

	/// Upserts an override by key. Fails with `Error::NotFound` if the config
	/// is absent.
	async fn add_override(&self, id: &ConfigId, ov: &Override) -> CsResult<()>;

	/// Reads an override. Fails with `Error::NotFound` if the config is
	/// absent, returns `None` if only the key is.
	async fn get_override(&self, id: &ConfigId, key: &OverrideKey) -> CsResult<Option<Override>>;

	/// Removes an override. No-op if the config or the key is absent.
	async fn delete_override(&self, id: &ConfigId, key: &OverrideKey) -> CsResult<()>;
}

// vim: ts=4
