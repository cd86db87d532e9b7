//! In-memory implementation of the cfgstore `StoreAdapter`.
//!
//! Every configuration is one aggregate entry (definition plus override map)
//! keyed by its composite identity, and all operations run inside a single
//! `parking_lot::RwLock`. Each adapter call is therefore atomic: reads share
//! the lock, mutations hold it exclusively. Nothing is persisted.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

use cfgstore_types::prelude::*;
use cfgstore_types::store_adapter::StoreAdapter;

/// A definition and the overrides it owns
#[derive(Debug)]
struct ConfigEntry {
	def: ConfigDef,
	overrides: HashMap<OverrideKey, Box<str>>,
}

impl ConfigEntry {
	fn new(def: ConfigDef) -> Self {
		ConfigEntry { def, overrides: HashMap::new() }
	}
}

#[derive(Debug, Default)]
pub struct StoreAdapterMemory {
	configs: RwLock<HashMap<ConfigId, ConfigEntry>>,
}

impl StoreAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of registered configurations
	pub fn len(&self) -> usize {
		self.configs.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.configs.read().is_empty()
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterMemory {
	async fn list_configs(&self) -> CsResult<Vec<ConfigDef>> {
		let configs = self.configs.read();
		Ok(configs.values().map(|entry| entry.def.clone()).collect())
	}

	async fn add_config(&self, def: &ConfigDef) -> CsResult<()> {
		def.id.validate()?;

		let mut configs = self.configs.write();
		match configs.get_mut(&def.id) {
			Some(entry) => {
				entry.def = def.clone();
				debug!(config = %def.id, overrides = entry.overrides.len(), "Updated config definition");
			}
			None => {
				configs.insert(def.id.clone(), ConfigEntry::new(def.clone()));
				debug!(config = %def.id, "Added config definition");
			}
		}
		Ok(())
	}

	async fn register_config(&self, def: &ConfigDef) -> CsResult<()> {
		def.id.validate()?;

		let mut configs = self.configs.write();
		if let Some(prev) = configs.insert(def.id.clone(), ConfigEntry::new(def.clone())) {
			info!(config = %def.id, dropped = prev.overrides.len(), "Re-registered config, overrides cleared");
		}
		Ok(())
	}

	async fn get_config(&self, id: &ConfigId) -> CsResult<ConfigDef> {
		let configs = self.configs.read();
		configs.get(id).map(|entry| entry.def.clone()).ok_or(Error::NotFound)
	}

	async fn delete_config(&self, id: &ConfigId) -> CsResult<()> {
		let mut configs = self.configs.write();
		if let Some(entry) = configs.remove(id) {
			debug!(config = %id, overrides = entry.overrides.len(), "Deleted config");
		}
		Ok(())
	}

	async fn list_overrides(&self, id: &ConfigId) -> CsResult<Vec<Override>> {
		let configs = self.configs.read();
		let entry = configs.get(id).ok_or(Error::NotFound)?;
		Ok(entry
			.overrides
			.iter()
			.map(|(key, value)| Override::new(key.clone(), value.clone()))
			.collect())
	}

	async fn add_override(&self, id: &ConfigId, ov: &Override) -> CsResult<()> {
		let mut configs = self.configs.write();
		let entry = configs.get_mut(id).ok_or(Error::NotFound)?;
		ov.key.validate()?;
		entry.overrides.insert(ov.key.clone(), ov.value.clone());
		Ok(())
	}

	async fn get_override(&self, id: &ConfigId, key: &OverrideKey) -> CsResult<Option<Override>> {
		let configs = self.configs.read();
		let entry = configs.get(id).ok_or(Error::NotFound)?;
		Ok(entry.overrides.get(key).map(|value| Override::new(key.clone(), value.clone())))
	}

	async fn delete_override(&self, id: &ConfigId, key: &OverrideKey) -> CsResult<()> {
		let mut configs = self.configs.write();
		if let Some(entry) = configs.get_mut(id) {
			entry.overrides.remove(key);
		}
		Ok(())
	}
}

// vim: ts=4
