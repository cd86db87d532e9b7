//! Value resolution
//!
//! The effective value of a configuration is its default, unless one of the
//! caller's attributes has an override. Attributes are scanned in caller
//! order and the first one with an override wins; later attributes are not
//! consulted. There is no precedence between entity types beyond that order.

use std::sync::Arc;

use cfgstore_types::store_adapter::StoreAdapter;

use crate::prelude::*;

pub struct ValueResolver {
	store: Arc<dyn StoreAdapter>,
}

impl ValueResolver {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store }
	}

	/// Resolve the effective value of `id` for the given attributes.
	///
	/// Fails with `Error::NotFound` if the config does not exist, including
	/// when it is deleted while the attributes are being scanned.
	pub async fn resolve_value(
		&self,
		id: &ConfigId,
		attributes: &Attributes,
	) -> CsResult<ResolvedValue> {
		let def = self.store.get_config(id).await?;

		for key in attributes {
			if let Some(ov) = self.store.get_override(id, key).await? {
				debug!(config = %id, entity = %key, "Resolved value from override");
				return Ok(ResolvedValue { typ: def.typ, value: ov.value });
			}
		}

		debug!(config = %id, attributes = attributes.len(), "Resolved default value");
		Ok(ResolvedValue { typ: def.typ, value: def.default_value })
	}
}

impl std::fmt::Debug for ValueResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ValueResolver").field("store", &self.store).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use cfgstore_store_adapter_memory::StoreAdapterMemory;

	async fn setup() -> (ValueResolver, Arc<StoreAdapterMemory>, ConfigId) {
		let store = Arc::new(StoreAdapterMemory::new());
		let id = ConfigId::new("service1", "config1").unwrap();
		store.add_config(&ConfigDef::new(id.clone(), "string", "value1")).await.unwrap();
		(ValueResolver::new(store.clone()), store, id)
	}

	async fn add_override(store: &StoreAdapterMemory, id: &ConfigId, typ: &str, eid: &str, value: &str) {
		store.add_override(id, &Override::new(OverrideKey::new(typ, eid), value)).await.unwrap();
	}

	#[tokio::test]
	async fn test_default_with_no_attributes() {
		let (resolver, store, id) = setup().await;
		add_override(&store, &id, "user", "123", "override1").await;

		let resolved = resolver.resolve_value(&id, &Attributes::new()).await.unwrap();
		assert_eq!(&*resolved.typ, "string");
		assert_eq!(&*resolved.value, "value1");
	}

	#[tokio::test]
	async fn test_single_match() {
		let (resolver, store, id) = setup().await;
		add_override(&store, &id, "user", "123", "override1").await;

		let attrs: Attributes = [("user", "123")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "override1");

		let attrs: Attributes = [("group", "456")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "value1");
	}

	#[tokio::test]
	async fn test_one_of_several_attributes_matches() {
		let (resolver, store, id) = setup().await;
		add_override(&store, &id, "user", "123", "override1").await;
		add_override(&store, &id, "group", "456", "override2").await;

		let attrs: Attributes = [("user", "123"), ("group", "789")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "override1");
	}

	#[tokio::test]
	async fn test_first_match_in_caller_order_wins() {
		let (resolver, store, id) = setup().await;
		add_override(&store, &id, "user", "123", "override1").await;
		add_override(&store, &id, "group", "456", "override2").await;

		let attrs: Attributes = [("group", "456"), ("user", "123")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "override2");

		let attrs: Attributes = [("user", "123"), ("group", "456")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "override1");
	}

	#[tokio::test]
	async fn test_missing_config_is_not_found() {
		let (resolver, _store, _id) = setup().await;
		let missing = ConfigId::new("service1", "missing").unwrap();

		let result = resolver.resolve_value(&missing, &Attributes::new()).await;
		assert!(matches!(result, Err(Error::NotFound)));
	}

	#[tokio::test]
	async fn test_overrides_do_not_leak_between_configs() {
		let (resolver, store, id) = setup().await;
		let other = ConfigId::new("service1", "config2").unwrap();
		store.add_config(&ConfigDef::new(other.clone(), "int", "42")).await.unwrap();
		add_override(&store, &id, "user", "123", "override1").await;

		let attrs: Attributes = [("user", "123")].into_iter().collect();
		let resolved = resolver.resolve_value(&other, &attrs).await.unwrap();
		assert_eq!(&*resolved.typ, "int");
		assert_eq!(&*resolved.value, "42");
	}

	#[tokio::test]
	async fn test_deleted_override_falls_back_to_default() {
		let (resolver, store, id) = setup().await;
		add_override(&store, &id, "user", "123", "override1").await;
		store.delete_override(&id, &OverrideKey::new("user", "123")).await.unwrap();

		let attrs: Attributes = [("user", "123")].into_iter().collect();
		let resolved = resolver.resolve_value(&id, &attrs).await.unwrap();
		assert_eq!(&*resolved.value, "value1");
	}
}

// vim: ts=4
