//! Concurrent access tests for the in-memory store adapter

use std::sync::Arc;

use cfgstore_store_adapter_memory::StoreAdapterMemory;
use cfgstore_types::prelude::*;
use cfgstore_types::store_adapter::StoreAdapter;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_override_writes() {
	let store = Arc::new(StoreAdapterMemory::new());
	let id = ConfigId::new("service1", "config1").expect("valid config id");
	store.add_config(&ConfigDef::new(id.clone(), "string", "value1")).await.expect("add config");

	let mut handles = Vec::new();
	for i in 0..32 {
		let store = store.clone();
		let id = id.clone();
		handles.push(tokio::spawn(async move {
			let ov = Override::new(OverrideKey::new("user", i.to_string()), format!("v{}", i));
			store.add_override(&id, &ov).await
		}));
	}
	for handle in handles {
		handle.await.expect("task join").expect("add override");
	}

	let overrides = store.list_overrides(&id).await.expect("list overrides");
	assert_eq!(overrides.len(), 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_upserts_keep_single_definition() {
	let store = Arc::new(StoreAdapterMemory::new());
	let id = ConfigId::new("service1", "config1").expect("valid config id");

	let mut handles = Vec::new();
	for i in 0..16 {
		let store = store.clone();
		let id = id.clone();
		handles.push(tokio::spawn(async move {
			store.add_config(&ConfigDef::new(id, "string", format!("value{}", i))).await
		}));
	}
	for handle in handles {
		handle.await.expect("task join").expect("add config");
	}

	assert_eq!(store.len(), 1);
	let def = store.get_config(&id).await.expect("get config");
	assert!(def.default_value.starts_with("value"));
	assert!(store.list_overrides(&id).await.expect("list overrides").is_empty());
}

// vim: ts=4
