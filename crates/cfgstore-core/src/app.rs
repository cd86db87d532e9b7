//! App state type

use std::{sync::Arc, time::Duration};

use cfgstore_types::store_adapter::StoreAdapter;

use crate::resolver::ValueResolver;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub store_adapter: Arc<dyn StoreAdapter>,
	pub resolver: ValueResolver,
}

impl AppState {
	pub fn new(opts: AppBuilderOpts, store_adapter: Arc<dyn StoreAdapter>) -> Self {
		let resolver = ValueResolver::new(store_adapter.clone());
		AppState { opts, store_adapter, resolver }
	}
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Upper bound for handling a single request
	pub request_timeout: Duration,
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		AppBuilderOpts { listen: "127.0.0.1:8080".into(), request_timeout: Duration::from_secs(30) }
	}
}

// vim: ts=4
