use std::{env, sync::Arc, time::Duration};

use cfgstore::error::{CsResult, Error};
use cfgstore_store_adapter_memory::StoreAdapterMemory;

pub struct Config {
	pub listen: String,
	pub request_timeout: Duration,
}

impl Config {
	fn from_env() -> CsResult<Self> {
		let listen = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
		let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
			Ok(secs) => Duration::from_secs(secs.trim().parse().map_err(|_| {
				Error::InvalidInput(format!("REQUEST_TIMEOUT_SECS is not a number: {}", secs))
			})?),
			Err(_) => Duration::from_secs(30),
		};

		Ok(Config { listen, request_timeout })
	}
}

#[tokio::main]
async fn main() -> CsResult<()> {
	let config = Config::from_env()?;

	let mut builder = cfgstore::AppBuilder::new();
	builder
		.listen(config.listen)
		.request_timeout(config.request_timeout)
		.store_adapter(Arc::new(StoreAdapterMemory::new()));
	builder.run().await
}

// vim: ts=4
