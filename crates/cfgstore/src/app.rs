//! App builder - constructs and runs the cfgstore application

use std::{sync::Arc, time::Duration};

use crate::prelude::*;
use crate::routes;
use cfgstore_core::app::{AppBuilderOpts, AppState, VERSION};
use cfgstore_types::store_adapter::StoreAdapter;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	store_adapter: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// A subscriber may already be installed by an embedding application
		let _ = tracing_subscriber::fmt()
			.with_env_filter(
				tracing_subscriber::EnvFilter::try_from_default_env()
					.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
			)
			.with_target(false)
			.try_init();
		AppBuilder { opts: AppBuilderOpts::default(), store_adapter: None }
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn request_timeout(&mut self, request_timeout: Duration) -> &mut Self {
		self.opts.request_timeout = request_timeout;
		self
	}

	// Adapters
	pub fn store_adapter(&mut self, store_adapter: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store_adapter = Some(store_adapter);
		self
	}

	/// Assemble the application state without starting a listener
	pub fn build(self) -> CsResult<App> {
		let Some(store_adapter) = self.store_adapter else {
			error!("FATAL: No store adapter configured");
			return Err(Error::Internal("No store adapter configured".to_string()));
		};

		Ok(Arc::new(AppState::new(self.opts, store_adapter)))
	}

	pub async fn run(self) -> CsResult<()> {
		info!("cfgstore V{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			e
		})?;
		info!(
			"Listening on HTTP {} (request timeout {:?})",
			app.opts.listen, app.opts.request_timeout
		);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

		info!("Server stopped");
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => info!("Received Ctrl-C, shutting down"),
		Err(e) => {
			warn!("Failed to listen for Ctrl-C, graceful shutdown disabled: {}", e);
			std::future::pending::<()>().await;
		}
	}
}

// vim: ts=4
