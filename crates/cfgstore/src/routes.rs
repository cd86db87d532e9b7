//! Router assembly

use std::any::Any;
use std::time::Duration;

use axum::{
	Router,
	body::Body,
	http::Request,
	middleware,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use tower_http::{
	catch_panic::CatchPanicLayer,
	trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span, info_span};

use crate::prelude::*;
use cfgstore_config::{handler, value};
use cfgstore_core::extract::RequestId;
use cfgstore_core::middleware::{request_id, request_timeout};

fn make_span(req: &Request<Body>) -> Span {
	let req_id = req.extensions().get::<RequestId>().map_or("", |r| r.0.as_str());
	info_span!("request", method = %req.method(), uri = %req.uri(), req_id = %req_id)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
	let detail = if let Some(s) = err.downcast_ref::<String>() {
		s.clone()
	} else if let Some(s) = err.downcast_ref::<&str>() {
		(*s).to_string()
	} else {
		"unknown panic".to_string()
	};

	Error::Internal(format!("panic recovered: {}", detail)).into_response()
}

async fn route_not_found() -> Error {
	Error::RouteNotFound
}

async fn method_not_allowed() -> Error {
	Error::MethodNotAllowed
}

/// Wrap a router in the request handling stack.
///
/// Innermost first: request timeout, panic recovery, tracing, request id.
pub fn layers<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router
		.layer(middleware::from_fn_with_state(timeout, request_timeout))
		.layer(CatchPanicLayer::custom(handle_panic))
		.layer(
			TraceLayer::new_for_http()
				.make_span_with(make_span)
				.on_response(DefaultOnResponse::new().level(Level::INFO)),
		)
		.layer(middleware::from_fn(request_id))
}

pub fn init(app: App) -> Router {
	let router = Router::new()
		// Configs
		.route("/configs", get(handler::list_configs).post(handler::post_config))
		.route("/configs/{service}/{name}", get(handler::get_config).delete(handler::delete_config))
		// Overrides
		.route(
			"/configs/{service}/{name}/overrides",
			get(handler::list_overrides).post(handler::post_override),
		)
		.route(
			"/configs/{service}/{name}/overrides/{entity_type}/{entity_id}",
			get(handler::get_override).delete(handler::delete_override),
		)
		// Resolution
		.route("/configs/{service}/{name}/value", post(value::post_config_value))
		.fallback(route_not_found)
		.method_not_allowed_fallback(method_not_allowed);

	layers(router, app.opts.request_timeout).with_state(app)
}

// vim: ts=4
