//! Custom middlewares

use std::time::Duration;

use axum::{
	body::Body,
	extract::State,
	http::{HeaderName, HeaderValue, Request},
	middleware::Next,
	response::{IntoResponse, Response},
};

use crate::extract::RequestId;
use crate::prelude::*;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_REQUEST_ID_LEN: usize = 128;

/// Attach a request id to every request and echo it on the response.
///
/// A client supplied `X-Request-Id` is kept if it is short and printable,
/// otherwise a random one is generated.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
	let req_id = req
		.headers()
		.get(&REQUEST_ID_HEADER)
		.and_then(|h| h.to_str().ok())
		.filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
		.map_or_else(|| uuid::Uuid::new_v4().simple().to_string(), ToString::to_string);

	req.extensions_mut().insert(RequestId(req_id.clone()));

	let mut res = next.run(req).await;
	if let Ok(value) = HeaderValue::from_str(&req_id) {
		res.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
	}
	res
}

/// Abort requests running longer than `timeout` with `Error::Timeout`
pub async fn request_timeout(
	State(timeout): State<Duration>,
	req: Request<Body>,
	next: Next,
) -> Response {
	match tokio::time::timeout(timeout, next.run(req)).await {
		Ok(res) => res,
		Err(_) => Error::Timeout.into_response(),
	}
}

// vim: ts=4
