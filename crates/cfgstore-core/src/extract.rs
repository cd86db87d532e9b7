//! Custom extractors for cfgstore requests
//!
//! Every rejection is an `Error`, so extraction failures answer with the same
//! JSON error body as handler failures.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::prelude::*;

// RequestId //
//***********//
/// Request ID for tracing and debugging
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl<S> FromRequestParts<S> for RequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(req_id) = parts.extensions.get::<RequestId>().cloned() {
			Ok(req_id)
		} else {
			Err(Error::Internal("request id middleware not installed".to_string()))
		}
	}
}

/// Optional Request ID extractor - always succeeds, returns None if not available
#[derive(Clone, Debug)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts.extensions.get::<RequestId>().map(|r| r.0.clone());
		Ok(OptionalRequestId(req_id))
	}
}

// CsJson //
//********//
/// JSON body extractor.
///
/// The body is decoded regardless of the `Content-Type` header; malformed
/// payloads are reported as `Error::DecodeError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsJson<T>(pub T);

impl<T, S> FromRequest<S> for CsJson<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let body = Bytes::from_request(req, state)
			.await
			.map_err(|e| Error::DecodeError(format!("failed to read request body: {}", e)))?;
		let value = serde_json::from_slice::<T>(&body)?;
		Ok(CsJson(value))
	}
}

// CsQuery //
//*********//
/// Query string extractor, malformed parameters are `Error::DecodeError`
#[derive(Debug, Clone, Copy, Default)]
pub struct CsQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for CsQuery<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Query(value) = Query::<T>::from_request_parts(parts, state)
			.await
			.map_err(|e| Error::DecodeError(e.body_text()))?;
		Ok(CsQuery(value))
	}
}

// CsPath //
//********//
/// Path parameter extractor.
///
/// Undecodable segments (e.g. invalid UTF-8 after percent-decoding) are
/// `Error::DecodeError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsPath<T>(pub T);

impl<T, S> FromRequestParts<S> for CsPath<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Path(value) = Path::<T>::from_request_parts(parts, state)
			.await
			.map_err(|e| Error::DecodeError(e.body_text()))?;
		Ok(CsPath(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::Request as HttpRequest;

	fn parts(uri: &str) -> Parts {
		HttpRequest::builder().uri(uri).body(()).unwrap().into_parts().0
	}

	#[tokio::test]
	async fn test_request_id_from_extensions() {
		let mut parts = parts("/configs");
		parts.extensions.insert(RequestId("req-1".to_string()));

		let RequestId(req_id) = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
		assert_eq!(req_id, "req-1");
		let OptionalRequestId(opt) =
			OptionalRequestId::from_request_parts(&mut parts, &()).await.unwrap();
		assert_eq!(opt.as_deref(), Some("req-1"));
	}

	#[tokio::test]
	async fn test_missing_request_id() {
		let mut parts = parts("/configs");

		let result = RequestId::from_request_parts(&mut parts, &()).await;
		assert!(matches!(result, Err(Error::Internal(_))));
		let OptionalRequestId(opt) =
			OptionalRequestId::from_request_parts(&mut parts, &()).await.unwrap();
		assert!(opt.is_none());
	}

	#[derive(Debug, serde::Deserialize)]
	struct Flag {
		#[serde(default)]
		flag: bool,
	}

	#[tokio::test]
	async fn test_query_rejection_is_decode_error() {
		let mut ok = parts("/configs?flag=true");
		let CsQuery(flag) = CsQuery::<Flag>::from_request_parts(&mut ok, &()).await.unwrap();
		assert!(flag.flag);

		let mut bad = parts("/configs?flag=yes");
		let result = CsQuery::<Flag>::from_request_parts(&mut bad, &()).await;
		assert!(matches!(result, Err(Error::DecodeError(_))));
	}
}

// vim: ts=4
