//! Error type shared by the store, the resolver and the HTTP layer.

use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};

pub type CsResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The requested configuration identity does not exist
	NotFound,
	/// The configuration exists but has no override for the requested key
	OverrideNotFound,
	/// Required fields missing or empty
	InvalidInput(String),
	/// Malformed request payload, query or path
	DecodeError(String),
	/// No route matches the request path
	RouteNotFound,
	MethodNotAllowed,
	/// The request did not complete within the configured timeout
	Timeout,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Stable machine-readable code sent in error bodies
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-CONFIG-NOT-FOUND",
			Error::OverrideNotFound => "E-OVERRIDE-NOT-FOUND",
			Error::InvalidInput(_) => "E-INVALID-INPUT",
			Error::DecodeError(_) => "E-DECODE",
			Error::RouteNotFound => "E-ROUTE-NOT-FOUND",
			Error::MethodNotAllowed => "E-METHOD-NOT-ALLOWED",
			Error::Timeout => "E-TIMEOUT",
			Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			Error::NotFound | Error::OverrideNotFound | Error::RouteNotFound => {
				StatusCode::NOT_FOUND
			}
			Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			Error::Timeout => StatusCode::REQUEST_TIMEOUT,
			Error::InvalidInput(_) | Error::DecodeError(_) => StatusCode::BAD_REQUEST,
			Error::Internal(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "config not found"),
			Error::OverrideNotFound => write!(f, "override not found"),
			Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
			Error::DecodeError(msg) => write!(f, "failed to decode request: {}", msg),
			Error::RouteNotFound => write!(f, "no such route"),
			Error::MethodNotAllowed => write!(f, "method not allowed"),
			Error::Timeout => write!(f, "request timed out"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::DecodeError(err.to_string())
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status();

		// Internal details stay in the log, clients get a generic message
		let message = if status.is_server_error() {
			tracing::error!(error = %self, "Internal error while handling request");
			"Internal Server Error".to_string()
		} else {
			tracing::warn!(error = %self, code = self.code(), "Request failed");
			self.to_string()
		};

		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});

		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::NotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::OverrideNotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::InvalidInput("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::DecodeError("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::RouteNotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
		assert_eq!(Error::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
		assert_eq!(Error::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_not_found_codes_are_distinct() {
		assert_ne!(Error::NotFound.code(), Error::OverrideNotFound.code());
		assert_ne!(Error::NotFound.code(), Error::RouteNotFound.code());
	}

	#[test]
	fn test_json_error_maps_to_decode_error() {
		let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		assert!(matches!(Error::from(err), Error::DecodeError(_)));
	}
}

// vim: ts=4
