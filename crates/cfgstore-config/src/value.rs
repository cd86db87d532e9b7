//! Value resolution handler

use axum::{
	Json,
	extract::State,
	http::StatusCode,
};

use crate::prelude::*;
use crate::types::{GetConfigValueRequest, GetConfigValueResponse};
use cfgstore_core::extract::{CsJson, CsPath};

/// POST /configs/{service}/{name}/value
///
/// Resolves the effective value for the attributes in the body, the first
/// attribute (in request order) with an override wins.
pub async fn post_config_value(
	State(app): State<App>,
	CsPath((service, name)): CsPath<(String, String)>,
	CsJson(req): CsJson<GetConfigValueRequest>,
) -> CsResult<(StatusCode, Json<GetConfigValueResponse>)> {
	let id = ConfigId::new(service, name)?;
	let resolved = app.resolver.resolve_value(&id, &req.attributes).await?;

	Ok((StatusCode::OK, Json(resolved)))
}

// vim: ts=4
