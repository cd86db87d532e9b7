//! Config and override management handlers

use axum::{
	Json,
	extract::State,
	http::StatusCode,
};

use crate::prelude::*;
use crate::types::{
	GetConfigResponse, GetOverrideResponse, ListConfigsResponse, ListOverridesResponse,
	MessageResponse, PostConfigQuery, PostConfigRequest, PostOverrideRequest,
};
use cfgstore_core::extract::{CsJson, CsPath, CsQuery, OptionalRequestId};

/// GET /configs
pub async fn list_configs(
	State(app): State<App>,
) -> CsResult<(StatusCode, Json<ListConfigsResponse>)> {
	let configs = app.store_adapter.list_configs().await?;
	debug!(count = configs.len(), "Listed configs");

	Ok((StatusCode::OK, Json(ListConfigsResponse { configs })))
}

/// POST /configs
///
/// Upserts the definition. Existing overrides are kept unless
/// `?replaceOverrides=true` is given.
pub async fn post_config(
	State(app): State<App>,
	CsQuery(query): CsQuery<PostConfigQuery>,
	OptionalRequestId(req_id): OptionalRequestId,
	CsJson(req): CsJson<PostConfigRequest>,
) -> CsResult<(StatusCode, Json<MessageResponse>)> {
	req.config.id.validate()?;

	if query.replace_overrides {
		app.store_adapter.register_config(&req.config).await?;
	} else {
		app.store_adapter.add_config(&req.config).await?;
	}

	info!(
		req_id = req_id.as_deref().unwrap_or_default(),
		config = %req.config.id,
		typ = %req.config.typ,
		replace_overrides = query.replace_overrides,
		"Config saved"
	);

	Ok((StatusCode::OK, Json(MessageResponse::success())))
}

/// GET /configs/{service}/{name}
pub async fn get_config(
	State(app): State<App>,
	CsPath((service, name)): CsPath<(String, String)>,
) -> CsResult<(StatusCode, Json<GetConfigResponse>)> {
	let id = ConfigId::new(service, name)?;
	let config = app.store_adapter.get_config(&id).await?;

	Ok((StatusCode::OK, Json(GetConfigResponse { config })))
}

/// DELETE /configs/{service}/{name}
pub async fn delete_config(
	State(app): State<App>,
	CsPath((service, name)): CsPath<(String, String)>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CsResult<(StatusCode, Json<MessageResponse>)> {
	let id = ConfigId::new(service, name)?;
	app.store_adapter.delete_config(&id).await?;

	info!(req_id = req_id.as_deref().unwrap_or_default(), config = %id, "Config deleted");

	Ok((StatusCode::OK, Json(MessageResponse::success())))
}

/// GET /configs/{service}/{name}/overrides
pub async fn list_overrides(
	State(app): State<App>,
	CsPath((service, name)): CsPath<(String, String)>,
) -> CsResult<(StatusCode, Json<ListOverridesResponse>)> {
	let id = ConfigId::new(service, name)?;
	let overrides = app.store_adapter.list_overrides(&id).await?;
	debug!(config = %id, count = overrides.len(), "Listed overrides");

	Ok((StatusCode::OK, Json(ListOverridesResponse { overrides })))
}

/// POST /configs/{service}/{name}/overrides
pub async fn post_override(
	State(app): State<App>,
	CsPath((service, name)): CsPath<(String, String)>,
	OptionalRequestId(req_id): OptionalRequestId,
	CsJson(req): CsJson<PostOverrideRequest>,
) -> CsResult<(StatusCode, Json<MessageResponse>)> {
	let id = ConfigId::new(service, name)?;
	app.store_adapter.add_override(&id, &req.ov).await?;

	info!(
		req_id = req_id.as_deref().unwrap_or_default(),
		config = %id,
		entity = %req.ov.key,
		"Override saved"
	);

	Ok((StatusCode::OK, Json(MessageResponse::success())))
}

/// GET /configs/{service}/{name}/overrides/{entityType}/{entityId}
///
/// A missing config and a missing override answer 404 with different codes.
pub async fn get_override(
	State(app): State<App>,
	CsPath((service, name, entity_type, entity_id)): CsPath<(String, String, String, String)>,
) -> CsResult<(StatusCode, Json<GetOverrideResponse>)> {
	let id = ConfigId::new(service, name)?;
	let key = OverrideKey::new(entity_type, entity_id);

	let ov = app.store_adapter.get_override(&id, &key).await?.ok_or(Error::OverrideNotFound)?;

	Ok((StatusCode::OK, Json(GetOverrideResponse { ov })))
}

/// DELETE /configs/{service}/{name}/overrides/{entityType}/{entityId}
pub async fn delete_override(
	State(app): State<App>,
	CsPath((service, name, entity_type, entity_id)): CsPath<(String, String, String, String)>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CsResult<(StatusCode, Json<MessageResponse>)> {
	let id = ConfigId::new(service, name)?;
	let key = OverrideKey::new(entity_type, entity_id);
	app.store_adapter.delete_override(&id, &key).await?;

	info!(
		req_id = req_id.as_deref().unwrap_or_default(),
		config = %id,
		entity = %key,
		"Override deleted"
	);

	Ok((StatusCode::OK, Json(MessageResponse::success())))
}

// vim: ts=4
