//! Request and response bodies of the config API

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Body of mutating endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: Box<str>,
}

impl MessageResponse {
	pub fn success() -> Self {
		MessageResponse { message: "Success".into() }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfigsResponse {
	pub configs: Vec<ConfigDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostConfigRequest {
	pub config: ConfigDef,
}

/// Query of `POST /configs`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConfigQuery {
	/// Register from scratch, dropping existing overrides of the identity
	#[serde(default)]
	pub replace_overrides: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetConfigResponse {
	pub config: ConfigDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOverridesResponse {
	pub overrides: Vec<Override>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostOverrideRequest {
	#[serde(rename = "override")]
	pub ov: Override,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOverrideResponse {
	#[serde(rename = "override")]
	pub ov: Override,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetConfigValueRequest {
	#[serde(default)]
	pub attributes: Attributes,
}

pub type GetConfigValueResponse = ResolvedValue;


// vim: ts=4
