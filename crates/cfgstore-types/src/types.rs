//! Configuration data model.
//!
//! Identities are composite struct keys. They are hashed field by field and
//! never joined into a single delimited string, so `("a/b", "c")` and
//! `("a", "b/c")` stay distinct.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{CsResult, Error};

// ConfigId //
//**********//
/// Identity of a configuration: the owning service and the config name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigId {
	#[serde(default)]
	pub service: Box<str>,
	#[serde(default)]
	pub name: Box<str>,
}

impl ConfigId {
	/// Build a validated identity
	pub fn new(service: impl Into<Box<str>>, name: impl Into<Box<str>>) -> CsResult<Self> {
		let id = ConfigId { service: service.into(), name: name.into() };
		id.validate()?;
		Ok(id)
	}

	/// Both components must be non-empty
	pub fn validate(&self) -> CsResult<()> {
		if self.service.is_empty() || self.name.is_empty() {
			return Err(Error::InvalidInput("config name and service are required".into()));
		}
		Ok(())
	}
}

impl fmt::Display for ConfigId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.service, self.name)
	}
}

// ConfigDef //
//***********//
/// A registered configuration: identity, type tag and default value.
///
/// `typ` is never interpreted; values are not checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDef {
	#[serde(flatten)]
	pub id: ConfigId,
	#[serde(rename = "type", default)]
	pub typ: Box<str>,
	#[serde(rename = "defaultValue", default)]
	pub default_value: Box<str>,
}

impl ConfigDef {
	pub fn new(id: ConfigId, typ: impl Into<Box<str>>, default_value: impl Into<Box<str>>) -> Self {
		ConfigDef { id, typ: typ.into(), default_value: default_value.into() }
	}
}

// OverrideKey //
//*************//
/// A single entity instance eligible for an override, e.g. `("user", "123")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideKey {
	#[serde(rename = "entityType", default)]
	pub entity_type: Box<str>,
	#[serde(rename = "entityId", default)]
	pub entity_id: Box<str>,
}

impl OverrideKey {
	pub fn new(entity_type: impl Into<Box<str>>, entity_id: impl Into<Box<str>>) -> Self {
		OverrideKey { entity_type: entity_type.into(), entity_id: entity_id.into() }
	}

	pub fn validate(&self) -> CsResult<()> {
		if self.entity_type.is_empty() || self.entity_id.is_empty() {
			return Err(Error::InvalidInput("override entityType and entityId are required".into()));
		}
		Ok(())
	}
}

impl fmt::Display for OverrideKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.entity_type, self.entity_id)
	}
}

// Override //
//**********//
/// Entity specific value of one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
	#[serde(flatten)]
	pub key: OverrideKey,
	#[serde(default)]
	pub value: Box<str>,
}

impl Override {
	pub fn new(key: OverrideKey, value: impl Into<Box<str>>) -> Self {
		Override { key, value: value.into() }
	}
}

// ResolvedValue //
//***************//
/// Effective value of a configuration for a set of entity attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedValue {
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub value: Box<str>,
}

// Attributes //
//************//
/// Caller supplied entity attributes in caller order.
///
/// Resolution takes the first attribute with a matching override, so the
/// order here is the precedence. Deserializes either from an object
/// (`{"user": "123", "group": "456"}`, consumed in document order, a repeated
/// member keeps the last value) or from an array of `{"entityType", "entityId"}`
/// objects. `null` means no attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<OverrideKey>);

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, entity_type: impl Into<Box<str>>, entity_id: impl Into<Box<str>>) {
		self.0.push(OverrideKey::new(entity_type, entity_id));
	}

	pub fn iter(&self) -> std::slice::Iter<'_, OverrideKey> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T: Into<Box<str>>, I: Into<Box<str>>> FromIterator<(T, I)> for Attributes {
	fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
		Attributes(iter.into_iter().map(|(t, i)| OverrideKey::new(t, i)).collect())
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = &'a OverrideKey;
	type IntoIter = std::slice::Iter<'a, OverrideKey>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
	type Value = Attributes;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an object of entityType to entityId or an array of {entityType, entityId}")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut keys: Vec<OverrideKey> = Vec::with_capacity(map.size_hint().unwrap_or(0));
		while let Some((entity_type, entity_id)) = map.next_entry::<String, String>()? {
			// A repeated member replaces the earlier value but keeps its position
			if let Some(key) = keys.iter_mut().find(|k| *k.entity_type == *entity_type) {
				key.entity_id = entity_id.into();
			} else {
				keys.push(OverrideKey::new(entity_type, entity_id));
			}
		}
		Ok(Attributes(keys))
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut keys = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(key) = seq.next_element::<OverrideKey>()? {
			keys.push(key);
		}
		Ok(Attributes(keys))
	}

	fn visit_unit<E>(self) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		Ok(Attributes::default())
	}

	fn visit_none<E>(self) -> Result<Self::Value, E>
	where
		E: serde::de::Error,
	{
		Ok(Attributes::default())
	}
}

impl<'de> Deserialize<'de> for Attributes {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(AttributesVisitor)
	}
}


// vim: ts=4
