//! Serde support, so any self-describing format can produce a tree.

use core::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Pnode;
#[cfg(feature = "json")]
use crate::error::{ConfigError, VALUE};

impl<'de> Deserialize<'de> for Pnode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(PnodeVisitor)
	}
}

struct PnodeVisitor;

impl<'de> Visitor<'de> for PnodeVisitor {
	type Value = Pnode;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a boolean, number, string, array or map")
	}

	fn visit_unit<E: de::Error>(self) -> Result<Pnode, E> {
		Ok(Pnode::Empty)
	}

	fn visit_none<E: de::Error>(self) -> Result<Pnode, E> {
		Ok(Pnode::Empty)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Pnode, D::Error> {
		Pnode::deserialize(deserializer)
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> Result<Pnode, E> {
		Ok(Pnode::Boolean(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Pnode, E> {
		Ok(Pnode::Integer(value))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Pnode, E> {
		i64::try_from(value)
			.map(Pnode::Integer)
			.map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &"an integer within i64 range"))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> Result<Pnode, E> {
		Ok(Pnode::Real(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Pnode, E> {
		Ok(Pnode::String(value.to_string()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> Result<Pnode, E> {
		Ok(Pnode::String(value))
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Pnode, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Pnode::Array(items))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Pnode, A::Error> {
		let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
		while let Some((key, value)) = map.next_entry::<String, Pnode>()? {
			if entries.contains_key(&key) {
				return Err(de::Error::custom(format_args!("duplicate key '{key}'")));
			}
			entries.insert(key, value);
		}
		Ok(Pnode::Map(entries))
	}
}

impl Serialize for Pnode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Empty => serializer.serialize_unit(),
			Self::Boolean(b) => serializer.serialize_bool(*b),
			Self::Integer(i) => serializer.serialize_i64(*i),
			Self::Real(r) => serializer.serialize_f64(*r),
			Self::String(s) => serializer.serialize_str(s),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Map(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, value) in entries {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
		}
	}
}

/// Rejects integers outside the `i64` range, like deserialization does.
#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Pnode {
	type Error = ConfigError;

	fn try_from(value: serde_json::Value) -> Result<Self, ConfigError> {
		use serde_json::Value;

		Ok(match value {
			Value::Null => Self::Empty,
			Value::Bool(b) => Self::Boolean(b),
			Value::Number(n) => match (n.as_i64(), n.is_f64()) {
				(Some(i), _) => Self::Integer(i),
				(None, true) => Self::Real(n.as_f64().unwrap_or(f64::NAN)),
				(None, false) => {
					return Err(ConfigError::TypeMismatch {
						what: VALUE.into(),
						expected: "an integer within i64 range".into(),
						found: format!("integer {n}"),
					});
				}
			},
			Value::String(s) => Self::String(s),
			Value::Array(items) => Self::Array(items.into_iter().map(Self::try_from).collect::<Result<_, _>>()?),
			Value::Object(entries) => Self::Map(
				entries
					.into_iter()
					.map(|(k, v)| Self::try_from(v).map(|node| (k, node)))
					.collect::<Result<_, ConfigError>>()?,
			),
		})
	}
}
