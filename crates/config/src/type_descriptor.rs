//! Value and index type selection for generic built-ins.


use core::fmt;

use solvent_core::{IndexTypeTag, ValueTypeTag};

use crate::error::{ConfigError, Result};
use crate::pnode::Pnode;

/// Value and index type a generic built-in is instantiated with.
///
/// Defaults to `(float64, int32)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeDescriptor {
	value_type: ValueTypeTag,
	index_type: IndexTypeTag,
}

impl TypeDescriptor {
	pub const fn new(value_type: ValueTypeTag, index_type: IndexTypeTag) -> Self {
		Self { value_type, index_type }
	}

	/// Parses a descriptor from type names, e.g. `("complex<double>", "int64")`.
	pub fn from_names(value_type: &str, index_type: &str) -> Result<Self> {
		Ok(Self::new(parse_value_type(value_type)?, parse_index_type(index_type)?))
	}

	pub fn value_type(&self) -> ValueTypeTag {
		self.value_type
	}

	pub fn index_type(&self) -> IndexTypeTag {
		self.index_type
	}

	pub fn with_value_type(self, value_type: ValueTypeTag) -> Self {
		Self { value_type, ..self }
	}

	pub fn with_index_type(self, index_type: IndexTypeTag) -> Self {
		Self { index_type, ..self }
	}

	/// The descriptor in effect for `node`: its own `ValueType`/`IndexType`
	/// fields where present, `parent`'s otherwise.
	pub fn resolve(node: &Pnode, parent: &TypeDescriptor) -> Result<Self> {
		let mut resolved = *parent;
		if let Some(field) = node.find("ValueType") {
			resolved.value_type = parse_value_type(type_name(field, "ValueType")?)?;
		}
		if let Some(field) = node.find("IndexType") {
			resolved.index_type = parse_index_type(type_name(field, "IndexType")?)?;
		}
		Ok(resolved)
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.value_type, self.index_type)
	}
}

fn type_name<'a>(field: &'a Pnode, key: &str) -> Result<&'a str> {
	field
		.as_str()
		.ok_or_else(|| ConfigError::mismatch(format!("field '{key}'"), "type name", field))
}

fn parse_value_type(name: &str) -> Result<ValueTypeTag> {
	name.parse().map_err(|_| ConfigError::UnknownType {
		category: "ValueType",
		name: name.to_string(),
	})
}

fn parse_index_type(name: &str) -> Result<IndexTypeTag> {
	name.parse().map_err(|_| ConfigError::UnknownType {
		category: "IndexType",
		name: name.to_string(),
	})
}
