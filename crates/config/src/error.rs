//! Error types for configuration parsing.

use std::borrow::Cow;

use solvent_core::{IndexTypeTag, ValueTypeTag};
use thiserror::Error;

use crate::pnode::Pnode;

/// Errors raised while reading a configuration tree or the registry.
///
/// Parsing stops at the first error; no partially built object is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	/// A required field is absent.
	#[error("missing required field '{field}' in {owner}")]
	MissingField {
		/// Type or family whose node lacks the field.
		owner: String,
		field: String,
	},

	/// A map key or registry name is absent.
	#[error("no {namespace} named '{name}'")]
	NotFound {
		/// What was searched, e.g. `"key"` or `"registry object"`.
		namespace: &'static str,
		name: String,
	},

	/// An array index is past the end.
	#[error("index {index} out of range for array of length {len}")]
	OutOfRange { index: usize, len: usize },

	/// A value has the wrong shape or cannot be converted.
	#[error("type mismatch for {what}: expected {expected}, found {found}")]
	TypeMismatch {
		/// The value being converted, e.g. `"field 'max_iters'"`.
		what: String,
		expected: Cow<'static, str>,
		found: String,
	},

	/// A `Type`, `ValueType` or `IndexType` name is not recognized.
	#[error("unknown {category} '{name}'")]
	UnknownType {
		/// The field the name came from.
		category: &'static str,
		name: String,
	},

	/// A built-in has no instantiation for the resolved types.
	#[error("{type_name} is not available for value type {value_type} with index type {index_type}")]
	UnsupportedTypeCombination {
		type_name: &'static str,
		value_type: ValueTypeTag,
		index_type: IndexTypeTag,
	},

	/// A name was registered twice in the same registry namespace.
	#[error("{namespace} '{name}' is already registered")]
	DuplicateName { namespace: &'static str, name: String },

	/// A field outside the schema of a built-in, under strict parsing.
	#[error("unknown field '{field}' in {owner}")]
	UnknownField { owner: String, field: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Subject of conversion errors raised without field context.
pub(crate) const VALUE: &str = "value";

impl ConfigError {
	pub(crate) fn mismatch(what: impl Into<String>, expected: impl Into<Cow<'static, str>>, node: &Pnode) -> Self {
		Self::TypeMismatch {
			what: what.into(),
			expected: expected.into(),
			found: node.describe(),
		}
	}

	/// Attributes a bare conversion error to `field`.
	pub(crate) fn in_field(self, field: &str) -> Self {
		match self {
			Self::TypeMismatch { what, expected, found } if what == VALUE => Self::TypeMismatch {
				what: format!("field '{field}'"),
				expected,
				found,
			},
			other => other,
		}
	}
}
