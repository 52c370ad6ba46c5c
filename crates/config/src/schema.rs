//! Field schemas of built-in types.


use std::borrow::Cow;

use crate::kind::Family;
use crate::pnode::Pnode;

/// Keys every constructible node may carry besides its schema fields.
pub const RESERVED_FIELDS: [&str; 3] = ["Type", "ValueType", "IndexType"];

/// Expected shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
	/// A boolean, number or string leaf.
	Scalar,
	/// A number leaf or a `[re, im]` pair.
	Value,
	/// An array of leaves.
	Array,
	/// A nested node, or the name of a registered factory, of the family.
	Object(Family),
	/// One object or an array of objects of the family.
	Objects(Family),
	/// The name of a registered object.
	Reference,
}

impl Shape {
	pub fn accepts(self, node: &Pnode) -> bool {
		match self {
			Self::Scalar => node.is_leaf(),
			Self::Value => node.is_leaf() || node.as_array().is_some_and(|items| items.iter().all(Pnode::is_leaf)),
			Self::Array => node.as_array().is_some_and(|items| items.iter().all(Pnode::is_leaf)),
			Self::Object(_) => is_object(node),
			Self::Objects(_) => is_object(node) || node.as_array().is_some_and(|items| items.iter().all(is_object)),
			Self::Reference => node.as_str().is_some(),
		}
	}

	/// Description of accepted values, for error messages.
	pub fn expected(self) -> Cow<'static, str> {
		match self {
			Self::Scalar => "scalar".into(),
			Self::Value => "number or [re, im] pair".into(),
			Self::Array => "array of scalars".into(),
			Self::Object(family) => format!("nested {family} or registry name").into(),
			Self::Objects(family) => format!("{family} object or array of objects").into(),
			Self::Reference => "registry name".into(),
		}
	}
}

fn is_object(node: &Pnode) -> bool {
	node.is_map() || node.as_str().is_some()
}

/// One field of a built-in's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	pub name: &'static str,
	pub required: bool,
	pub shape: Shape,
}

impl FieldSpec {
	pub const fn optional(name: &'static str, shape: Shape) -> Self {
		Self {
			name,
			required: false,
			shape,
		}
	}

	pub const fn required(name: &'static str, shape: Shape) -> Self {
		Self {
			name,
			required: true,
			shape,
		}
	}
}
