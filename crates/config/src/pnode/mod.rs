//! Immutable configuration trees.
//!
//! A [`Pnode`] is either empty, a scalar leaf, an array of nodes or a map from
//! string keys to nodes. Maps keep their insertion order. Accessors borrow
//! into the owning tree; nothing is copied while walking it.

mod convert;
mod serialize;


use indexmap::IndexMap;

pub use self::convert::FromPnode;
use crate::error::{ConfigError, Result};

/// A node of a configuration tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Pnode {
	#[default]
	Empty,
	Boolean(bool),
	Integer(i64),
	Real(f64),
	String(String),
	Array(Vec<Pnode>),
	Map(IndexMap<String, Pnode>),
}

impl Pnode {
	/// Builds a map node, failing with [`ConfigError::DuplicateName`] on a
	/// repeated key.
	pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
	where
		K: Into<String>,
		V: Into<Pnode>,
	{
		let mut map = IndexMap::new();
		for (key, value) in entries {
			let key = key.into();
			if map.contains_key(&key) {
				return Err(ConfigError::DuplicateName { namespace: "map key", name: key });
			}
			map.insert(key, value.into());
		}
		Ok(Self::Map(map))
	}

	pub fn array<V: Into<Pnode>>(items: impl IntoIterator<Item = V>) -> Self {
		Self::Array(items.into_iter().map(Into::into).collect())
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	/// Whether this is a boolean, integer, real or string.
	pub fn is_leaf(&self) -> bool {
		matches!(self, Self::Boolean(_) | Self::Integer(_) | Self::Real(_) | Self::String(_))
	}

	pub fn is_array(&self) -> bool {
		matches!(self, Self::Array(_))
	}

	pub fn is_map(&self) -> bool {
		matches!(self, Self::Map(_))
	}

	/// Looks up a map entry by key or an array element by index.
	///
	/// Missing keys fail with [`ConfigError::NotFound`], indices past the end
	/// with [`ConfigError::OutOfRange`], and a key or index into the wrong kind
	/// of node with [`ConfigError::TypeMismatch`].
	pub fn get<K: Key>(&self, key: K) -> Result<&Pnode> {
		key.lookup(self)
	}

	/// The map entry for `key`, or `None` if absent or if this is not a map.
	pub fn find(&self, key: &str) -> Option<&Pnode> {
		self.as_map()?.get(key)
	}

	/// Converts this node into `T`. See [`FromPnode`] for the accepted shapes.
	pub fn get_value<T: FromPnode>(&self) -> Result<T> {
		T::from_pnode(self)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Real or integer leaf as `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Integer(i) => Some(*i as f64),
			Self::Real(r) => Some(*r),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_array(&self) -> Option<&[Pnode]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&IndexMap<String, Pnode>> {
		match self {
			Self::Map(entries) => Some(entries),
			_ => None,
		}
	}

	/// Short human description used in error messages.
	pub fn describe(&self) -> String {
		match self {
			Self::Empty => "empty node".into(),
			Self::Boolean(b) => format!("boolean {b}"),
			Self::Integer(i) => format!("integer {i}"),
			Self::Real(r) => format!("real {r}"),
			Self::String(s) => format!("string {s:?}"),
			Self::Array(items) => format!("array of {} elements", items.len()),
			Self::Map(_) => "map".into(),
		}
	}
}

/// Index accepted by [`Pnode::get`]: `&str` for maps, `usize` for arrays.
pub trait Key: sealed::Sealed {
	#[doc(hidden)]
	fn lookup<'n>(self, node: &'n Pnode) -> Result<&'n Pnode>;
}

mod sealed {
	pub trait Sealed {}
	impl Sealed for &str {}
	impl Sealed for usize {}
}

impl Key for &str {
	fn lookup<'n>(self, node: &'n Pnode) -> Result<&'n Pnode> {
		let Some(map) = node.as_map() else {
			return Err(ConfigError::mismatch(format!("key '{self}'"), "map", node));
		};
		map.get(self).ok_or_else(|| ConfigError::NotFound {
			namespace: "key",
			name: self.to_string(),
		})
	}
}

impl Key for usize {
	fn lookup<'n>(self, node: &'n Pnode) -> Result<&'n Pnode> {
		let Some(items) = node.as_array() else {
			return Err(ConfigError::mismatch(format!("index {self}"), "array", node));
		};
		items.get(self).ok_or(ConfigError::OutOfRange {
			index: self,
			len: items.len(),
		})
	}
}

impl From<bool> for Pnode {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

macro_rules! from_integer {
	($($ty:ty),*) => {$(
		impl From<$ty> for Pnode {
			fn from(value: $ty) -> Self {
				Self::Integer(i64::from(value))
			}
		}
	)*};
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Pnode {
	fn from(value: f32) -> Self {
		Self::Real(f64::from(value))
	}
}

impl From<f64> for Pnode {
	fn from(value: f64) -> Self {
		Self::Real(value)
	}
}

impl From<&str> for Pnode {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Pnode {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl<T: Into<Pnode>> From<Vec<T>> for Pnode {
	fn from(items: Vec<T>) -> Self {
		Self::array(items)
	}
}

impl<T: Into<Pnode>, const N: usize> From<[T; N]> for Pnode {
	fn from(items: [T; N]) -> Self {
		Self::array(items)
	}
}

impl From<IndexMap<String, Pnode>> for Pnode {
	fn from(entries: IndexMap<String, Pnode>) -> Self {
		Self::Map(entries)
	}
}
