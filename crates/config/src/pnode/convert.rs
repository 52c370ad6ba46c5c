use std::time::Duration;

use solvent_core::Complex;
use solvent_core::solver::{InitialGuessMode, TrisolveAlgorithm};
use solvent_core::stop::Baseline;
use strum::IntoEnumIterator;

use super::Pnode;
use crate::error::{ConfigError, Result, VALUE};

/// Conversion from a configuration node into a typed value.
///
/// - integers accept integer leaves that fit the target type
/// - floats accept integer and real leaves; a finite value that overflows
///   `f32` is rejected
/// - complex numbers accept a leaf `x` as `(x, 0)` or a two-element array
///   `[re, im]`
/// - `Vec<T>` accepts an array whose elements all convert to `T`
/// - [`Duration`] accepts a non-negative integer number of nanoseconds
/// - enumerations accept their snake_case name
///
/// Anything else fails with [`ConfigError::TypeMismatch`].
pub trait FromPnode: Sized {
	fn from_pnode(node: &Pnode) -> Result<Self>;
}

macro_rules! integer_from_pnode {
	($($ty:ty),*) => {$(
		impl FromPnode for $ty {
			fn from_pnode(node: &Pnode) -> Result<Self> {
				node.as_i64()
					.and_then(|value| <$ty>::try_from(value).ok())
					.ok_or_else(|| ConfigError::mismatch(VALUE, stringify!($ty), node))
			}
		}
	)*};
}

integer_from_pnode!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl FromPnode for f64 {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		node.as_f64().ok_or_else(|| ConfigError::mismatch(VALUE, "f64", node))
	}
}

impl FromPnode for f32 {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		let value = node.as_f64().ok_or_else(|| ConfigError::mismatch(VALUE, "f32", node))?;
		let narrowed = value as f32;
		if value.is_finite() && !narrowed.is_finite() {
			return Err(ConfigError::mismatch(VALUE, "f32 within range", node));
		}
		Ok(narrowed)
	}
}

impl<T: FromPnode + Default> FromPnode for Complex<T> {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		match node {
			Pnode::Array(parts) => match parts.as_slice() {
				[re, im] => Ok(Complex::new(T::from_pnode(re)?, T::from_pnode(im)?)),
				_ => Err(ConfigError::mismatch(VALUE, "a number or a [re, im] pair", node)),
			},
			Pnode::Map(_) => Err(ConfigError::mismatch(VALUE, "a number or a [re, im] pair", node)),
			leaf => Ok(Complex::new(T::from_pnode(leaf)?, T::default())),
		}
	}
}

impl FromPnode for bool {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		node.as_bool().ok_or_else(|| ConfigError::mismatch(VALUE, "bool", node))
	}
}

impl FromPnode for String {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		node.as_str()
			.map(str::to_string)
			.ok_or_else(|| ConfigError::mismatch(VALUE, "string", node))
	}
}

impl<T: FromPnode> FromPnode for Vec<T> {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		let Some(items) = node.as_array() else {
			return Err(ConfigError::mismatch(VALUE, "array", node));
		};
		items.iter().map(T::from_pnode).collect()
	}
}

impl FromPnode for Duration {
	fn from_pnode(node: &Pnode) -> Result<Self> {
		node.as_i64()
			.and_then(|nanos| u64::try_from(nanos).ok())
			.map(Duration::from_nanos)
			.ok_or_else(|| ConfigError::mismatch(VALUE, "non-negative nanoseconds", node))
	}
}

macro_rules! enum_from_pnode {
	($($ty:ty),*) => {$(
		impl FromPnode for $ty {
			fn from_pnode(node: &Pnode) -> Result<Self> {
				node.as_str().and_then(|name| name.parse().ok()).ok_or_else(|| {
					let names: Vec<String> = <$ty>::iter().map(|variant| variant.to_string()).collect();
					ConfigError::mismatch(VALUE, format!("one of {}", names.join(", ")), node)
				})
			}
		}
	)*};
}

enum_from_pnode!(InitialGuessMode, TrisolveAlgorithm, Baseline);
