//! Static value and index type traits.
//!
//! Generic components are parameterised over a [`Scalar`] value type and,
//! where sparse indices are involved, an [`IndexInt`]. Each implementor names
//! its runtime tag so instantiations can be matched against configuration.

use core::fmt;

use num_complex::Complex;

use crate::factory::Bind;
use crate::types::{IndexTypeTag, ValueTypeTag};

/// A numeric value type: `f32`, `f64` or their complex counterparts.
pub trait Scalar: Bind + Copy + fmt::Debug + PartialEq + Default + Send + Sync + 'static {
	/// The real type of the magnitude (`Self` for real types).
	type Real: RealScalar;

	const TAG: ValueTypeTag;

	fn one() -> Self;
}

/// A real floating-point [`Scalar`].
pub trait RealScalar: Scalar<Real = Self> + PartialOrd {
	/// Default relative reduction used by residual-norm criteria.
	const DEFAULT_REDUCTION: Self;

	fn from_f64(value: f64) -> Self;
}

/// An integer type usable as a sparse index.
pub trait IndexInt: Bind + Copy + fmt::Debug + Eq + Ord + Send + Sync + 'static {
	const TAG: IndexTypeTag;
}

macro_rules! real_scalar {
	($($ty:ty => $tag:ident),* $(,)?) => {$(
		impl Scalar for $ty {
			type Real = $ty;
			const TAG: ValueTypeTag = ValueTypeTag::$tag;

			fn one() -> Self {
				1.0
			}
		}

		impl RealScalar for $ty {
			const DEFAULT_REDUCTION: Self = 5.0 * <$ty>::EPSILON;

			fn from_f64(value: f64) -> Self {
				value as $ty
			}
		}
	)*};
}

macro_rules! complex_scalar {
	($($real:ty => $tag:ident),* $(,)?) => {$(
		impl Scalar for Complex<$real> {
			type Real = $real;
			const TAG: ValueTypeTag = ValueTypeTag::$tag;

			fn one() -> Self {
				Complex::new(1.0, 0.0)
			}
		}
	)*};
}

real_scalar!(f32 => Float32, f64 => Float64);
complex_scalar!(f32 => Complex32, f64 => Complex64);

impl IndexInt for i32 {
	const TAG: IndexTypeTag = IndexTypeTag::Int32;
}

impl IndexInt for i64 {
	const TAG: IndexTypeTag = IndexTypeTag::Int64;
}
