//! Runtime names for the value and index types of generic components.
//!
//! Each tag parses from a canonical spelling plus one alias, and displays as
//! the canonical spelling.

use strum_macros::{Display, EnumIter, EnumString};

/// Numeric value type a generic component is instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter)]
pub enum ValueTypeTag {
	#[strum(to_string = "float32", serialize = "float")]
	Float32,
	#[default]
	#[strum(to_string = "float64", serialize = "double")]
	Float64,
	#[strum(to_string = "complex<float32>", serialize = "complex<float>")]
	Complex32,
	#[strum(to_string = "complex<float64>", serialize = "complex<double>")]
	Complex64,
}

/// Integer type used for sparse indices, or `Void` for components without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter)]
pub enum IndexTypeTag {
	#[strum(to_string = "void")]
	Void,
	#[default]
	#[strum(to_string = "int32", serialize = "int")]
	Int32,
	#[strum(to_string = "int64", serialize = "long")]
	Int64,
}
