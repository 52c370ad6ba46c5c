//! What a parse call is asked to build.

#[cfg(test)]
mod tests;

use core::fmt;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Abstract family of constructible objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Family {
	/// Solvers and preconditioners. Any member may stand in wherever a linear
	/// operator factory is expected.
	LinOpFactory,
	/// Stopping criteria.
	CriterionFactory,
}

/// Type parameters a built-in is generic over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generics {
	None,
	Value,
	ValueIndex,
}

/// Every built-in a `Type` field may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum BuiltinType {
	Cg,
	Bicg,
	Bicgstab,
	Cgs,
	Fcg,
	Gmres,
	Idr,
	Ir,
	LowerTrs,
	UpperTrs,
	Jacobi,
	Ilu,
	Iteration,
	ResidualNorm,
	ImplicitResidualNorm,
	Time,
	Combined,
}

impl BuiltinType {
	/// Canonical `Type` name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Cg => "solver::Cg",
			Self::Bicg => "solver::Bicg",
			Self::Bicgstab => "solver::Bicgstab",
			Self::Cgs => "solver::Cgs",
			Self::Fcg => "solver::Fcg",
			Self::Gmres => "solver::Gmres",
			Self::Idr => "solver::Idr",
			Self::Ir => "solver::Ir",
			Self::LowerTrs => "solver::LowerTrs",
			Self::UpperTrs => "solver::UpperTrs",
			Self::Jacobi => "preconditioner::Jacobi",
			Self::Ilu => "preconditioner::Ilu",
			Self::Iteration => "Iteration",
			Self::ResidualNorm => "ResidualNorm",
			Self::ImplicitResidualNorm => "ImplicitResidualNorm",
			Self::Time => "Time",
			Self::Combined => "Combined",
		}
	}

	/// Alternative `Type` name, if any.
	pub const fn alias(self) -> Option<&'static str> {
		match self {
			Self::Iteration => Some("stop::Iteration"),
			Self::ResidualNorm => Some("stop::ResidualNorm"),
			Self::ImplicitResidualNorm => Some("stop::ImplicitResidualNorm"),
			Self::Time => Some("stop::Time"),
			Self::Combined => Some("stop::Combined"),
			_ => None,
		}
	}

	pub const fn family(self) -> Family {
		match self {
			Self::Iteration | Self::ResidualNorm | Self::ImplicitResidualNorm | Self::Time | Self::Combined => {
				Family::CriterionFactory
			}
			_ => Family::LinOpFactory,
		}
	}

	pub const fn generics(self) -> Generics {
		match self {
			Self::Iteration | Self::Time | Self::Combined => Generics::None,
			Self::LowerTrs | Self::UpperTrs | Self::Jacobi | Self::Ilu => Generics::ValueIndex,
			_ => Generics::Value,
		}
	}

	/// Finds the built-in named `name`, by canonical name or alias.
	pub fn lookup(name: &str) -> Option<Self> {
		Self::iter().find(|ty| ty.name() == name || ty.alias() == Some(name))
	}
}

impl fmt::Display for BuiltinType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Requested kind of a parse: any member of a family, selected by the node's
/// `Type` field, or one specific built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Family(Family),
	Builtin(BuiltinType),
}

impl Kind {
	pub fn family(self) -> Family {
		match self {
			Self::Family(family) => family,
			Self::Builtin(ty) => ty.family(),
		}
	}

	/// Parses a family name (`LinOpFactory`) or a built-in type name
	/// (`solver::Cg`).
	pub fn lookup(name: &str) -> Option<Self> {
		name.parse::<Family>()
			.ok()
			.map(Self::Family)
			.or_else(|| BuiltinType::lookup(name).map(Self::Builtin))
	}
}

impl From<Family> for Kind {
	fn from(family: Family) -> Self {
		Self::Family(family)
	}
}

impl From<BuiltinType> for Kind {
	fn from(ty: BuiltinType) -> Self {
		Self::Builtin(ty)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Family(family) => fmt::Display::fmt(family, f),
			Self::Builtin(ty) => f.write_str(ty.name()),
		}
	}
}
