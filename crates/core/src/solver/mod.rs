//! Solver families.
//!
//! Krylov solvers and iterative refinement are generic over the value type
//! only; triangular solvers also need an index type.

mod ir;
mod krylov;
mod triangular;

use strum_macros::{Display, EnumIter, EnumString};

pub use ir::{IrFactory, IrParameters};
pub use krylov::{
	BicgFactory, BicgParameters, BicgstabFactory, BicgstabParameters, CgFactory, CgParameters, CgsFactory,
	CgsParameters, FcgFactory, FcgParameters, GmresFactory, GmresParameters, IdrFactory, IdrParameters,
};
pub use triangular::{LowerTrsFactory, LowerTrsParameters, UpperTrsFactory, UpperTrsParameters};

/// Initial guess used when the caller provides none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InitialGuessMode {
	/// Start from the right-hand side.
	#[default]
	Rhs,
	/// Start from zero.
	Zero,
	/// Use the solution vector passed to `apply` unchanged.
	Provided,
}

/// Triangular solve kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TrisolveAlgorithm {
	/// Vendor sparse library kernel.
	#[default]
	Sparselib,
	/// Synchronization-free kernel.
	Syncfree,
}

impl_bind_by_clone!(InitialGuessMode, TrisolveAlgorithm);
