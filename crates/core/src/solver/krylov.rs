//! Krylov subspace solvers.

use super::InitialGuessMode;
use crate::factory::{CriterionFactory, Deferred, LinOpFactory};
use crate::lin_op::SharedLinOp;
use crate::scalar::{RealScalar, Scalar};

/// Declares a Krylov solver over `V` with the shared iterative parameters
/// followed by `extra` fields.
macro_rules! krylov_solver {
	($(#[$meta:meta])* $name:ident = $type_name:literal $({ $($extra:tt)* })?) => {
		factory! {
			$(#[$meta])*
			$name<V: Scalar>: LinOpFactory = $type_name {
				value_type: Some(V::TAG),
				index_type: None,
			}
			{
				/// Stopping criteria; iteration stops once any of them is met.
				criteria: Vec<Deferred<dyn CriterionFactory>> = Vec::new(),
				default_initial_guess: InitialGuessMode = InitialGuessMode::Rhs,
				$($($extra)*)?
			}
			optional {
				/// Factory generating the preconditioner from the system matrix.
				preconditioner: Deferred<dyn LinOpFactory>,
				/// Already generated preconditioner; takes precedence over `preconditioner`.
				generated_preconditioner: SharedLinOp,
			}
		}
	};
}

krylov_solver! {
	/// Conjugate gradient, for symmetric positive definite systems.
	Cg = "solver::Cg"
}

krylov_solver! {
	/// Biconjugate gradient.
	Bicg = "solver::Bicg"
}

krylov_solver! {
	/// Stabilized biconjugate gradient.
	Bicgstab = "solver::Bicgstab"
}

krylov_solver! {
	/// Conjugate gradient squared.
	Cgs = "solver::Cgs"
}

krylov_solver! {
	/// Flexible conjugate gradient.
	Fcg = "solver::Fcg"
}

krylov_solver! {
	/// Restarted generalized minimal residual method.
	Gmres = "solver::Gmres" {
		/// Krylov subspace dimension before a restart.
		krylov_dim: usize = 100,
		/// Allow the preconditioner to change between iterations.
		flexible: bool = false,
	}
}

krylov_solver! {
	/// Induced dimension reduction, IDR(s).
	Idr = "solver::Idr" {
		subspace_dim: usize = 2,
		/// Threshold for replacing the relaxation parameter `omega`.
		kappa: V::Real = <V::Real as RealScalar>::from_f64(0.7),
		/// Generate the shadow space deterministically.
		deterministic: bool = false,
		/// Use a complex shadow space for real value types.
		complex_subspace: bool = false,
	}
}
