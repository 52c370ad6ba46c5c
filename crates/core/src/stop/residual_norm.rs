use super::Baseline;
use crate::scalar::{RealScalar, Scalar};

factory! {
	/// Stops once the residual norm drops below `reduction_factor` times the baseline.
	ResidualNorm<V: Scalar>: CriterionFactory = "ResidualNorm" {
		value_type: Some(V::TAG),
		index_type: None,
	}
	{
		reduction_factor: V::Real = <V::Real as RealScalar>::DEFAULT_REDUCTION,
		baseline: Baseline = Baseline::RhsNorm,
	}
}

factory! {
	/// Like [`ResidualNormFactory`], but uses the residual estimate the solver
	/// maintains instead of recomputing it.
	ImplicitResidualNorm<V: Scalar>: CriterionFactory = "ImplicitResidualNorm" {
		value_type: Some(V::TAG),
		index_type: None,
	}
	{
		reduction_factor: V::Real = <V::Real as RealScalar>::DEFAULT_REDUCTION,
		baseline: Baseline = Baseline::RhsNorm,
	}
}
