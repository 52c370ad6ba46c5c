use crate::scalar::{IndexInt, RealScalar, Scalar};

factory! {
	/// Block-Jacobi preconditioner.
	///
	/// Blocks are detected automatically up to `max_block_size` unless
	/// `block_pointers` fixes them.
	Jacobi<V: Scalar, I: IndexInt>: LinOpFactory = "preconditioner::Jacobi" {
		value_type: Some(V::TAG),
		index_type: Some(I::TAG),
	}
	{
		max_block_size: u32 = 32,
		/// Stride between blocks in the packed storage, 0 picks the executor default.
		max_block_stride: u32 = 0,
		/// Assume the system matrix is already sorted.
		skip_sorting: bool = false,
		/// Accuracy target for adaptive block precision.
		accuracy: V::Real = <V::Real as RealScalar>::from_f64(1e-1),
	}
	optional {
		/// Explicit block boundaries, `n + 1` entries for `n` blocks.
		block_pointers: Vec<I>,
	}
}
