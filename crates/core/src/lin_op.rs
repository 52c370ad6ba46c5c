//! Linear operators.

use core::fmt;
use std::any::Any;
use std::sync::Arc;

use crate::executor::Executor;
use crate::scalar::Scalar;

/// Dimensions of a linear operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim2 {
	pub rows: usize,
	pub cols: usize,
}

impl Dim2 {
	pub const fn new(rows: usize, cols: usize) -> Self {
		Self { rows, cols }
	}
}

impl fmt::Display for Dim2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.rows, self.cols)
	}
}

/// An already constructed numeric object, such as a matrix or a generated
/// preconditioner.
pub trait LinOp: fmt::Debug + Send + Sync + 'static {
	fn size(&self) -> Dim2;

	fn executor(&self) -> &Arc<dyn Executor>;

	fn as_any(&self) -> &dyn Any;

	fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{len} values cannot fill a {size} matrix")]
pub struct DimensionMismatch {
	pub size: Dim2,
	pub len: usize,
}

/// Row-major dense matrix.
pub struct Dense<V: Scalar> {
	exec: Arc<dyn Executor>,
	size: Dim2,
	values: Vec<V>,
}

impl<V: Scalar> Dense<V> {
	pub fn new(exec: Arc<dyn Executor>, size: Dim2, values: Vec<V>) -> Result<Self, DimensionMismatch> {
		if values.len() != size.rows * size.cols {
			return Err(DimensionMismatch { size, len: values.len() });
		}
		Ok(Self { exec, size, values })
	}

	pub fn zeros(exec: Arc<dyn Executor>, size: Dim2) -> Self {
		Self {
			exec,
			size,
			values: vec![V::default(); size.rows * size.cols],
		}
	}

	pub fn from_rows<const N: usize>(exec: Arc<dyn Executor>, rows: &[[V; N]]) -> Self {
		Self {
			exec,
			size: Dim2::new(rows.len(), N),
			values: rows.iter().flatten().copied().collect(),
		}
	}

	pub fn at(&self, row: usize, col: usize) -> Option<V> {
		if row >= self.size.rows || col >= self.size.cols {
			return None;
		}
		self.values.get(row * self.size.cols + col).copied()
	}

	pub fn values(&self) -> &[V] {
		&self.values
	}
}

impl<V: Scalar> fmt::Debug for Dense<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dense")
			.field("value_type", &V::TAG)
			.field("size", &self.size)
			.field("executor", &self.exec.name())
			.finish()
	}
}

impl<V: Scalar> LinOp for Dense<V> {
	fn size(&self) -> Dim2 {
		self.size
	}

	fn executor(&self) -> &Arc<dyn Executor> {
		&self.exec
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
		self
	}
}

/// Shared handle to an externally constructed [`LinOp`].
///
/// Two handles compare equal when they point at the same object.
#[derive(Clone)]
pub struct SharedLinOp(pub Arc<dyn LinOp>);

impl SharedLinOp {
	pub fn new<T: LinOp>(op: Arc<T>) -> Self {
		Self(op)
	}

	/// Whether this handle refers to the object behind `other`.
	pub fn is<T: ?Sized>(&self, other: &Arc<T>) -> bool {
		std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(other))
	}

	pub fn downcast_ref<T: LinOp>(&self) -> Option<&T> {
		self.0.as_any().downcast_ref::<T>()
	}
}

impl From<Arc<dyn LinOp>> for SharedLinOp {
	fn from(op: Arc<dyn LinOp>) -> Self {
		Self(op)
	}
}

impl PartialEq for SharedLinOp {
	fn eq(&self, other: &Self) -> bool {
		self.is(&other.0)
	}
}

impl fmt::Debug for SharedLinOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self.0, f)
	}
}
