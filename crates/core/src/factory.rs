//! Factory traits, unbound builders and binding.
//!
//! A component is configured in two steps. Its parameter set is filled in
//! first and acts as a [`FactoryBuilder`]; binding the builder to an
//! [`Executor`] then yields the factory. Parameters that are themselves
//! factories are stored as [`Deferred`] so a whole tree of builders binds to
//! the same executor in one call.

use core::fmt;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use num_complex::Complex;

use crate::executor::Executor;
use crate::lin_op::SharedLinOp;
use crate::types::{IndexTypeTag, ValueTypeTag};

/// Concrete type name and instantiation of a configured component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactoryInfo {
	pub type_name: &'static str,
	pub value_type: Option<ValueTypeTag>,
	pub index_type: Option<IndexTypeTag>,
}

impl fmt::Display for FactoryInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.type_name)?;
		match (self.value_type, self.index_type) {
			(Some(v), Some(i)) => write!(f, "<{v}, {i}>"),
			(Some(v), None) => write!(f, "<{v}>"),
			(None, Some(i)) => write!(f, "<{i}>"),
			(None, None) => Ok(()),
		}
	}
}

/// A factory bound to an executor.
pub trait AbstractFactory: fmt::Debug + Send + Sync + 'static {
	fn executor(&self) -> &Arc<dyn Executor>;

	fn info(&self) -> FactoryInfo;

	fn as_any(&self) -> &dyn Any;

	fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// Factory of linear operators: solvers and preconditioners.
pub trait LinOpFactory: AbstractFactory {}

/// Factory of stopping criteria.
pub trait CriterionFactory: AbstractFactory {}

/// A configured component not yet bound to an executor.
pub trait FactoryBuilder<P: ?Sized>: fmt::Debug + Send + Sync + 'static {
	fn on(&self, exec: &Arc<dyn Executor>) -> Arc<P>;

	fn info(&self) -> FactoryInfo;

	fn as_any(&self) -> &dyn Any;

	/// Structural equality across the type-erased boundary.
	fn dyn_eq(&self, other: &dyn FactoryBuilder<P>) -> bool;
}

/// A factory parameter that is either still a builder or already bound.
pub enum Deferred<P: ?Sized + 'static> {
	Builder(Arc<dyn FactoryBuilder<P>>),
	Bound(Arc<P>),
}

impl<P: ?Sized + 'static> Deferred<P> {
	pub fn from_builder<B: FactoryBuilder<P>>(builder: B) -> Self {
		Self::Builder(Arc::new(builder))
	}

	pub fn from_factory(factory: Arc<P>) -> Self {
		Self::Bound(factory)
	}

	/// Produces the factory on `exec`. Already bound factories are shared as is.
	pub fn on(&self, exec: &Arc<dyn Executor>) -> Arc<P> {
		match self {
			Self::Builder(builder) => builder.on(exec),
			Self::Bound(factory) => Arc::clone(factory),
		}
	}

	pub fn is_bound(&self) -> bool {
		matches!(self, Self::Bound(_))
	}

	pub fn bound(&self) -> Option<&Arc<P>> {
		match self {
			Self::Bound(factory) => Some(factory),
			Self::Builder(_) => None,
		}
	}

	pub fn builder(&self) -> Option<&dyn FactoryBuilder<P>> {
		match self {
			Self::Builder(builder) => Some(builder.as_ref()),
			Self::Bound(_) => None,
		}
	}

	/// The concrete builder, if this is an unbound builder of type `B`.
	pub fn downcast_builder<B: FactoryBuilder<P>>(&self) -> Option<&B> {
		self.builder()?.as_any().downcast_ref::<B>()
	}
}

impl<P: ?Sized + AbstractFactory> Deferred<P> {
	pub fn info(&self) -> FactoryInfo {
		match self {
			Self::Builder(builder) => builder.info(),
			Self::Bound(factory) => factory.info(),
		}
	}

	/// The concrete factory, if this is a bound factory of type `F`.
	pub fn downcast_factory<F: AbstractFactory>(&self) -> Option<&F> {
		self.bound()?.as_any().downcast_ref::<F>()
	}
}

impl<P: ?Sized + 'static> Clone for Deferred<P> {
	fn clone(&self) -> Self {
		match self {
			Self::Builder(builder) => Self::Builder(Arc::clone(builder)),
			Self::Bound(factory) => Self::Bound(Arc::clone(factory)),
		}
	}
}

impl<P: ?Sized + 'static> PartialEq for Deferred<P> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Builder(a), Self::Builder(b)) => a.dyn_eq(b.as_ref()),
			(Self::Bound(a), Self::Bound(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
			_ => false,
		}
	}
}

impl<P: ?Sized + fmt::Debug + 'static> fmt::Debug for Deferred<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Builder(builder) => fmt::Debug::fmt(builder, f),
			Self::Bound(factory) => f.debug_tuple("Bound").field(factory).finish(),
		}
	}
}

/// Rebinds a parameter value onto an executor.
///
/// Plain values are copied; deferred factories are bound.
pub trait Bind: Sized {
	fn bind(&self, exec: &Arc<dyn Executor>) -> Self;
}

impl_bind_by_clone!(bool, u32, u64, usize, i32, i64, f32, f64, Complex<f32>, Complex<f64>, String, Duration, SharedLinOp);

impl<T: Bind> Bind for Option<T> {
	fn bind(&self, exec: &Arc<dyn Executor>) -> Self {
		self.as_ref().map(|value| value.bind(exec))
	}
}

impl<T: Bind> Bind for Vec<T> {
	fn bind(&self, exec: &Arc<dyn Executor>) -> Self {
		self.iter().map(|value| value.bind(exec)).collect()
	}
}

impl<P: ?Sized + 'static> Bind for Deferred<P> {
	fn bind(&self, exec: &Arc<dyn Executor>) -> Self {
		Self::Bound(self.on(exec))
	}
}
