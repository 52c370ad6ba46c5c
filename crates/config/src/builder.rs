//! The type-erased output of a parse.

use std::sync::Arc;

use solvent_core::{
	AbstractFactory, CriterionFactory, Deferred, Executor, FactoryBuilder, FactoryInfo, LinOpFactory,
};

use crate::error::{ConfigError, Result};
use crate::kind::Family;
use crate::registry::RegistryEntry;

/// An unbound object of either family, as produced by [`parse`](crate::parse).
///
/// Two builders compare equal when they describe the same type, instantiation
/// and parameter values.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBuilder {
	LinOpFactory(Deferred<dyn LinOpFactory>),
	CriterionFactory(Deferred<dyn CriterionFactory>),
}

impl AnyBuilder {
	pub fn lin_op_factory(builder: impl FactoryBuilder<dyn LinOpFactory>) -> Self {
		Self::LinOpFactory(Deferred::from_builder(builder))
	}

	pub fn criterion_factory(builder: impl FactoryBuilder<dyn CriterionFactory>) -> Self {
		Self::CriterionFactory(Deferred::from_builder(builder))
	}

	pub fn family(&self) -> Family {
		match self {
			Self::LinOpFactory(_) => Family::LinOpFactory,
			Self::CriterionFactory(_) => Family::CriterionFactory,
		}
	}

	pub fn info(&self) -> FactoryInfo {
		match self {
			Self::LinOpFactory(deferred) => deferred.info(),
			Self::CriterionFactory(deferred) => deferred.info(),
		}
	}

	/// Binds the builder and everything nested in it to `exec`.
	pub fn on(&self, exec: &Arc<dyn Executor>) -> AnyFactory {
		match self {
			Self::LinOpFactory(deferred) => AnyFactory::LinOpFactory(deferred.on(exec)),
			Self::CriterionFactory(deferred) => AnyFactory::CriterionFactory(deferred.on(exec)),
		}
	}

	/// The concrete parameter set, if this builder holds a `B`.
	pub fn downcast_builder<B: 'static>(&self) -> Option<&B> {
		let any = match self {
			Self::LinOpFactory(deferred) => deferred.builder()?.as_any(),
			Self::CriterionFactory(deferred) => deferred.builder()?.as_any(),
		};
		any.downcast_ref::<B>()
	}

	/// Converts into the deferred form of family `P`, failing with
	/// [`ConfigError::TypeMismatch`] for the other family.
	pub fn into_family<P: ?Sized + FactoryFamily>(self) -> Result<Deferred<P>> {
		let family = self.family();
		let info = self.info();
		P::unwrap(self).ok_or_else(|| ConfigError::TypeMismatch {
			what: "builder".into(),
			expected: P::FAMILY.to_string().into(),
			found: format!("{family} {info}"),
		})
	}

	pub fn into_lin_op_factory(self) -> Result<Deferred<dyn LinOpFactory>> {
		self.into_family()
	}

	pub fn into_criterion_factory(self) -> Result<Deferred<dyn CriterionFactory>> {
		self.into_family()
	}
}

/// A bound factory of either family.
#[derive(Debug, Clone)]
pub enum AnyFactory {
	LinOpFactory(Arc<dyn LinOpFactory>),
	CriterionFactory(Arc<dyn CriterionFactory>),
}

impl AnyFactory {
	pub fn family(&self) -> Family {
		match self {
			Self::LinOpFactory(_) => Family::LinOpFactory,
			Self::CriterionFactory(_) => Family::CriterionFactory,
		}
	}

	pub fn info(&self) -> FactoryInfo {
		match self {
			Self::LinOpFactory(factory) => factory.info(),
			Self::CriterionFactory(factory) => factory.info(),
		}
	}

	pub fn executor(&self) -> &Arc<dyn Executor> {
		match self {
			Self::LinOpFactory(factory) => factory.executor(),
			Self::CriterionFactory(factory) => factory.executor(),
		}
	}

	pub fn downcast_ref<F: AbstractFactory>(&self) -> Option<&F> {
		let any = match self {
			Self::LinOpFactory(factory) => factory.as_any(),
			Self::CriterionFactory(factory) => factory.as_any(),
		};
		any.downcast_ref::<F>()
	}

	pub fn into_lin_op_factory(self) -> Option<Arc<dyn LinOpFactory>> {
		match self {
			Self::LinOpFactory(factory) => Some(factory),
			Self::CriterionFactory(_) => None,
		}
	}

	pub fn into_criterion_factory(self) -> Option<Arc<dyn CriterionFactory>> {
		match self {
			Self::CriterionFactory(factory) => Some(factory),
			Self::LinOpFactory(_) => None,
		}
	}
}

/// A factory trait object that nested fields and registry references can
/// produce: `dyn LinOpFactory` or `dyn CriterionFactory`.
pub trait FactoryFamily: AbstractFactory + RegistryEntry {
	const FAMILY: Family;

	fn unwrap(builder: AnyBuilder) -> Option<Deferred<Self>>;
}

impl FactoryFamily for dyn LinOpFactory {
	const FAMILY: Family = Family::LinOpFactory;

	fn unwrap(builder: AnyBuilder) -> Option<Deferred<Self>> {
		match builder {
			AnyBuilder::LinOpFactory(deferred) => Some(deferred),
			AnyBuilder::CriterionFactory(_) => None,
		}
	}
}

impl FactoryFamily for dyn CriterionFactory {
	const FAMILY: Family = Family::CriterionFactory;

	fn unwrap(builder: AnyBuilder) -> Option<Deferred<Self>> {
		match builder {
			AnyBuilder::CriterionFactory(deferred) => Some(deferred),
			AnyBuilder::LinOpFactory(_) => None,
		}
	}
}
