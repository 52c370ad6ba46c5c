//! Object model for configurable linear-solver components.
//!
//! Every constructible component (Krylov solvers, triangular solvers,
//! preconditioners, stopping criteria) is described by a parameter set that
//! doubles as an unbound builder. Binding a parameter set to an [`Executor`]
//! produces the factory object; nested sub-object parameters are carried as
//! [`Deferred`] values so they can be bound together with their parent.
//!
//! # Modules
//!
//! - [`types`] - runtime tags naming value and index types
//! - [`scalar`] - static value/index type traits
//! - [`executor`] - execution contexts
//! - [`lin_op`] - linear operators and the dense matrix
//! - [`factory`] - factory traits, deferred builders, binding
//! - [`solver`], [`preconditioner`], [`stop`] - built-in families

#[macro_use]
mod macros;

pub mod executor;
pub mod factory;
pub mod lin_op;
pub mod preconditioner;
pub mod scalar;
pub mod solver;
pub mod stop;
pub mod types;

#[cfg(test)]
mod tests;

pub use executor::{Executor, ReferenceExecutor};
pub use factory::{
	AbstractFactory, Bind, CriterionFactory, Deferred, FactoryBuilder, FactoryInfo, LinOpFactory,
};
pub use lin_op::{Dense, Dim2, DimensionMismatch, LinOp, SharedLinOp};
pub use num_complex::Complex;
pub use scalar::{IndexInt, RealScalar, Scalar};
pub use types::{IndexTypeTag, ValueTypeTag};
