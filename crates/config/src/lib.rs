//! Runtime construction of solver components from configuration trees.
//!
//! A configuration is a [`Pnode`] tree, written by hand or loaded from JSON
//! or TOML. [`parse`] walks it and returns an unbound [`AnyBuilder`] for the
//! requested [`Kind`]; binding the builder to an executor yields the factory.
//!
//! ```json
//! {
//!     "Type": "solver::Cg",
//!     "ValueType": "float64",
//!     "criteria": [
//!         { "Type": "Iteration", "max_iters": 100 },
//!         { "Type": "ResidualNorm", "reduction_factor": 1e-8 }
//!     ],
//!     "preconditioner": { "Type": "preconditioner::Jacobi", "max_block_size": 1 }
//! }
//! ```
//!
//! # Dispatch
//!
//! Every node may carry `ValueType` and `IndexType`; unset types are inherited
//! from the enclosing node, down from the [`TypeDescriptor`] passed to
//! [`parse`]. The `Type` field names a built-in (see [`BuiltinType`]) or a
//! custom builder registered in the [`Registry`]. Built-ins are selected from
//! a static table keyed by type name, value type and index type, and their
//! fields are checked against a fixed schema before parameters are read.
//!
//! A field expecting a sub-factory takes either a nested node or the name of
//! an object in the registry.
//!
//! # Unknown fields
//!
//! By default a built-in node containing a field outside its schema is
//! rejected with [`ConfigError::UnknownField`]. [`Strictness::Lenient`]
//! ignores such fields and logs a warning instead.

mod builder;
pub mod builtins;
mod error;
mod kind;
#[cfg(any(feature = "json", feature = "toml"))]
pub mod load;
mod parse;
pub mod pnode;
pub mod registry;
pub mod schema;
mod type_descriptor;

pub use builder::{AnyBuilder, AnyFactory, FactoryFamily};
pub use error::{ConfigError, Result};
pub use kind::{BuiltinType, Family, Generics, Kind};
#[cfg(any(feature = "json", feature = "toml"))]
pub use load::{LoadError, load_file};
pub use parse::{ParseOptions, Strictness, parse, parse_factory, parse_with};
pub use pnode::{FromPnode, Pnode};
pub use registry::{CustomBuilder, RegisteredObject, Registry};
pub use type_descriptor::TypeDescriptor;
