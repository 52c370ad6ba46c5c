//! Named objects and custom builders supplied by the caller.
//!
//! The registry has two namespaces. Objects are already constructed
//! operators or factories that configuration can refer to by name. Custom
//! builders handle `Type` names that are not built-in.
//!
//! Parsing only ever reads the registry.

#[cfg(test)]
mod tests;

use core::fmt;
use std::any::{Any, type_name};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use solvent_core::{AbstractFactory, CriterionFactory, LinOp, LinOpFactory};
use tracing::trace;

use crate::builder::AnyBuilder;
use crate::error::{ConfigError, Result};
use crate::pnode::Pnode;
use crate::type_descriptor::TypeDescriptor;

/// Builds an unbound object from its node, bypassing built-in field parsing.
pub type CustomBuilder = Arc<dyn Fn(&Pnode, &Registry, &TypeDescriptor) -> Result<AnyBuilder> + Send + Sync>;

/// A constructed object held by the registry.
#[derive(Debug, Clone)]
pub enum RegisteredObject {
	LinOp(Arc<dyn LinOp>),
	LinOpFactory(Arc<dyn LinOpFactory>),
	CriterionFactory(Arc<dyn CriterionFactory>),
}

impl RegisteredObject {
	/// What kind of object this is, for error messages.
	pub fn describe(&self) -> &'static str {
		match self {
			Self::LinOp(_) => "linear operator",
			Self::LinOpFactory(_) => "linear operator factory",
			Self::CriterionFactory(_) => "criterion factory",
		}
	}

	fn into_any(self) -> Arc<dyn Any + Send + Sync> {
		match self {
			Self::LinOp(op) => LinOp::into_any(op),
			Self::LinOpFactory(factory) => AbstractFactory::into_any(factory),
			Self::CriterionFactory(factory) => AbstractFactory::into_any(factory),
		}
	}
}

impl From<Arc<dyn LinOp>> for RegisteredObject {
	fn from(op: Arc<dyn LinOp>) -> Self {
		Self::LinOp(op)
	}
}

impl From<Arc<dyn LinOpFactory>> for RegisteredObject {
	fn from(factory: Arc<dyn LinOpFactory>) -> Self {
		Self::LinOpFactory(factory)
	}
}

impl From<Arc<dyn CriterionFactory>> for RegisteredObject {
	fn from(factory: Arc<dyn CriterionFactory>) -> Self {
		Self::CriterionFactory(factory)
	}
}

/// Trait objects retrievable with [`Registry::get`].
pub trait RegistryEntry: 'static {
	/// Name of the expected object kind, for error messages.
	const EXPECTED: &'static str;

	fn from_object(object: &RegisteredObject) -> Option<Arc<Self>>;
}

impl RegistryEntry for dyn LinOp {
	const EXPECTED: &'static str = "linear operator";

	fn from_object(object: &RegisteredObject) -> Option<Arc<Self>> {
		match object {
			RegisteredObject::LinOp(op) => Some(Arc::clone(op)),
			_ => None,
		}
	}
}

impl RegistryEntry for dyn LinOpFactory {
	const EXPECTED: &'static str = "linear operator factory";

	fn from_object(object: &RegisteredObject) -> Option<Arc<Self>> {
		match object {
			RegisteredObject::LinOpFactory(factory) => Some(Arc::clone(factory)),
			_ => None,
		}
	}
}

impl RegistryEntry for dyn CriterionFactory {
	const EXPECTED: &'static str = "criterion factory";

	fn from_object(object: &RegisteredObject) -> Option<Arc<Self>> {
		match object {
			RegisteredObject::CriterionFactory(factory) => Some(Arc::clone(factory)),
			_ => None,
		}
	}
}

/// Caller-owned table of named objects and custom builders.
#[derive(Clone, Default)]
pub struct Registry {
	objects: FxHashMap<String, RegisteredObject>,
	builders: FxHashMap<String, CustomBuilder>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding only the given custom builders.
	pub fn with_builders<K: Into<String>>(builders: impl IntoIterator<Item = (K, CustomBuilder)>) -> Result<Self> {
		let mut registry = Self::new();
		for (name, builder) in builders {
			registry.insert_builder(name.into(), builder)?;
		}
		Ok(registry)
	}

	/// Registers a constructed object under `name`.
	pub fn emplace_object(&mut self, name: impl Into<String>, object: impl Into<RegisteredObject>) -> Result<()> {
		let name = name.into();
		if self.objects.contains_key(&name) {
			return Err(ConfigError::DuplicateName {
				namespace: "registry object",
				name,
			});
		}
		let object = object.into();
		trace!(name = %name, kind = object.describe(), "registering object");
		self.objects.insert(name, object);
		Ok(())
	}

	/// Registers a custom builder for the `Type` name `name`.
	pub fn emplace_builder<F>(&mut self, name: impl Into<String>, builder: F) -> Result<()>
	where
		F: Fn(&Pnode, &Registry, &TypeDescriptor) -> Result<AnyBuilder> + Send + Sync + 'static,
	{
		self.insert_builder(name.into(), Arc::new(builder))
	}

	fn insert_builder(&mut self, name: String, builder: CustomBuilder) -> Result<()> {
		if self.builders.contains_key(&name) {
			return Err(ConfigError::DuplicateName {
				namespace: "custom builder",
				name,
			});
		}
		trace!(name = %name, "registering custom builder");
		self.builders.insert(name, builder);
		Ok(())
	}

	pub fn contains_object(&self, name: &str) -> bool {
		self.objects.contains_key(name)
	}

	pub fn contains_builder(&self, name: &str) -> bool {
		self.builders.contains_key(name)
	}

	pub fn object(&self, name: &str) -> Result<&RegisteredObject> {
		self.objects.get(name).ok_or_else(|| ConfigError::NotFound {
			namespace: "registry object",
			name: name.to_string(),
		})
	}

	pub fn builder(&self, name: &str) -> Option<&CustomBuilder> {
		self.builders.get(name)
	}

	/// Looks up `name` as a `P` trait object, e.g. `get::<dyn LinOp>("A")`.
	pub fn get<P: ?Sized + RegistryEntry>(&self, name: &str) -> Result<Arc<P>> {
		let object = self.object(name)?;
		P::from_object(object).ok_or_else(|| ConfigError::TypeMismatch {
			what: format!("registry object '{name}'"),
			expected: P::EXPECTED.into(),
			found: object.describe().into(),
		})
	}

	/// Looks up `name` and downcasts it to the concrete type `T`.
	pub fn get_as<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
		let object = self.object(name)?;
		object
			.clone()
			.into_any()
			.downcast::<T>()
			.map_err(|_| ConfigError::TypeMismatch {
				what: format!("registry object '{name}'"),
				expected: type_name::<T>().into(),
				found: object.describe().into(),
			})
	}

	/// Registered object names, in no particular order.
	pub fn object_names(&self) -> impl Iterator<Item = &str> {
		self.objects.keys().map(String::as_str)
	}

	/// Registered custom builder names, in no particular order.
	pub fn builder_names(&self) -> impl Iterator<Item = &str> {
		self.builders.keys().map(String::as_str)
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("objects", &self.objects)
			.field("builders", &self.builders.keys().collect::<Vec<_>>())
			.finish()
	}
}
