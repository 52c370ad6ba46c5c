//! Recursive descent from a configuration tree to an unbound builder.

use solvent_core::{Deferred, LinOp, SharedLinOp};
use tracing::{debug, warn};

use crate::builder::{AnyBuilder, FactoryFamily};
use crate::builtins;
use crate::error::{ConfigError, Result};
use crate::kind::{BuiltinType, Kind};
use crate::pnode::{FromPnode, Pnode};
use crate::registry::Registry;
use crate::schema::{FieldSpec, RESERVED_FIELDS};
use crate::type_descriptor::TypeDescriptor;

/// Handling of fields a built-in's schema does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
	/// Reject them with [`ConfigError::UnknownField`].
	#[default]
	Strict,
	/// Ignore them, logging a warning for each.
	Lenient,
}

/// Options for [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
	pub strictness: Strictness,
}

impl ParseOptions {
	pub fn lenient() -> Self {
		Self {
			strictness: Strictness::Lenient,
		}
	}
}

/// Parses `node` into an unbound builder of the requested kind.
///
/// `types` is the descriptor inherited by the root node. The registry is only
/// read; parsing the same node against the same registry twice yields equal
/// builders.
pub fn parse(kind: impl Into<Kind>, node: &Pnode, registry: &Registry, types: &TypeDescriptor) -> Result<AnyBuilder> {
	parse_with(kind, node, registry, types, &ParseOptions::default())
}

/// [`parse`] with explicit options.
pub fn parse_with(
	kind: impl Into<Kind>,
	node: &Pnode,
	registry: &Registry,
	types: &TypeDescriptor,
	options: &ParseOptions,
) -> Result<AnyBuilder> {
	let ctx = Context { registry, options };
	ctx.dispatch(kind.into(), node, types)
}

/// Parses `node` as a member of family `P`, e.g.
/// `parse_factory::<dyn LinOpFactory>(..)`.
pub fn parse_factory<P: ?Sized + FactoryFamily>(
	node: &Pnode,
	registry: &Registry,
	types: &TypeDescriptor,
) -> Result<Deferred<P>> {
	parse(P::FAMILY, node, registry, types)?.into_family()
}

pub(crate) struct Context<'a> {
	registry: &'a Registry,
	options: &'a ParseOptions,
}

impl Context<'_> {
	fn dispatch(&self, kind: Kind, node: &Pnode, parent: &TypeDescriptor) -> Result<AnyBuilder> {
		if !node.is_map() {
			return Err(ConfigError::mismatch(format!("{kind} node"), "map", node));
		}
		let types = TypeDescriptor::resolve(node, parent)?;
		let name = type_name(kind, node)?;

		let Some(ty) = BuiltinType::lookup(name) else {
			return self.custom(kind, name, node, &types);
		};
		if ty.family() != kind.family() || matches!(kind, Kind::Builtin(expected) if expected != ty) {
			return Err(ConfigError::TypeMismatch {
				what: "field 'Type'".into(),
				expected: kind.to_string().into(),
				found: ty.to_string(),
			});
		}

		let parse_fn = builtins::lookup(ty, &types)?;
		debug!(
			type_name = ty.name(),
			value_type = %types.value_type(),
			index_type = %types.index_type(),
			"dispatching built-in"
		);
		let fields = Fields {
			ctx: self,
			owner: ty,
			node,
			types,
		};
		fields.check(builtins::schema(ty))?;
		parse_fn(&fields)
	}

	fn custom(&self, kind: Kind, name: &str, node: &Pnode, types: &TypeDescriptor) -> Result<AnyBuilder> {
		let Some(builder) = self.registry.builder(name) else {
			return Err(ConfigError::UnknownType {
				category: "Type",
				name: name.to_string(),
			});
		};
		if let Kind::Builtin(expected) = kind {
			return Err(ConfigError::TypeMismatch {
				what: "field 'Type'".into(),
				expected: expected.name().into(),
				found: name.to_string(),
			});
		}
		debug!(type_name = name, types = %types, "using custom builder");
		builder(node, self.registry, types)
	}

	/// A nested node, or the name of a registered factory.
	fn object<P: ?Sized + FactoryFamily>(&self, node: &Pnode, types: &TypeDescriptor) -> Result<Deferred<P>> {
		match node {
			Pnode::String(name) => {
				debug!(name = %name, family = %P::FAMILY, "resolving registry factory");
				self.registry.get::<P>(name).map(Deferred::from_factory)
			}
			_ => self.dispatch(Kind::Family(P::FAMILY), node, types)?.into_family(),
		}
	}
}

/// The `Type` named by `node`, or the requested built-in if the node has none.
fn type_name(kind: Kind, node: &Pnode) -> Result<&str> {
	match (node.find("Type"), kind) {
		(Some(field), _) => field
			.as_str()
			.ok_or_else(|| ConfigError::mismatch("field 'Type'", "type name", field)),
		(None, Kind::Builtin(ty)) => Ok(ty.name()),
		(None, Kind::Family(family)) => Err(ConfigError::MissingField {
			owner: family.to_string(),
			field: "Type".into(),
		}),
	}
}

/// Field access for one built-in node, with the node's resolved types.
pub(crate) struct Fields<'a> {
	ctx: &'a Context<'a>,
	owner: BuiltinType,
	node: &'a Pnode,
	types: TypeDescriptor,
}

impl Fields<'_> {
	/// Checks field names, presence and shapes before any value is read.
	fn check(&self, schema: &[FieldSpec]) -> Result<()> {
		let Some(entries) = self.node.as_map() else {
			return Ok(());
		};

		for key in entries.keys() {
			if RESERVED_FIELDS.contains(&key.as_str()) || schema.iter().any(|spec| spec.name == key.as_str()) {
				continue;
			}
			match self.ctx.options.strictness {
				Strictness::Strict => {
					return Err(ConfigError::UnknownField {
						owner: self.owner.to_string(),
						field: key.clone(),
					});
				}
				Strictness::Lenient => warn!(owner = %self.owner, field = %key, "ignoring unknown field"),
			}
		}

		for spec in schema {
			match entries.get(spec.name) {
				None if spec.required => {
					return Err(ConfigError::MissingField {
						owner: self.owner.to_string(),
						field: spec.name.into(),
					});
				}
				Some(value) if !spec.shape.accepts(value) => {
					return Err(ConfigError::mismatch(
						format!("field '{}'", spec.name),
						spec.shape.expected(),
						value,
					));
				}
				_ => {}
			}
		}
		Ok(())
	}

	/// The converted value of field `name`, if present.
	pub(crate) fn value<T: FromPnode>(&self, name: &str) -> Result<Option<T>> {
		self.node
			.find(name)
			.map(|node| T::from_pnode(node).map_err(|err| err.in_field(name)))
			.transpose()
	}

	/// A single nested object or registry factory.
	pub(crate) fn factory<P: ?Sized + FactoryFamily>(&self, name: &str) -> Result<Option<Deferred<P>>> {
		self.node
			.find(name)
			.map(|node| self.ctx.object::<P>(node, &self.types))
			.transpose()
	}

	/// One or several nested objects, always returned as a list.
	pub(crate) fn factories<P: ?Sized + FactoryFamily>(&self, name: &str) -> Result<Option<Vec<Deferred<P>>>> {
		let Some(node) = self.node.find(name) else {
			return Ok(None);
		};
		let items: Result<Vec<_>> = match node.as_array() {
			Some(items) => items.iter().map(|item| self.ctx.object::<P>(item, &self.types)).collect(),
			None => self.ctx.object::<P>(node, &self.types).map(|item| vec![item]),
		};
		items.map(Some)
	}

	/// A registered linear operator named by field `name`.
	pub(crate) fn lin_op(&self, name: &str) -> Result<Option<SharedLinOp>> {
		let Some(node) = self.node.find(name) else {
			return Ok(None);
		};
		let key = node
			.as_str()
			.ok_or_else(|| ConfigError::mismatch(format!("field '{name}'"), "registry name", node))?;
		debug!(name = key, field = name, "resolving registry operator");
		self.ctx.registry.get::<dyn LinOp>(key).map(|op| Some(SharedLinOp(op)))
	}
}
