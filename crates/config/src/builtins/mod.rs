//! Built-in types: schemas and the static dispatch table.
//!
//! Every built-in is registered once per supported `(value type, index
//! type)` pair with a parser monomorphised for that pair. Type-free built-ins
//! are registered for every pair, value-generic ones for every index type
//! including `void`, and built-ins generic over both only for integer index
//! types.

mod preconditioner;
mod solver;
mod stop;


use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use solvent_core::{IndexInt, IndexTypeTag, Scalar, ValueTypeTag};
use strum::IntoEnumIterator;

use crate::builder::AnyBuilder;
use crate::error::{ConfigError, Result};
use crate::kind::BuiltinType;
use crate::parse::Fields;
use crate::schema::FieldSpec;
use crate::type_descriptor::TypeDescriptor;

/// Reads a built-in's fields into its parameter set.
pub(crate) type ParseFn = fn(&Fields<'_>) -> Result<AnyBuilder>;

type DispatchKey = (BuiltinType, ValueTypeTag, IndexTypeTag);

/// Applies each present field to a parameter set through its `with_*` setter.
///
/// The reader names the [`Fields`] method used for the field: `value`,
/// `factory`, `factories` or `lin_op`.
macro_rules! configure {
	($params:expr, $fields:ident { $($field:ident: $read:ident),* $(,)? }) => {{
		let mut params = $params;
		$(
			if let Some(value) = $fields.$read(stringify!($field))? {
				params = paste::paste! { params.[<with_ $field>](value) };
			}
		)*
		params
	}};
}

/// Registers `$parse::<V>` for every value type.
macro_rules! register_value {
	($table:ident, $ty:expr, $parse:ident) => {
		$table.value_generic::<f32>($ty, $parse::<f32>);
		$table.value_generic::<f64>($ty, $parse::<f64>);
		$table.value_generic::<solvent_core::Complex<f32>>($ty, $parse::<solvent_core::Complex<f32>>);
		$table.value_generic::<solvent_core::Complex<f64>>($ty, $parse::<solvent_core::Complex<f64>>);
	};
}

/// Registers `$parse::<V, I>` for every value type and integer index type.
macro_rules! register_value_index {
	($table:ident, $ty:expr, $parse:ident) => {
		register_value_index!(@value $table, $ty, $parse, f32);
		register_value_index!(@value $table, $ty, $parse, f64);
		register_value_index!(@value $table, $ty, $parse, solvent_core::Complex<f32>);
		register_value_index!(@value $table, $ty, $parse, solvent_core::Complex<f64>);
	};
	(@value $table:ident, $ty:expr, $parse:ident, $value:ty) => {
		$table.value_index_generic::<$value, i32>($ty, $parse::<$value, i32>);
		$table.value_index_generic::<$value, i64>($ty, $parse::<$value, i64>);
	};
}

pub(crate) use {configure, register_value, register_value_index};

#[derive(Default)]
pub(crate) struct DispatchTable {
	entries: FxHashMap<DispatchKey, ParseFn>,
}

impl DispatchTable {
	fn insert(&mut self, ty: BuiltinType, value_type: ValueTypeTag, index_type: IndexTypeTag, parse: ParseFn) {
		let previous = self.entries.insert((ty, value_type, index_type), parse);
		debug_assert!(previous.is_none(), "{ty} registered twice for ({value_type}, {index_type})");
	}

	pub(crate) fn type_free(&mut self, ty: BuiltinType, parse: ParseFn) {
		for value_type in ValueTypeTag::iter() {
			for index_type in IndexTypeTag::iter() {
				self.insert(ty, value_type, index_type, parse);
			}
		}
	}

	pub(crate) fn value_generic<V: Scalar>(&mut self, ty: BuiltinType, parse: ParseFn) {
		for index_type in IndexTypeTag::iter() {
			self.insert(ty, V::TAG, index_type, parse);
		}
	}

	pub(crate) fn value_index_generic<V: Scalar, I: IndexInt>(&mut self, ty: BuiltinType, parse: ParseFn) {
		self.insert(ty, V::TAG, I::TAG, parse);
	}
}

static TABLE: LazyLock<DispatchTable> = LazyLock::new(|| {
	let mut table = DispatchTable::default();
	register_builtins(&mut table);
	table
});

fn register_builtins(table: &mut DispatchTable) {
	solver::register(table);
	preconditioner::register(table);
	stop::register(table);
}

/// The parser for `ty` instantiated with `types`.
pub(crate) fn lookup(ty: BuiltinType, types: &TypeDescriptor) -> Result<ParseFn> {
	TABLE
		.entries
		.get(&(ty, types.value_type(), types.index_type()))
		.copied()
		.ok_or(ConfigError::UnsupportedTypeCombination {
			type_name: ty.name(),
			value_type: types.value_type(),
			index_type: types.index_type(),
		})
}

/// Whether `ty` can be instantiated with `types`.
pub fn is_supported(ty: BuiltinType, types: &TypeDescriptor) -> bool {
	lookup(ty, types).is_ok()
}

/// Every descriptor `ty` can be instantiated with, in tag order.
pub fn supported_types(ty: BuiltinType) -> Vec<TypeDescriptor> {
	let mut types: Vec<_> = TABLE
		.entries
		.keys()
		.filter(|(key, _, _)| *key == ty)
		.map(|&(_, value_type, index_type)| TypeDescriptor::new(value_type, index_type))
		.collect();
	types.sort_by_key(|types| (types.value_type(), types.index_type()));
	types
}

/// The fields `ty` accepts besides `Type`, `ValueType` and `IndexType`.
pub fn schema(ty: BuiltinType) -> &'static [FieldSpec] {
	match ty {
		BuiltinType::Cg | BuiltinType::Bicg | BuiltinType::Bicgstab | BuiltinType::Cgs | BuiltinType::Fcg => {
			solver::KRYLOV
		}
		BuiltinType::Gmres => solver::GMRES,
		BuiltinType::Idr => solver::IDR,
		BuiltinType::Ir => solver::IR,
		BuiltinType::LowerTrs | BuiltinType::UpperTrs => solver::TRIANGULAR,
		BuiltinType::Jacobi => preconditioner::JACOBI,
		BuiltinType::Ilu => preconditioner::ILU,
		BuiltinType::Iteration => stop::ITERATION,
		BuiltinType::ResidualNorm | BuiltinType::ImplicitResidualNorm => stop::RESIDUAL_NORM,
		BuiltinType::Time => stop::TIME,
		BuiltinType::Combined => stop::COMBINED,
	}
}
