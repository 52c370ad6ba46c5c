use solvent_core::preconditioner::{IluParameters, JacobiParameters};
use solvent_core::{IndexInt, Scalar};

use super::{DispatchTable, configure, register_value_index};
use crate::builder::AnyBuilder;
use crate::error::Result;
use crate::kind::{BuiltinType, Family};
use crate::parse::Fields;
use crate::pnode::FromPnode;
use crate::schema::{FieldSpec, Shape};

pub(super) const JACOBI: &[FieldSpec] = &[
	FieldSpec::optional("max_block_size", Shape::Scalar),
	FieldSpec::optional("max_block_stride", Shape::Scalar),
	FieldSpec::optional("skip_sorting", Shape::Scalar),
	FieldSpec::optional("block_pointers", Shape::Array),
	FieldSpec::optional("accuracy", Shape::Scalar),
];

pub(super) const ILU: &[FieldSpec] = &[
	FieldSpec::optional("l_solver", Shape::Object(Family::LinOpFactory)),
	FieldSpec::optional("u_solver", Shape::Object(Family::LinOpFactory)),
	FieldSpec::optional("factorization", Shape::Object(Family::LinOpFactory)),
	FieldSpec::optional("reverse_apply", Shape::Scalar),
];

pub(super) fn register(table: &mut DispatchTable) {
	register_value_index!(table, BuiltinType::Jacobi, jacobi);
	register_value_index!(table, BuiltinType::Ilu, ilu);
}

fn jacobi<V, I>(fields: &Fields<'_>) -> Result<AnyBuilder>
where
	V: Scalar,
	V::Real: FromPnode,
	I: IndexInt + FromPnode,
{
	let params = configure!(JacobiParameters::<V, I>::default(), fields {
		max_block_size: value,
		max_block_stride: value,
		skip_sorting: value,
		block_pointers: value,
		accuracy: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}

fn ilu<V: Scalar, I: IndexInt>(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(IluParameters::<V, I>::default(), fields {
		l_solver: factory,
		u_solver: factory,
		factorization: factory,
		reverse_apply: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}
