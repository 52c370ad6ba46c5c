use solvent_core::Scalar;
use solvent_core::stop::{
	CombinedParameters, ImplicitResidualNormParameters, IterationParameters, ResidualNormParameters, TimeParameters,
};

use super::{DispatchTable, configure, register_value};
use crate::builder::AnyBuilder;
use crate::error::Result;
use crate::kind::{BuiltinType, Family};
use crate::parse::Fields;
use crate::pnode::FromPnode;
use crate::schema::{FieldSpec, Shape};

pub(super) const ITERATION: &[FieldSpec] = &[FieldSpec::required("max_iters", Shape::Scalar)];

pub(super) const RESIDUAL_NORM: &[FieldSpec] = &[
	FieldSpec::optional("reduction_factor", Shape::Scalar),
	FieldSpec::optional("baseline", Shape::Scalar),
];

/// `time_limit` is an integer number of nanoseconds.
pub(super) const TIME: &[FieldSpec] = &[FieldSpec::optional("time_limit", Shape::Scalar)];

pub(super) const COMBINED: &[FieldSpec] = &[FieldSpec::required(
	"criteria",
	Shape::Objects(Family::CriterionFactory),
)];

pub(super) fn register(table: &mut DispatchTable) {
	table.type_free(BuiltinType::Iteration, iteration);
	table.type_free(BuiltinType::Time, time);
	table.type_free(BuiltinType::Combined, combined);
	register_value!(table, BuiltinType::ResidualNorm, residual_norm);
	register_value!(table, BuiltinType::ImplicitResidualNorm, implicit_residual_norm);
}

fn iteration(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(IterationParameters::default(), fields { max_iters: value });
	Ok(AnyBuilder::criterion_factory(params))
}

fn time(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(TimeParameters::default(), fields { time_limit: value });
	Ok(AnyBuilder::criterion_factory(params))
}

fn combined(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(CombinedParameters::default(), fields { criteria: factories });
	Ok(AnyBuilder::criterion_factory(params))
}

fn residual_norm<V>(fields: &Fields<'_>) -> Result<AnyBuilder>
where
	V: Scalar,
	V::Real: FromPnode,
{
	let params = configure!(ResidualNormParameters::<V>::default(), fields {
		reduction_factor: value,
		baseline: value,
	});
	Ok(AnyBuilder::criterion_factory(params))
}

fn implicit_residual_norm<V>(fields: &Fields<'_>) -> Result<AnyBuilder>
where
	V: Scalar,
	V::Real: FromPnode,
{
	let params = configure!(ImplicitResidualNormParameters::<V>::default(), fields {
		reduction_factor: value,
		baseline: value,
	});
	Ok(AnyBuilder::criterion_factory(params))
}
