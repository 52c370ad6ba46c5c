use solvent_core::solver::{
	BicgParameters, BicgstabParameters, CgParameters, CgsParameters, FcgParameters, GmresParameters, IdrParameters,
	IrParameters, LowerTrsParameters, UpperTrsParameters,
};
use solvent_core::{IndexInt, Scalar};

use super::{DispatchTable, configure, register_value, register_value_index};
use crate::builder::AnyBuilder;
use crate::error::Result;
use crate::kind::{BuiltinType, Family};
use crate::parse::Fields;
use crate::pnode::FromPnode;
use crate::schema::{FieldSpec, Shape};

/// Fields shared by every Krylov solver, followed by `extra`.
macro_rules! iterative_schema {
	($($extra:expr),* $(,)?) => {
		&[
			FieldSpec::required("criteria", Shape::Objects(Family::CriterionFactory)),
			FieldSpec::optional("preconditioner", Shape::Object(Family::LinOpFactory)),
			FieldSpec::optional("generated_preconditioner", Shape::Reference),
			FieldSpec::optional("default_initial_guess", Shape::Scalar),
			$($extra,)*
		]
	};
}

pub(super) const KRYLOV: &[FieldSpec] = iterative_schema!();

pub(super) const GMRES: &[FieldSpec] = iterative_schema!(
	FieldSpec::optional("krylov_dim", Shape::Scalar),
	FieldSpec::optional("flexible", Shape::Scalar),
);

pub(super) const IDR: &[FieldSpec] = iterative_schema!(
	FieldSpec::optional("subspace_dim", Shape::Scalar),
	FieldSpec::optional("kappa", Shape::Scalar),
	FieldSpec::optional("deterministic", Shape::Scalar),
	FieldSpec::optional("complex_subspace", Shape::Scalar),
);

pub(super) const IR: &[FieldSpec] = &[
	FieldSpec::required("criteria", Shape::Objects(Family::CriterionFactory)),
	FieldSpec::optional("solver", Shape::Object(Family::LinOpFactory)),
	FieldSpec::optional("generated_solver", Shape::Reference),
	FieldSpec::optional("relaxation_factor", Shape::Value),
	FieldSpec::optional("default_initial_guess", Shape::Scalar),
];

pub(super) const TRIANGULAR: &[FieldSpec] = &[
	FieldSpec::optional("num_rhs", Shape::Scalar),
	FieldSpec::optional("unit_diagonal", Shape::Scalar),
	FieldSpec::optional("algorithm", Shape::Scalar),
];

pub(super) fn register(table: &mut DispatchTable) {
	register_value!(table, BuiltinType::Cg, cg);
	register_value!(table, BuiltinType::Bicg, bicg);
	register_value!(table, BuiltinType::Bicgstab, bicgstab);
	register_value!(table, BuiltinType::Cgs, cgs);
	register_value!(table, BuiltinType::Fcg, fcg);
	register_value!(table, BuiltinType::Gmres, gmres);
	register_value!(table, BuiltinType::Idr, idr);
	register_value!(table, BuiltinType::Ir, ir);
	register_value_index!(table, BuiltinType::LowerTrs, lower_trs);
	register_value_index!(table, BuiltinType::UpperTrs, upper_trs);
}

/// Parsers for Krylov solvers without extra fields.
macro_rules! krylov_parsers {
	($($parse:ident => $params:ident),* $(,)?) => {$(
		fn $parse<V: Scalar>(fields: &Fields<'_>) -> Result<AnyBuilder> {
			let params = configure!($params::<V>::default(), fields {
				criteria: factories,
				preconditioner: factory,
				generated_preconditioner: lin_op,
				default_initial_guess: value,
			});
			Ok(AnyBuilder::lin_op_factory(params))
		}
	)*};
}

krylov_parsers! {
	cg => CgParameters,
	bicg => BicgParameters,
	bicgstab => BicgstabParameters,
	cgs => CgsParameters,
	fcg => FcgParameters,
}

fn gmres<V: Scalar>(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(GmresParameters::<V>::default(), fields {
		criteria: factories,
		preconditioner: factory,
		generated_preconditioner: lin_op,
		default_initial_guess: value,
		krylov_dim: value,
		flexible: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}

fn idr<V>(fields: &Fields<'_>) -> Result<AnyBuilder>
where
	V: Scalar,
	V::Real: FromPnode,
{
	let params = configure!(IdrParameters::<V>::default(), fields {
		criteria: factories,
		preconditioner: factory,
		generated_preconditioner: lin_op,
		default_initial_guess: value,
		subspace_dim: value,
		kappa: value,
		deterministic: value,
		complex_subspace: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}

fn ir<V: Scalar + FromPnode>(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(IrParameters::<V>::default(), fields {
		criteria: factories,
		solver: factory,
		generated_solver: lin_op,
		relaxation_factor: value,
		default_initial_guess: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}

fn lower_trs<V: Scalar, I: IndexInt>(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(LowerTrsParameters::<V, I>::default(), fields {
		num_rhs: value,
		unit_diagonal: value,
		algorithm: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}

fn upper_trs<V: Scalar, I: IndexInt>(fields: &Fields<'_>) -> Result<AnyBuilder> {
	let params = configure!(UpperTrsParameters::<V, I>::default(), fields {
		num_rhs: value,
		unit_diagonal: value,
		algorithm: value,
	});
	Ok(AnyBuilder::lin_op_factory(params))
}
