use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use crate::preconditioner::JacobiFactory;
use crate::solver::{BicgFactory, CgFactory, GmresFactory, InitialGuessMode};
use crate::stop::{Baseline, CombinedFactory, IterationFactory, ResidualNormFactory, TimeFactory};
use crate::{
	AbstractFactory, Complex, CriterionFactory, Deferred, Dense, Dim2, FactoryBuilder, IndexTypeTag, LinOp,
	LinOpFactory, ReferenceExecutor, SharedLinOp, ValueTypeTag,
};

fn iteration(max_iters: usize) -> Deferred<dyn CriterionFactory> {
	Deferred::from_builder(IterationFactory::build().with_max_iters(max_iters))
}

#[test]
fn binding_binds_nested_builders() {
	let exec = ReferenceExecutor::create();
	let params = CgFactory::<f64>::build()
		.with_criteria(vec![iteration(5)])
		.with_preconditioner(Deferred::from_builder(BicgFactory::<f64>::build().with_criteria(vec![iteration(2)])));

	let factory = params.on(&exec);

	assert_eq!(factory.executor().name(), "reference");
	assert!(factory.parameters().criteria.iter().all(Deferred::is_bound));
	let precond = factory.parameters().preconditioner.as_ref().expect("preconditioner is set");
	let bicg = precond.downcast_factory::<BicgFactory<f64>>().expect("preconditioner is a bound Bicg");
	assert_eq!(bicg.parameters().criteria.len(), 1);
	assert!(Arc::ptr_eq(bicg.executor(), &exec));
}

#[test]
fn bound_factories_are_shared_not_rebuilt() {
	let exec = ReferenceExecutor::create();
	let shared: Arc<dyn CriterionFactory> = IterationFactory::build().with_max_iters(3).on(&exec);
	let params = CombinedFactory::build().with_criteria(vec![Deferred::from_factory(Arc::clone(&shared))]);

	let combined = params.on(&exec);

	let bound = combined.parameters().criteria[0].bound().expect("bound");
	assert!(std::ptr::addr_eq(Arc::as_ptr(bound), Arc::as_ptr(&shared)));
}

#[test]
fn builders_compare_structurally() {
	let a = Deferred::<dyn LinOpFactory>::from_builder(
		GmresFactory::<f32>::build().with_krylov_dim(30).with_criteria(vec![iteration(10)]),
	);
	let b = Deferred::<dyn LinOpFactory>::from_builder(
		GmresFactory::<f32>::build().with_krylov_dim(30).with_criteria(vec![iteration(10)]),
	);
	let c = Deferred::<dyn LinOpFactory>::from_builder(
		GmresFactory::<f64>::build().with_krylov_dim(30).with_criteria(vec![iteration(10)]),
	);

	assert_eq!(a, b);
	assert_ne!(a, c);
}

#[test]
fn defaults_follow_value_type() {
	let params = ResidualNormFactory::<f32>::build();
	assert_eq!(params.reduction_factor, 5.0 * f32::EPSILON);
	assert_eq!(params.baseline, Baseline::RhsNorm);
	assert_eq!(CgFactory::<f64>::build().default_initial_guess, InitialGuessMode::Rhs);
	assert_eq!(TimeFactory::build().time_limit, Duration::from_secs(10));
}

#[test]
fn info_names_the_instantiation() {
	let jacobi = JacobiFactory::<Complex<f64>, i64>::build();
	let info = FactoryBuilder::<dyn LinOpFactory>::info(&jacobi);

	assert_eq!(info.value_type, Some(ValueTypeTag::Complex64));
	assert_eq!(info.index_type, Some(IndexTypeTag::Int64));
	assert_eq!(info.to_string(), "preconditioner::Jacobi<complex<float64>, int64>");
	assert_eq!(IterationFactory::build().info().to_string(), "Iteration");
}

#[test]
fn shared_lin_op_identity() {
	let exec = ReferenceExecutor::create();
	let mtx = Arc::new(Dense::from_rows(Arc::clone(&exec), &[[2.0, -1.0], [-1.0, 2.0]]));
	let other = Arc::new(Dense::<f64>::zeros(exec, Dim2::new(2, 2)));
	let handle = SharedLinOp::new(Arc::clone(&mtx));

	assert!(handle.is(&mtx));
	assert!(!handle.is(&other));
	assert_eq!(handle, SharedLinOp::new(mtx));
	assert_eq!(handle.0.size(), Dim2::new(2, 2));
	assert_eq!(handle.downcast_ref::<Dense<f64>>().and_then(|m| m.at(1, 0)), Some(-1.0));
}

#[test]
fn dense_rejects_wrong_length() {
	let err = Dense::<f32>::new(ReferenceExecutor::create(), Dim2::new(2, 3), vec![0.0; 5]).unwrap_err();
	assert_eq!(err.to_string(), "5 values cannot fill a 2x3 matrix");
}

#[test]
fn tags_parse_aliases() {
	assert_eq!("double".parse::<ValueTypeTag>(), Ok(ValueTypeTag::Float64));
	assert_eq!("complex<float>".parse::<ValueTypeTag>(), Ok(ValueTypeTag::Complex32));
	assert_eq!("int".parse::<IndexTypeTag>(), Ok(IndexTypeTag::Int32));
	assert_eq!(ValueTypeTag::Complex32.to_string(), "complex<float32>");
	assert_eq!(ValueTypeTag::default(), ValueTypeTag::Float64);
	assert_eq!(IndexTypeTag::default(), IndexTypeTag::Int32);
	assert!("half".parse::<ValueTypeTag>().is_err());
}
