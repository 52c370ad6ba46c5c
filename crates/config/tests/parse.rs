use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use solvent_config::{
	AnyBuilder, BuiltinType, ConfigError, Family, ParseOptions, Pnode, Registry, TypeDescriptor, parse, parse_factory,
	parse_with,
};
use solvent_core::preconditioner::{JacobiFactory, JacobiParameters};
use solvent_core::solver::{CgFactory, CgParameters, GmresParameters, IrParameters, LowerTrsParameters, TrisolveAlgorithm};
use solvent_core::stop::{
	Baseline, CombinedParameters, IterationFactory, IterationParameters, ResidualNormParameters, TimeParameters,
};
use solvent_core::{
	Complex, CriterionFactory, Dense, Dim2, IndexTypeTag, LinOp, LinOpFactory, ReferenceExecutor, ValueTypeTag,
};

fn node(value: serde_json::Value) -> Pnode {
	Pnode::try_from(value).unwrap()
}

fn parse_lin_op(config: serde_json::Value, registry: &Registry) -> Result<AnyBuilder, ConfigError> {
	parse(Family::LinOpFactory, &node(config), registry, &TypeDescriptor::default())
}

fn cg_config() -> serde_json::Value {
	json!({
		"Type": "solver::Cg",
		"ValueType": "float32",
		"criteria": [
			{ "Type": "Iteration", "max_iters": 10 },
			{ "Type": "ResidualNorm", "reduction_factor": 1e-6, "baseline": "absolute" }
		]
	})
}

#[test]
fn cg_with_value_type_and_criteria() {
	let builder = parse_lin_op(cg_config(), &Registry::new()).unwrap();
	assert_eq!(builder.family(), Family::LinOpFactory);
	assert_eq!(builder.info().to_string(), "solver::Cg<float32>");

	let cg = builder.downcast_builder::<CgParameters<f32>>().unwrap();
	assert_eq!(cg.criteria.len(), 2);
	let iteration = cg.criteria[0].downcast_builder::<IterationParameters>().unwrap();
	assert_eq!(iteration.max_iters, 10);
	// criteria inherit the solver's value type
	let residual = cg.criteria[1].downcast_builder::<ResidualNormParameters<f32>>().unwrap();
	assert_eq!(residual.reduction_factor, 1e-6f32);
	assert_eq!(residual.baseline, Baseline::Absolute);
}

#[test]
fn bound_builder_has_the_requested_dynamic_type() {
	let exec = ReferenceExecutor::create();
	let factory = parse_lin_op(cg_config(), &Registry::new()).unwrap().on(&exec);

	let cg = factory.downcast_ref::<CgFactory<f32>>().unwrap();
	assert!(factory.downcast_ref::<CgFactory<f64>>().is_none());
	assert_eq!(factory.executor().name(), "reference");
	let iteration = cg.parameters().criteria[0].downcast_factory::<IterationFactory>().unwrap();
	assert_eq!(iteration.parameters().max_iters, 10);
}

#[test]
fn generated_preconditioner_refers_to_registered_operator() {
	let exec = ReferenceExecutor::create();
	let op: Arc<dyn LinOp> = Arc::new(Dense::<f64>::zeros(exec.clone(), Dim2::new(3, 3)));
	let mut registry = Registry::new();
	registry.emplace_object("precond", Arc::clone(&op)).unwrap();

	let config = json!({
		"Type": "solver::Cg",
		"criteria": { "Type": "Iteration", "max_iters": 4 },
		"generated_preconditioner": "precond"
	});
	let factory = parse_lin_op(config, &registry).unwrap().on(&exec);
	let cg = factory.downcast_ref::<CgFactory<f64>>().unwrap();
	assert!(cg.parameters().generated_preconditioner.as_ref().unwrap().is(&op));
}

#[test]
fn preconditioner_can_name_a_registered_factory() {
	let exec = ReferenceExecutor::create();
	let jacobi: Arc<dyn LinOpFactory> = JacobiFactory::<f64, i32>::build().with_max_block_size(4).on(&exec);
	let mut registry = Registry::new();
	registry.emplace_object("jacobi", Arc::clone(&jacobi)).unwrap();

	let config = json!({
		"Type": "solver::Cg",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"preconditioner": "jacobi"
	});
	let factory = parse_lin_op(config, &registry).unwrap().on(&exec);
	let cg = factory.downcast_ref::<CgFactory<f64>>().unwrap();
	let bound = cg.parameters().preconditioner.as_ref().unwrap().bound().unwrap();
	assert!(Arc::ptr_eq(bound, &jacobi));
}

#[test]
fn nested_preconditioner_is_parsed_recursively() {
	let config = json!({
		"Type": "solver::Cg",
		"ValueType": "complex<double>",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"preconditioner": {
			"Type": "preconditioner::Jacobi",
			"IndexType": "int64",
			"max_block_size": 1,
			"block_pointers": [0, 2, 4]
		}
	});
	let builder = parse_lin_op(config, &Registry::new()).unwrap();
	let cg = builder.downcast_builder::<CgParameters<Complex<f64>>>().unwrap();
	let preconditioner = cg.preconditioner.as_ref().unwrap();
	assert_eq!(preconditioner.info().to_string(), "preconditioner::Jacobi<complex<float64>, int64>");

	let jacobi = preconditioner.downcast_builder::<JacobiParameters<Complex<f64>, i64>>().unwrap();
	assert_eq!(jacobi.max_block_size, 1);
	assert_eq!(jacobi.block_pointers, Some(vec![0i64, 2, 4]));
}

#[test]
fn nested_override_does_not_leak_to_siblings() {
	let config = json!({
		"Type": "preconditioner::Ilu",
		"l_solver": { "Type": "solver::LowerTrs", "ValueType": "float32" },
		"u_solver": { "Type": "solver::UpperTrs" }
	});
	let builder = parse_lin_op(config, &Registry::new()).unwrap();
	assert_eq!(builder.info().to_string(), "preconditioner::Ilu<float64, int32>");
	let ilu = builder
		.downcast_builder::<solvent_core::preconditioner::IluParameters<f64, i32>>()
		.unwrap();
	assert_eq!(
		ilu.l_solver.as_ref().unwrap().info().to_string(),
		"solver::LowerTrs<float32, int32>"
	);
	assert_eq!(
		ilu.u_solver.as_ref().unwrap().info().to_string(),
		"solver::UpperTrs<float64, int32>"
	);
}

#[test]
fn custom_builder_bypasses_builtin_parsing() {
	let expected = AnyBuilder::lin_op_factory(JacobiParameters::<f32, i64>::default().with_max_block_size(7));
	let returned = expected.clone();
	let mut registry = Registry::new();
	registry
		.emplace_builder("MyPreconditioner", move |node, _, types| {
			assert_eq!(node.get("anything")?.get_value::<i64>()?, 1);
			assert_eq!(types.value_type(), ValueTypeTag::Float32);
			Ok(returned.clone())
		})
		.unwrap();

	let config = json!({
		"Type": "solver::Cg",
		"ValueType": "float32",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"preconditioner": { "Type": "MyPreconditioner", "anything": 1 }
	});
	let builder = parse_lin_op(config, &registry).unwrap();
	let cg = builder.downcast_builder::<CgParameters<f32>>().unwrap();
	assert_eq!(Some(&expected), cg.preconditioner.clone().map(AnyBuilder::LinOpFactory).as_ref());
}

#[test]
fn custom_builder_of_wrong_family_is_type_mismatch() {
	let mut registry = Registry::new();
	registry
		.emplace_builder("Never", |_, _, _| {
			Ok(AnyBuilder::criterion_factory(IterationParameters::default()))
		})
		.unwrap();
	let config = json!({
		"Type": "solver::Cg",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"preconditioner": { "Type": "Never" }
	});
	assert!(matches!(
		parse_lin_op(config, &registry),
		Err(ConfigError::TypeMismatch { ref what, .. }) if what == "builder"
	));
}

#[test]
fn parsing_is_idempotent() {
	let exec = ReferenceExecutor::create();
	let mut registry = Registry::new();
	registry
		.emplace_object("A", Arc::new(Dense::<f64>::zeros(exec, Dim2::new(2, 2))) as Arc<dyn LinOp>)
		.unwrap();
	let config = node(json!({
		"Type": "solver::Gmres",
		"krylov_dim": 30,
		"flexible": true,
		"generated_preconditioner": "A",
		"criteria": [
			{ "Type": "Combined", "criteria": [{ "Type": "Time", "time_limit": 1000 }] },
			{ "Type": "stop::Iteration", "max_iters": 100 }
		],
		"preconditioner": { "Type": "solver::Ir", "criteria": { "Type": "Iteration", "max_iters": 2 } }
	}));
	let types = TypeDescriptor::default();
	let first = parse(Family::LinOpFactory, &config, &registry, &types).unwrap();
	let second = parse(Family::LinOpFactory, &config, &registry, &types).unwrap();
	assert_eq!(first, second);

	let gmres = first.downcast_builder::<GmresParameters<f64>>().unwrap();
	assert_eq!((gmres.krylov_dim, gmres.flexible), (30, true));
}

#[test]
fn single_criterion_object_becomes_a_list() {
	let config = node(json!({ "Type": "Combined", "criteria": { "Type": "Time", "time_limit": 2500 } }));
	let builder = parse(Family::CriterionFactory, &config, &Registry::new(), &TypeDescriptor::default()).unwrap();
	let combined = builder.downcast_builder::<CombinedParameters>().unwrap();
	assert_eq!(combined.criteria.len(), 1);
	let time = combined.criteria[0].downcast_builder::<TimeParameters>().unwrap();
	assert_eq!(time.time_limit, Duration::from_nanos(2500));
}

#[test]
fn relaxation_factor_accepts_complex_pair() {
	let config = json!({
		"Type": "solver::Ir",
		"ValueType": "complex<float>",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"relaxation_factor": [0.5, 0.25]
	});
	let builder = parse_lin_op(config, &Registry::new()).unwrap();
	let ir = builder.downcast_builder::<IrParameters<Complex<f32>>>().unwrap();
	assert_eq!(ir.relaxation_factor, Complex::new(0.5, 0.25));
}

#[test]
fn concrete_kind_needs_no_type_field() {
	let config = node(json!({ "ValueType": "float32", "IndexType": "int64", "algorithm": "syncfree" }));
	let builder = parse(BuiltinType::LowerTrs, &config, &Registry::new(), &TypeDescriptor::default()).unwrap();
	let trs = builder.downcast_builder::<LowerTrsParameters<f32, i64>>().unwrap();
	assert_eq!(trs.algorithm, TrisolveAlgorithm::Syncfree);
}

#[test]
fn concrete_kind_rejects_other_type() {
	let config = node(json!({ "Type": "solver::UpperTrs" }));
	assert!(matches!(
		parse(BuiltinType::LowerTrs, &config, &Registry::new(), &TypeDescriptor::default()),
		Err(ConfigError::TypeMismatch { .. })
	));
}

#[test]
fn typed_entry_point_returns_family_builder() {
	let config = node(json!({ "Type": "ImplicitResidualNorm", "reduction_factor": 1e-3 }));
	let deferred =
		parse_factory::<dyn CriterionFactory>(&config, &Registry::new(), &TypeDescriptor::default()).unwrap();
	assert_eq!(deferred.info().to_string(), "ImplicitResidualNorm<float64>");

	let config = node(json!({ "Type": "Iteration", "max_iters": 1 }));
	assert!(matches!(
		parse_factory::<dyn LinOpFactory>(&config, &Registry::new(), &TypeDescriptor::default()),
		Err(ConfigError::TypeMismatch { .. })
	));
}

#[test]
fn missing_criteria_is_missing_field() {
	let config = json!({ "Type": "solver::Cg" });
	assert_eq!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::MissingField {
			owner: "solver::Cg".into(),
			field: "criteria".into(),
		})
	);
}

#[test]
fn missing_type_is_missing_field() {
	assert_eq!(
		parse_lin_op(json!({ "criteria": [] }), &Registry::new()),
		Err(ConfigError::MissingField {
			owner: "LinOpFactory".into(),
			field: "Type".into(),
		})
	);
}

#[test]
fn unregistered_reference_is_not_found() {
	let config = json!({
		"Type": "solver::Cg",
		"criteria": [{ "Type": "Iteration", "max_iters": 4 }],
		"preconditioner": "nowhere"
	});
	assert_eq!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::NotFound {
			namespace: "registry object",
			name: "nowhere".into(),
		})
	);
}

#[rstest]
#[case::value_type(json!({ "Type": "solver::Cg", "ValueType": "float16", "criteria": [] }), "ValueType", "float16")]
#[case::index_type(json!({ "Type": "solver::Cg", "IndexType": "int8", "criteria": [] }), "IndexType", "int8")]
#[case::type_name(json!({ "Type": "solver::Direct" }), "Type", "solver::Direct")]
fn unrecognized_names_are_unknown_type(
	#[case] config: serde_json::Value,
	#[case] category: &'static str,
	#[case] name: &str,
) {
	assert_eq!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::UnknownType {
			category,
			name: name.into(),
		})
	);
}

#[test]
fn void_index_for_index_generic_is_unsupported() {
	let config = json!({ "Type": "preconditioner::Jacobi", "IndexType": "void" });
	assert_eq!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::UnsupportedTypeCombination {
			type_name: "preconditioner::Jacobi",
			value_type: ValueTypeTag::Float64,
			index_type: IndexTypeTag::Void,
		})
	);
}

#[test]
fn solver_in_criteria_is_type_mismatch() {
	let config = json!({ "Type": "solver::Cg", "criteria": [{ "Type": "solver::Bicg", "criteria": [] }] });
	assert!(matches!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::TypeMismatch { .. })
	));
}

#[test]
fn bad_value_names_the_field() {
	let config = node(json!({ "Type": "Iteration", "max_iters": "ten" }));
	let err = parse(Family::CriterionFactory, &config, &Registry::new(), &TypeDescriptor::default()).unwrap_err();
	assert_eq!(
		err,
		ConfigError::TypeMismatch {
			what: "field 'max_iters'".into(),
			expected: "usize".into(),
			found: "string \"ten\"".into(),
		}
	);
}

#[test]
fn real_overflowing_single_precision_is_rejected() {
	let config = node(json!({ "Type": "ResidualNorm", "ValueType": "float32", "reduction_factor": 1e300 }));
	let err = parse(Family::CriterionFactory, &config, &Registry::new(), &TypeDescriptor::default()).unwrap_err();
	assert!(matches!(
		err,
		ConfigError::TypeMismatch { ref what, ref expected, .. }
			if what == "field 'reduction_factor'" && expected == "f32 within range"
	));
}

#[test]
fn wrong_shape_is_type_mismatch() {
	let config = json!({ "Type": "solver::Cg", "criteria": 3 });
	assert_eq!(
		parse_lin_op(config, &Registry::new()),
		Err(ConfigError::TypeMismatch {
			what: "field 'criteria'".into(),
			expected: "CriterionFactory object or array of objects".into(),
			found: "integer 3".into(),
		})
	);
}

#[test]
fn unknown_field_is_rejected_when_strict() {
	let config = json!({ "Type": "Iteration", "max_iters": 4, "max_iter": 5 });
	assert_eq!(
		parse(Family::CriterionFactory, &node(config), &Registry::new(), &TypeDescriptor::default()),
		Err(ConfigError::UnknownField {
			owner: "Iteration".into(),
			field: "max_iter".into(),
		})
	);
}

#[test]
fn unknown_field_is_ignored_when_lenient() {
	let config = node(json!({ "Type": "Iteration", "max_iters": 4, "max_iter": 5 }));
	let builder = parse_with(
		Family::CriterionFactory,
		&config,
		&Registry::new(),
		&TypeDescriptor::default(),
		&ParseOptions::lenient(),
	)
	.unwrap();
	assert_eq!(builder.downcast_builder::<IterationParameters>().unwrap().max_iters, 4);
}

#[test]
fn root_must_be_a_map() {
	assert!(matches!(
		parse_lin_op(json!("solver::Cg"), &Registry::new()),
		Err(ConfigError::TypeMismatch { .. })
	));
}
