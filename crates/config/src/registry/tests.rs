use pretty_assertions::assert_eq;
use solvent_core::stop::IterationFactory;
use solvent_core::{Dense, ReferenceExecutor};

use super::*;

fn matrix() -> Arc<dyn LinOp> {
	Arc::new(Dense::from_rows(ReferenceExecutor::create(), &[[1.0f64, 0.0], [0.0, 1.0]]))
}

fn criterion() -> Arc<dyn CriterionFactory> {
	IterationFactory::build().with_max_iters(5).on(&ReferenceExecutor::create())
}

fn no_op_builder(_: &Pnode, _: &Registry, _: &TypeDescriptor) -> Result<AnyBuilder> {
	Ok(AnyBuilder::criterion_factory(IterationFactory::build()))
}

fn custom() -> CustomBuilder {
	Arc::new(no_op_builder)
}

#[test]
fn objects_and_builders_live_in_separate_namespaces() {
	let mut registry = Registry::new();
	registry.emplace_object("shared", matrix()).unwrap();
	registry.emplace_builder("shared", no_op_builder).unwrap();
	assert!(registry.contains_object("shared"));
	assert!(registry.contains_builder("shared"));
	assert!(!registry.contains_object("other"));
}

#[test]
fn duplicate_object_is_rejected() {
	let mut registry = Registry::new();
	registry.emplace_object("A", matrix()).unwrap();
	assert_eq!(
		registry.emplace_object("A", criterion()),
		Err(ConfigError::DuplicateName {
			namespace: "registry object",
			name: "A".into(),
		})
	);
}

#[test]
fn duplicate_builder_is_rejected() {
	let mut registry = Registry::new();
	registry.emplace_builder("custom", no_op_builder).unwrap();
	assert!(matches!(
		registry.emplace_builder("custom", no_op_builder),
		Err(ConfigError::DuplicateName { namespace: "custom builder", .. })
	));
}

#[test]
fn get_returns_the_registered_object() {
	let op = matrix();
	let mut registry = Registry::new();
	registry.emplace_object("A", Arc::clone(&op)).unwrap();
	let found = registry.get::<dyn LinOp>("A").unwrap();
	assert!(Arc::ptr_eq(&found, &op));
}

#[test]
fn get_with_wrong_family_is_type_mismatch() {
	let mut registry = Registry::new();
	registry.emplace_object("stop", criterion()).unwrap();
	assert_eq!(
		registry.get::<dyn LinOpFactory>("stop").err(),
		Some(ConfigError::TypeMismatch {
			what: "registry object 'stop'".into(),
			expected: "linear operator factory".into(),
			found: "criterion factory".into(),
		})
	);
}

#[test]
fn get_unregistered_is_not_found() {
	assert!(matches!(
		Registry::new().get::<dyn LinOp>("missing"),
		Err(ConfigError::NotFound { namespace: "registry object", .. })
	));
}

#[test]
fn get_as_downcasts_to_concrete_type() {
	let mut registry = Registry::new();
	registry.emplace_object("A", matrix()).unwrap();
	registry.emplace_object("stop", criterion()).unwrap();

	let dense = registry.get_as::<Dense<f64>>("A").unwrap();
	assert_eq!(dense.at(1, 1), Some(1.0));
	assert_eq!(registry.get_as::<IterationFactory>("stop").unwrap().parameters().max_iters, 5);
	assert!(matches!(
		registry.get_as::<Dense<f32>>("A"),
		Err(ConfigError::TypeMismatch { .. })
	));
}

#[test]
fn with_builders_collects_custom_builders() {
	let builders = vec![("a", custom()), ("b", custom())];
	let registry = Registry::with_builders(builders).unwrap();
	let mut names: Vec<&str> = registry.builder_names().collect();
	names.sort_unstable();
	assert_eq!(names, ["a", "b"]);
}

#[test]
fn with_builders_rejects_repeated_names() {
	let builders = vec![("a", custom()), ("a", custom())];
	assert!(matches!(
		Registry::with_builders(builders),
		Err(ConfigError::DuplicateName { .. })
	));
}
