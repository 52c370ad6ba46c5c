use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn names_round_trip() {
	for ty in BuiltinType::iter() {
		assert_eq!(BuiltinType::lookup(ty.name()), Some(ty));
	}
}

#[rstest]
#[case("stop::Iteration", BuiltinType::Iteration)]
#[case("stop::Combined", BuiltinType::Combined)]
fn criteria_accept_namespaced_alias(#[case] name: &str, #[case] expected: BuiltinType) {
	assert_eq!(BuiltinType::lookup(name), Some(expected));
}

#[test]
fn unknown_names_are_not_builtins() {
	assert_eq!(BuiltinType::lookup("solver::Direct"), None);
	assert_eq!(BuiltinType::lookup("Cg"), None);
}

#[rstest]
#[case("LinOpFactory", Kind::Family(Family::LinOpFactory))]
#[case("CriterionFactory", Kind::Family(Family::CriterionFactory))]
#[case("preconditioner::Ilu", Kind::Builtin(BuiltinType::Ilu))]
fn kind_from_name(#[case] name: &str, #[case] expected: Kind) {
	assert_eq!(Kind::lookup(name), Some(expected));
}

#[test]
fn families_and_generics() {
	assert_eq!(BuiltinType::Jacobi.family(), Family::LinOpFactory);
	assert_eq!(BuiltinType::ResidualNorm.family(), Family::CriterionFactory);
	assert_eq!(BuiltinType::Jacobi.generics(), Generics::ValueIndex);
	assert_eq!(BuiltinType::ResidualNorm.generics(), Generics::Value);
	assert_eq!(BuiltinType::Time.generics(), Generics::None);
}
