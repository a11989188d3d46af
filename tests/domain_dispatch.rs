use std::any::Any;

use lyra_typeof::math::{
    self, BigNumber, Chain, Complex, DenseMatrix, DomainKind, Fraction, Help, Index, Range,
    ResultSet, SparseMatrix, Unit,
};
use lyra_typeof::{predicate, Classifier, Foreign, Registry, TypeTag, Value};
use pretty_assertions::assert_eq;

fn default_classifier() -> Classifier {
    Classifier::new(math::default_registry().unwrap())
}

/// Complex number from another numeric package, also branded as a generic scalar.
#[derive(Debug, Clone)]
struct ForeignComplex;

impl Foreign for ForeignComplex {
    fn type_name(&self) -> &'static str { "ForeignComplex" }
    fn brands(&self) -> &'static [&'static str] { &["Complex", "Scalar"] }
    fn clone_boxed(&self) -> Box<dyn Foreign> { Box::new(self.clone()) }
    fn as_any(&self) -> &dyn Any { self }
}

#[test]
fn math_types_resolve_to_their_tags() {
    let c = default_classifier();
    let cases = vec![
        (Value::foreign(BigNumber::new("2.3e500")), "BigNumber"),
        (Value::foreign(Complex::new(2.0, 3.0)), "Complex"),
        (Value::foreign(Fraction::new(1, 3)), "Fraction"),
        (Value::foreign(DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])), "Matrix"),
        (Value::foreign(SparseMatrix::new(2, 2, vec![(0, 0, 1.0)])), "Matrix"),
        (Value::foreign(Unit::new(Some(45.0), "deg")), "Unit"),
        (Value::foreign(Index::new(vec![Range::new(1.0, 3.0)])), "Index"),
        (Value::foreign(Range::with_step(0.0, 10.0, 2.0)), "Range"),
        (Value::foreign(ResultSet::new(vec![Value::Number(2.0), Value::Number(3.0)])), "ResultSet"),
        (Value::foreign(Chain::new(Value::Number(2.0))), "Chain"),
        (Value::foreign(Help::new("sqrt")), "Help"),
    ];
    let got: Vec<String> = cases.iter().map(|(v, _)| c.classify(v).to_string()).collect();
    let want: Vec<String> = cases.iter().map(|(_, t)| t.to_string()).collect();
    assert_eq!(got, want);
}

#[test]
fn default_registry_follows_library_order() {
    let tags: Vec<String> =
        math::default_registry().unwrap().tags().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        tags,
        vec![
            "BigNumber", "Complex", "Fraction", "Matrix", "Unit", "Index", "Range", "ResultSet",
            "Node", "Chain", "Help",
        ]
    );
}

#[test]
fn brand_predicates_are_duck_typed() {
    let c = default_classifier();
    assert_eq!(c.classify(&Value::foreign(ForeignComplex)), "Complex");
}

#[test]
fn exact_type_predicate_ignores_lookalikes() {
    let reg = Registry::builder()
        .register("Complex", predicate::is_foreign::<Complex>())
        .build()
        .unwrap();
    let c = Classifier::new(reg);
    assert_eq!(c.classify(&Value::foreign(Complex::new(0.0, 1.0))), "Complex");
    assert_eq!(c.classify(&Value::foreign(ForeignComplex)), "Object");
}

#[test]
fn first_registered_match_wins() {
    let scalar_first = Registry::builder()
        .register("Scalar", predicate::has_brand("Scalar"))
        .register("Complex", predicate::has_brand("Complex"))
        .build()
        .unwrap();
    let complex_first = Registry::builder()
        .register("Complex", predicate::has_brand("Complex"))
        .register("Scalar", predicate::has_brand("Scalar"))
        .build()
        .unwrap();
    let v = Value::foreign(ForeignComplex);
    assert_eq!(Classifier::new(scalar_first).classify(&v), "Scalar");
    assert_eq!(Classifier::new(complex_first).classify(&v), "Complex");
}

#[test]
fn later_entries_still_reachable_when_earlier_decline() {
    let reg = Registry::builder()
        .register("Scalar", predicate::has_brand("Scalar"))
        .register("Unit", predicate::has_brand("Unit"))
        .build()
        .unwrap();
    let c = Classifier::new(reg);
    assert_eq!(c.classify(&Value::foreign(Unit::new(None, "cm"))), "Unit");
}

#[test]
fn closure_predicates_can_claim_plain_records() {
    // Records carrying a `re`/`im` pair are complex numbers to this host.
    let reg = Registry::builder()
        .register(
            "Complex",
            predicate::from_fn(|v| match v {
                Value::Object(m) => m.contains_key("re") && m.contains_key("im"),
                _ => false,
            }),
        )
        .build()
        .unwrap();
    let c = Classifier::new(reg);
    let z = Value::object(vec![("re", Value::Number(1.0)), ("im", Value::Number(0.0))]);
    let rec = Value::object(vec![("a", Value::Number(2.0))]);
    assert_eq!(c.classify(&z), "Complex");
    assert_eq!(c.classify(&rec), "Object");
}

#[test]
fn registry_can_be_extended_with_host_types() {
    let custom = Registry::builder()
        .register("Scalar", predicate::has_brand("Scalar"))
        .extend(&math::default_registry().unwrap())
        .build()
        .unwrap();
    let c = Classifier::new(custom);
    assert_eq!(c.registry().len(), 12);
    assert_eq!(c.classify(&Value::foreign(ForeignComplex)), "Scalar");
    assert_eq!(c.classify(&Value::foreign(Fraction::new(2, 5))), "Fraction");
}

#[test]
fn predicates_decline_absent_values() {
    for kind in math::default_order() {
        let p = math::predicate_for(kind);
        assert!(!p(&Value::Null), "{kind} accepted null");
        assert!(!p(&Value::Undefined), "{kind} accepted undefined");
    }
}

#[test]
fn subset_registry_leaves_other_kinds_as_objects() {
    let reg = math::registry_for(&[DomainKind::Matrix]).unwrap();
    let c = Classifier::new(reg);
    let m = Value::foreign(DenseMatrix::from_rows(vec![vec![1.0]]));
    assert_eq!(c.classify(&m), TypeTag::from("Matrix"));
    assert_eq!(c.classify(&Value::foreign(Complex::new(1.0, 1.0))), TypeTag::OBJECT);
}
