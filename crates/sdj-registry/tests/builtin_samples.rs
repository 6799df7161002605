//! Integration test: every builtin type name accepts its canonical sample
//! value, and every builtin constraint behaves per its contract.
//!
//! The sample grid is the reference vocabulary of the self-describing
//! schema convention; a predicate rejecting its own canonical sample is a
//! regression, not a style choice.

use sdj_registry::Registry;
use serde_json::{json, Value};

fn samples() -> Vec<(&'static str, Value)> {
    vec![
        ("string", json!("Self Description JSON Schema")),
        ("emptyString", json!("")),
        ("numberString", json!("100.25")),
        ("integerString", json!("10")),
        ("floatString", json!("5.27")),
        ("fractionString", json!("3/5")),
        ("exponentString", json!("2e+65")),
        (
            "asciiString",
            json!("83 101 108 102 32 68 101 115 99 114 105 112 116 105 111 110"),
        ),
        ("hexString", json!("0x53656C66204465736372697074696F6E")),
        ("octalString", json!("0123 0145 0154 0146 040")),
        ("jsonString", json!(r#"{"menu": {"id": "file", "value": "File" }}"#)),
        ("normalizedString", json!("83, 101, 108, 102, 32, 68, 101, 115")),
        ("regExpString", json!("/^-?0x[0-9a-f]+$/i")),
        ("unicodeString", json!("Self")),
        ("url", json!("https://www.w3plan.net/pfsdjs/")),
        ("email", json!("contact@w3plan.net")),
        ("urlEncoded", json!("Self%20Description%20JSON%20Schema")),
        ("ipv4", json!("127.0.0.0")),
        ("base64", json!("U2VsZiBEZXNjcmlwdGlvbiBKU09OIFNjaGVtYQ==")),
        ("uuid", json!("9624aeef-afac-43b7-aae9-f5278da52d17")),
        ("country", json!("CA")),
        ("language", json!("en")),
        ("dateString", json!("2020-05-01")),
        ("cssString", json!("p{font-family:verdana;font-size:18px;}")),
        ("hexColor", json!("#FF4500")),
        ("rgbColor", json!("rgb(255,69,0)")),
        ("cssRatio", json!("3/2")),
        ("cssLength", json!("1.5em")),
        ("cssAngle", json!("20deg")),
        ("cssResolution", json!("300dpi")),
        ("cssFrequency", json!("150KHZ")),
        ("cssTime", json!("50s")),
        ("cssPercentage", json!("105%")),
        ("cssPosition", json!("absolute")),
        ("date", json!("2020-05-01")),
        ("time", json!("10:25:30.000")),
        ("dateTime", json!("2020-05-01 10:25:30")),
        ("gYear", json!("2020")),
        ("gMonth", json!("05--")),
        ("gDay", json!("---01")),
        ("gYearMonth", json!("2020-05")),
        ("gMonthDay", json!("--05-01")),
        ("integer", json!(5)),
        ("safeInteger", json!(1000)),
        ("float", json!(7.25)),
        ("exponent", json!(2e-12)),
        ("zero", json!(0)),
        ("positiveInteger", json!(4)),
        ("nonNegativeInteger", json!(3)),
        ("negativeInteger", json!(-2)),
        ("nonPositiveInteger", json!(-5)),
        ("positiveFloat", json!(2.67)),
        ("nonNegativeFloat", json!(2.8)),
        ("negativeFloat", json!(-5.32)),
        ("nonPositiveFloat", json!(-3.67)),
        ("finiteNumber", json!(21)),
        ("number", json!(53.20)),
        ("true", json!(true)),
        ("false", json!(false)),
        ("boolean", json!(true)),
        ("null", json!(null)),
        ("emptyObject", json!({})),
        ("jsonObject", json!({"menu": {"id": "file", "value": "File"}})),
        ("emptyArray", json!([])),
        ("stringArray", json!(["Self", "Description", "JSON", "Schema"])),
        ("positiveIntegerArray", json!([8, 6, 3, 2, 5])),
        ("nonNegativeIntegerArray", json!([8, 0, 3, 0, 5])),
        ("negativeIntegerArray", json!([-8, -6, -3, -2, -5])),
        ("integerArray", json!([8, -6, 3, -2, 5])),
        ("numberArray", json!([2.67, -3.66, 8, 0, -100])),
        ("array", json!(["Self", "Description", 2.67, -3.66, 8, 0])),
    ]
}

#[test]
fn every_builtin_type_accepts_its_canonical_sample() {
    let registry = Registry::default();
    let mut failures = Vec::new();

    for (name, sample) in samples() {
        match registry.type_predicate(name) {
            None => failures.push(format!("{name}: not registered")),
            Some(predicate) => {
                if !predicate(&sample) {
                    failures.push(format!("{name}: rejected sample {sample}"));
                }
            }
        }
    }

    assert!(
        failures.is_empty(),
        "{} builtin predicates misbehaved:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn every_sample_name_is_in_the_registry_listing() {
    let registry = Registry::default();
    let names = registry.type_names();
    for (name, _) in samples() {
        assert!(names.contains(&name), "{name} missing from type_names()");
    }
}

#[test]
fn constraint_grid() {
    let registry = Registry::default();
    let check = |name: &str, value: Value, param: Value| -> bool {
        registry
            .constraint_predicate(name)
            .unwrap_or_else(|| panic!("{name} not registered"))(&value, &param)
    };

    assert!(check("maxInclusive", json!(999.99), json!(999.99)));
    assert!(check("minInclusive", json!(100.01), json!(100.01)));
    assert!(check("maxExclusive", json!(999.99), json!(1000)));
    assert!(check("minExclusive", json!(100.01), json!(100)));
    assert!(check("totalDigits", json!(10025), json!(5)));
    assert!(check("fractionDigits", json!(12.56), json!(2)));
    assert!(check("length", json!("Self Description JSON Schema"), json!(28)));
    assert!(check("maxLength", json!("Data maximum length"), json!(30)));
    assert!(check("minLength", json!("Data minimum length"), json!(5)));
    assert!(check(
        "pattern",
        json!("3 divided by 4 is 3/4"),
        json!(["[1-9][0-9]*/[1-9][0-9]*", "g"])
    ));
    assert!(check("enumeration", json!("jpg"), json!(["gif", "jpg", "jpeg", "png"])));
}

#[test]
fn scalar_samples_do_not_cross_match_disjoint_types() {
    let registry = Registry::default();
    let is = |name: &str, v: &Value| registry.type_predicate(name).unwrap()(v);

    assert!(!is("string", &json!(5)));
    assert!(!is("number", &json!("5")));
    assert!(!is("boolean", &json!(null)));
    assert!(!is("null", &json!(false)));
    assert!(!is("jsonObject", &json!([])));
    assert!(!is("array", &json!({})));
    assert!(!is("positiveInteger", &json!(-4)));
    assert!(!is("negativeFloat", &json!(5.32)));
    assert!(!is("uuid", &json!("9624aeef-afac-53b7-aae9-f5278da52d17")));
    assert!(!is("ipv4", &json!("256.0.0.1")));
    assert!(!is("country", &json!("XX")));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Predicates are total over scalars: any scalar input yields a
        /// boolean without panicking, for every registered type name.
        #[test]
        fn type_predicates_are_total_over_scalars(
            s in ".*",
            n in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            b in proptest::bool::ANY,
        ) {
            let registry = Registry::default();
            let scalars = [json!(s), json!(n), json!(b), json!(null)];
            for name in registry.type_names() {
                let predicate = registry.type_predicate(name).unwrap();
                for value in &scalars {
                    let _ = predicate(value);
                }
            }
        }

        /// The integer partitions are consistent: a positive integer is
        /// non-negative, never negative, never non-positive (except zero).
        #[test]
        fn integer_partitions_are_consistent(i in 1i64..=1_000_000) {
            let registry = Registry::default();
            let v = json!(i);
            let is = |name: &str| registry.type_predicate(name).unwrap()(&v);
            prop_assert!(is("positiveInteger"));
            prop_assert!(is("nonNegativeInteger"));
            prop_assert!(!is("negativeInteger"));
            prop_assert!(!is("nonPositiveInteger"));
            prop_assert!(!is("zero"));
        }
    }
}
