//! Property-based checks over generated annotated documents.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use sdj_engine::{FindingKind, Validator};

/// Arbitrary scalar JSON values.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Finite doubles only; JSON has no NaN or infinities.
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[a-zA-Z0-9 ._-]{0,24}".prop_map(Value::from),
    ]
}

/// A flat document of scalar properties, each annotated with a type drawn
/// from the builtin vocabulary.
fn annotated_document() -> impl Strategy<Value = Value> {
    let type_name = prop_oneof![
        Just("string"),
        Just("integer"),
        Just("number"),
        Just("boolean"),
        Just("null"),
        Just("positiveInteger"),
        Just("float"),
    ];
    prop::collection::btree_map("[a-z]{1,8}", (scalar(), type_name), 0..6).prop_map(|props| {
        let mut map = Map::new();
        for (key, (value, type_name)) in props {
            map.insert(format!("{key}_pfsch"), json!({ "type": type_name }));
            map.insert(key, value);
        }
        Value::Object(map)
    })
}

proptest! {
    /// Two passes over the same document agree exactly.
    #[test]
    fn validation_is_deterministic(doc in annotated_document()) {
        let validator = Validator::default();
        let first = validator.validate(&doc).unwrap();
        let second = validator.validate(&doc).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Builtin type names never yield unknown-name findings, and every
    /// finding points at a property that exists in the document.
    #[test]
    fn findings_reference_real_properties(doc in annotated_document()) {
        let report = Validator::default().validate(&doc).unwrap();
        let map = doc.as_object().unwrap();
        for finding in report.findings() {
            prop_assert_eq!(finding.kind, FindingKind::TypeMismatch);
            prop_assert!(map.contains_key(&finding.property));
        }
    }

    /// Stripping every annotation makes any document trivially valid.
    #[test]
    fn unannotated_documents_are_valid(doc in annotated_document()) {
        let mut map = doc.as_object().unwrap().clone();
        map.retain(|key, _| !key.ends_with("_pfsch"));
        let report = Validator::default().validate(&Value::Object(map)).unwrap();
        prop_assert!(report.ok());
    }

    /// A value annotated with its own exact type never produces findings.
    #[test]
    fn values_match_their_own_types(s in "[a-zA-Z ]{0,16}", n in 1i64..1_000_000) {
        let doc = json!({
            "text": s,
            "text_pfsch": {"type": "string"},
            "count": n,
            "count_pfsch": {"type": "positiveInteger"}
        });
        let report = Validator::default().validate(&doc).unwrap();
        prop_assert!(report.ok(), "unexpected findings:\n{}", report);
    }

    /// The depth guard fires for nesting past the limit and stays quiet
    /// below it.
    #[test]
    fn depth_guard_is_a_sharp_boundary(extra in 1usize..16) {
        let limit = 8;
        let mut doc = json!({"leaf": 1});
        for _ in 0..(limit + extra) {
            doc = json!({"nested": doc});
        }
        let validator = Validator::default().with_max_depth(limit);
        prop_assert!(validator.validate(&doc).is_err());

        let relaxed = Validator::default().with_max_depth(limit + extra + 1);
        prop_assert!(relaxed.validate(&doc).unwrap().ok());
    }
}
