//! # Builtin Constraint Predicates
//!
//! One predicate per supported constraint name, each a pure function
//! `fn(&Value, &Value) -> bool` where the second argument is the constraint
//! parameter exactly as written in the schema descriptor.
//!
//! A malformed parameter (wrong JSON type, invalid pattern source) makes the
//! predicate return false — the value cannot be shown to satisfy the
//! constraint. Unknown constraint *names* are not handled here at all; the
//! registry lookup miss is the engine's "unknown constraint" branch.

use regex::RegexBuilder;
use serde_json::Value;

/// Constraint parameter as a non-negative count, accepting both integer and
/// whole-float JSON encodings.
fn count_param(param: &Value) -> Option<usize> {
    match param {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(u as usize)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as usize)
            }
        }
        _ => None,
    }
}

fn number_pair(value: &Value, param: &Value) -> Option<(f64, f64)> {
    Some((value.as_f64()?, param.as_f64()?))
}

/// Membership in the parameter array, by JSON value equality.
pub(crate) fn enumeration(value: &Value, param: &Value) -> bool {
    param
        .as_array()
        .map_or(false, |choices| choices.iter().any(|choice| choice == value))
}

/// Pattern match. The parameter is `[source]` or `[source, flags]`; the
/// flags `i`, `m`, and `s` are honored, anything else (`g`, `u`, `y`) is a
/// matching-irrelevant host hint and is ignored. Numbers and booleans match
/// against their literal rendering.
pub(crate) fn pattern(value: &Value, param: &Value) -> bool {
    let Some(parts) = param.as_array() else {
        return false;
    };
    let Some(source) = parts.first().and_then(Value::as_str) else {
        return false;
    };
    let flags = parts.get(1).and_then(Value::as_str).unwrap_or("");

    let mut builder = RegexBuilder::new(source);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            _ => {}
        }
    }
    let Ok(regex) = builder.build() else {
        return false;
    };

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    regex.is_match(&text)
}

pub(crate) fn length(value: &Value, param: &Value) -> bool {
    string_length(value, param, |len, bound| len == bound)
}

pub(crate) fn max_length(value: &Value, param: &Value) -> bool {
    string_length(value, param, |len, bound| len <= bound)
}

pub(crate) fn min_length(value: &Value, param: &Value) -> bool {
    string_length(value, param, |len, bound| len >= bound)
}

fn string_length(value: &Value, param: &Value, cmp: impl Fn(usize, usize) -> bool) -> bool {
    match (value.as_str(), count_param(param)) {
        (Some(s), Some(bound)) => cmp(s.chars().count(), bound),
        _ => false,
    }
}

/// Total count of decimal digits in the number's rendering, sign excluded.
pub(crate) fn total_digits(value: &Value, param: &Value) -> bool {
    let Some(expected) = count_param(param) else {
        return false;
    };
    match value {
        Value::Number(n) => {
            let rendered = n.to_string();
            let digits = rendered
                .trim_start_matches('-')
                .replacen('.', "", 1)
                .chars()
                .count();
            digits == expected
        }
        _ => false,
    }
}

/// Count of digits after the decimal point. Only meaningful for numbers
/// with a fractional part.
pub(crate) fn fraction_digits(value: &Value, param: &Value) -> bool {
    let Some(expected) = count_param(param) else {
        return false;
    };
    match value {
        Value::Number(n) => {
            let rendered = n.to_string();
            rendered
                .split_once('.')
                .map_or(false, |(_, frac)| frac.chars().count() == expected)
        }
        _ => false,
    }
}

pub(crate) fn min_exclusive(value: &Value, param: &Value) -> bool {
    number_pair(value, param).map_or(false, |(v, bound)| bound < v)
}

pub(crate) fn max_exclusive(value: &Value, param: &Value) -> bool {
    number_pair(value, param).map_or(false, |(v, bound)| bound > v)
}

pub(crate) fn min_inclusive(value: &Value, param: &Value) -> bool {
    number_pair(value, param).map_or(false, |(v, bound)| bound <= v)
}

pub(crate) fn max_inclusive(value: &Value, param: &Value) -> bool {
    number_pair(value, param).map_or(false, |(v, bound)| bound >= v)
}

/// The builtin constraint vocabulary: `(registered name, predicate)`.
pub(crate) const CONSTRAINT_BUILTINS: &[(&str, fn(&Value, &Value) -> bool)] = &[
    ("enumeration", enumeration),
    ("pattern", pattern),
    ("length", length),
    ("maxLength", max_length),
    ("minLength", min_length),
    ("totalDigits", total_digits),
    ("fractionDigits", fraction_digits),
    ("minExclusive", min_exclusive),
    ("maxExclusive", max_exclusive),
    ("minInclusive", min_inclusive),
    ("maxInclusive", max_inclusive),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enumeration_uses_json_equality() {
        let choices = json!(["gif", "jpg", "jpeg", "png"]);
        assert!(enumeration(&json!("jpg"), &choices));
        assert!(!enumeration(&json!("tif"), &choices));
        assert!(enumeration(&json!(3), &json!([1, 2, 3])));
        assert!(!enumeration(&json!("3"), &json!([1, 2, 3])));
    }

    #[test]
    fn pattern_accepts_source_and_flags() {
        let fraction = json!(["[1-9][0-9]*/[1-9][0-9]*", "g"]);
        assert!(pattern(&json!("3 divided by 4 is 3/4"), &fraction));
        assert!(!pattern(&json!("no fractions here"), &fraction));

        let ci = json!(["^abc$", "i"]);
        assert!(pattern(&json!("ABC"), &ci));

        // Numbers match against their rendering.
        assert!(pattern(&json!(345), &json!(["^3[0-9]+$"])));
    }

    #[test]
    fn pattern_rejects_malformed_parameters() {
        assert!(!pattern(&json!("x"), &json!([])));
        assert!(!pattern(&json!("x"), &json!("not-an-array")));
        assert!(!pattern(&json!("x"), &json!(["(unclosed"])));
        assert!(!pattern(&json!(null), &json!(["null"])));
    }

    #[test]
    fn length_family_counts_characters() {
        let s = json!("Self Description JSON Schema");
        assert!(length(&s, &json!(28)));
        assert!(!length(&s, &json!(27)));
        assert!(max_length(&json!("Data maximum length"), &json!(30)));
        assert!(min_length(&json!("Data minimum length"), &json!(5)));
        // Character count, not byte count.
        assert!(length(&json!("héllo"), &json!(5)));
        // A negative bound can never be met.
        assert!(!max_length(&s, &json!(-1)));
    }

    #[test]
    fn digit_counts() {
        assert!(total_digits(&json!(10025), &json!(5)));
        assert!(total_digits(&json!(-12.5), &json!(3)));
        assert!(!total_digits(&json!(10025), &json!(4)));
        assert!(fraction_digits(&json!(12.56), &json!(2)));
        assert!(!fraction_digits(&json!(12.5), &json!(2)));
        assert!(!fraction_digits(&json!(12), &json!(0)));
    }

    #[test]
    fn numeric_bounds() {
        assert!(max_inclusive(&json!(999.99), &json!(999.99)));
        assert!(!max_exclusive(&json!(1000), &json!(1000)));
        assert!(max_exclusive(&json!(999.99), &json!(1000)));
        assert!(min_inclusive(&json!(100.01), &json!(100.01)));
        assert!(min_exclusive(&json!(100.01), &json!(100)));
        assert!(!min_exclusive(&json!(100), &json!(100)));
        // Non-numeric operands never satisfy a bound.
        assert!(!max_inclusive(&json!("999"), &json!(1000)));
        assert!(!max_inclusive(&json!(999), &json!("1000")));
    }
}
