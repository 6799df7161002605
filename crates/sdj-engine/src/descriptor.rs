//! # Descriptors
//!
//! A descriptor is the `{ type, constraint?, presence? }` object governing
//! one value's validation, whether written inline under a `*_pfsch` key,
//! stored in a `_pfGlobal` dictionary entry, or nested in a `*_pfidx`
//! override table.
//!
//! Parsing is deliberately lenient: anything without a string `type` is not
//! a descriptor (the caller falls through without validating — this is the
//! "entry without a defined type is no match" rule), and unknown fields are
//! ignored.

use serde_json::{Map, Value};

/// Whether the described property must be physically present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// The property carries its own value; the default.
    #[default]
    Required,
    /// The property may be absent; a `_default`/`_fixed` sibling literal is
    /// validated in its place.
    Implied,
}

/// A parsed schema descriptor, borrowing from the document.
#[derive(Debug, Clone)]
pub struct Descriptor<'a> {
    /// Registered type name to check the value against.
    pub type_name: &'a str,
    /// Optional constraint map: constraint name to parameter.
    pub constraint: Option<&'a Map<String, Value>>,
    /// Presence mode; only meaningful on inline annotations.
    pub presence: Presence,
}

impl<'a> Descriptor<'a> {
    /// Parse a descriptor from a JSON value.
    ///
    /// Returns `None` unless the value is an object with a string `type` —
    /// a miss, not an error, so dictionary entries and override slots
    /// without a usable type fall through silently.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let map = value.as_object()?;
        let type_name = map.get("type")?.as_str()?;
        let constraint = map.get("constraint").and_then(Value::as_object);
        let presence = match map.get("presence").and_then(Value::as_str) {
            Some("implied") => Presence::Implied,
            _ => Presence::Required,
        };
        Some(Self {
            type_name,
            constraint,
            presence,
        })
    }
}
