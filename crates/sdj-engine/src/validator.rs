//! # Validator — Recursive Schema Resolution and Validation
//!
//! Depth-first, pre-order walk of the document. At each object node the
//! validator determines, for every data property, which annotation (if any)
//! governs it, resolves the descriptor (inline, via the in-scope dictionary,
//! or from an index-override table), and checks the value against the
//! predicate registry.
//!
//! ## Aggregation Invariant
//!
//! Validation is a trust boundary: the contract is "report every violation
//! in one pass", never fail-fast. Results are threaded through the recursion
//! as an accumulator — there is no shared mutable state, and two calls on
//! the same document yield identical reports.
//!
//! ## Resolution Order
//!
//! For a scalar property, the reference form (`*_pfsch` string resolved
//! against the scoped dictionary) is consulted before the inline form; a
//! reference whose dictionary entry is missing or has no `type` falls
//! through without validating. For array elements, the `"all"` override is
//! consulted before the positional `"i<N>"` key and wins when both exist.

use serde_json::{Map, Value};

use sdj_registry::Registry;

use crate::convention;
use crate::descriptor::{Descriptor, Presence};
use crate::error::StructuralError;
use crate::report::{Finding, SubjectName, ValidationReport};

/// Default bound on document nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Validates self-describing JSON documents against a predicate registry.
///
/// The validator is immutable after construction and `Send + Sync`;
/// concurrent [`validate`](Validator::validate) calls need no locking.
#[derive(Debug)]
pub struct Validator {
    registry: Registry,
    max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

impl Validator {
    /// Create a validator over the given registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The registry this validator resolves names against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validate a document with an initially empty dictionary scope.
    pub fn validate(&self, document: &Value) -> Result<ValidationReport, StructuralError> {
        self.validate_with_scope(document, None)
    }

    /// Validate a document, optionally seeding the dictionary scope that a
    /// top-level `_pfGlobal` would otherwise establish.
    pub fn validate_with_scope(
        &self,
        document: &Value,
        scope: Option<&Map<String, Value>>,
    ) -> Result<ValidationReport, StructuralError> {
        let empty = Map::new();
        let scope = scope.unwrap_or(&empty);
        let mut findings = Vec::new();
        self.walk_value(document, scope, 0, &mut findings)?;
        Ok(ValidationReport::new(findings))
    }

    /// Recursive walk. `scope` is the dictionary lexically visible at this
    /// node; `depth` guards against pathological nesting.
    fn walk_value(
        &self,
        value: &Value,
        scope: &Map<String, Value>,
        depth: usize,
        out: &mut Vec<Finding>,
    ) -> Result<(), StructuralError> {
        if depth > self.max_depth {
            return Err(StructuralError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let map = match value {
            Value::Object(map) => map,
            Value::Array(items) => {
                // A bare array (no enclosing object) has no sibling
                // annotations; only container elements can carry schemas.
                for item in items {
                    if item.is_object() || item.is_array() {
                        self.walk_value(item, scope, depth + 1, out)?;
                    }
                }
                return Ok(());
            }
            _ => return Ok(()),
        };

        // A dictionary declared here shadows the outer one for this whole
        // subtree. Replace, never merge.
        let scope = match map.get(convention::GLOBAL_DICT_KEY) {
            Some(Value::Object(dictionary)) => {
                tracing::trace!(entries = dictionary.len(), "dictionary scope shadowed");
                dictionary
            }
            _ => scope,
        };

        for (property, value) in map {
            if convention::is_annotation_key(property) {
                continue;
            }
            match value {
                Value::Object(_) => self.walk_value(value, scope, depth + 1, out)?,
                Value::Array(items) => {
                    self.check_array(map, property, items, scope, depth, out)?;
                }
                _ => self.check_scalar(map, property, value, scope, out),
            }
        }

        self.check_implied(map, out);
        Ok(())
    }

    /// Array handling: container elements recurse; scalar elements are
    /// validated only when a `*_pfidx` override applies to their index.
    fn check_array(
        &self,
        map: &Map<String, Value>,
        property: &str,
        items: &[Value],
        scope: &Map<String, Value>,
        depth: usize,
        out: &mut Vec<Finding>,
    ) -> Result<(), StructuralError> {
        let overrides = map
            .get(&convention::index_override_key(property))
            .and_then(Value::as_object);

        for (index, element) in items.iter().enumerate() {
            if element.is_object() || element.is_array() {
                self.walk_value(element, scope, depth + 1, out)?;
                continue;
            }
            let Some(overrides) = overrides else { continue };
            let descriptor = overrides
                .get(convention::ALL_ELEMENTS_KEY)
                .and_then(Descriptor::from_value)
                .or_else(|| {
                    overrides
                        .get(&convention::positional_key(index))
                        .and_then(Descriptor::from_value)
                });
            if let Some(descriptor) = descriptor {
                self.apply(&descriptor, SubjectName::Index(index), element, property, out);
            }
        }
        Ok(())
    }

    /// Scalar handling: resolve the sibling `*_pfsch` annotation, reference
    /// form first, inline form second.
    fn check_scalar(
        &self,
        map: &Map<String, Value>,
        property: &str,
        value: &Value,
        scope: &Map<String, Value>,
        out: &mut Vec<Finding>,
    ) {
        let Some(annotation) = map.get(&convention::schema_key(property)) else {
            return;
        };
        match annotation {
            Value::String(schema_name) if !schema_name.is_empty() => {
                let key = convention::dictionary_key(property, schema_name);
                // An entry without a usable type is no match: fall through
                // without validating.
                if let Some(descriptor) = scope.get(&key).and_then(Descriptor::from_value) {
                    tracing::trace!(property, dictionary_key = %key, "resolved reference schema");
                    self.apply(
                        &descriptor,
                        SubjectName::Property(property.to_string()),
                        value,
                        property,
                        out,
                    );
                }
            }
            Value::Object(_) => {
                if let Some(descriptor) = Descriptor::from_value(annotation) {
                    self.apply(
                        &descriptor,
                        SubjectName::Property(property.to_string()),
                        value,
                        property,
                        out,
                    );
                }
            }
            _ => {}
        }
    }

    /// Implied pass: an inline annotation with `presence: "implied"` whose
    /// bare property is absent validates the `_default` (else `_fixed`)
    /// sibling literal in its place. Fires only on absence — a present
    /// property is handled by the ordinary scalar path, and the fallback
    /// must not be double-validated.
    fn check_implied(&self, map: &Map<String, Value>, out: &mut Vec<Finding>) {
        for (key, annotation) in map {
            let Some(base) = key.strip_suffix(convention::SCHEMA_SUFFIX) else {
                continue;
            };
            if base.is_empty() || map.contains_key(base) {
                continue;
            }
            let Some(descriptor) = Descriptor::from_value(annotation) else {
                continue;
            };
            if descriptor.presence != Presence::Implied {
                continue;
            }

            let fallback = [convention::default_key(base), convention::fixed_key(base)]
                .into_iter()
                .find_map(|fallback_key| {
                    map.get(&fallback_key).map(|literal| (fallback_key, literal))
                });
            if let Some((fallback_key, literal)) = fallback {
                self.apply(
                    &descriptor,
                    SubjectName::Property(fallback_key),
                    literal,
                    base,
                    out,
                );
            }
        }
    }

    /// Run type validation, then constraint validation when declared.
    /// Neither short-circuits the other.
    fn apply(
        &self,
        descriptor: &Descriptor<'_>,
        name: SubjectName,
        value: &Value,
        property: &str,
        out: &mut Vec<Finding>,
    ) {
        self.check_type(descriptor.type_name, &name, value, property, out);
        if let Some(constraints) = descriptor.constraint {
            self.check_constraints(constraints, &name, value, property, out);
        }
    }

    fn check_type(
        &self,
        type_name: &str,
        name: &SubjectName,
        value: &Value,
        property: &str,
        out: &mut Vec<Finding>,
    ) {
        match self.registry.type_predicate(type_name) {
            None => out.push(Finding::unknown_type(type_name, name.clone(), value, property)),
            Some(predicate) => {
                if !predicate(value) {
                    out.push(Finding::type_mismatch(type_name, name.clone(), value, property));
                }
            }
        }
    }

    /// Every entry of the constraint map is evaluated regardless of earlier
    /// failures within the same map.
    fn check_constraints(
        &self,
        constraints: &Map<String, Value>,
        name: &SubjectName,
        value: &Value,
        property: &str,
        out: &mut Vec<Finding>,
    ) {
        for (constraint_name, param) in constraints {
            match self.registry.constraint_predicate(constraint_name) {
                None => out.push(Finding::unknown_constraint(
                    constraint_name,
                    name.clone(),
                    value,
                    property,
                )),
                Some(predicate) => {
                    if !predicate(value, param) {
                        out.push(Finding::constraint_violation(
                            constraint_name,
                            name.clone(),
                            value,
                            property,
                        ));
                    }
                }
            }
        }
    }
}
