//! # Registry — Name-Indexed Predicate Lookup
//!
//! The registry is the single source of truth mapping type and constraint
//! names to predicate functions. Lookup misses are surfaced as `None` so the
//! caller can report "unknown type/constraint" as its own condition instead
//! of conflating it with a failed check.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::constraints::CONSTRAINT_BUILTINS;
use crate::types::TYPE_BUILTINS;

/// A type predicate: does the value belong to the named type?
pub type TypePredicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A constraint predicate: does the value satisfy the named constraint with
/// the given parameter?
pub type ConstraintPredicate = dyn Fn(&Value, &Value) -> bool + Send + Sync;

/// Name-indexed tables of type and constraint predicates.
///
/// `Registry::default()` carries the full builtin vocabulary; `empty()`
/// starts blank for callers that want a closed, hand-picked set. Both are
/// open to extension via [`register_type`](Registry::register_type) and
/// [`register_constraint`](Registry::register_constraint) — registering an
/// existing name replaces the previous predicate.
///
/// ## Thread Safety
///
/// Predicates are `Send + Sync`, so a populated registry can be shared
/// freely across threads.
pub struct Registry {
    types: HashMap<String, Box<TypePredicate>>,
    constraints: HashMap<String, Box<ConstraintPredicate>>,
}

impl Registry {
    /// A registry with no predicates at all.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
            constraints: HashMap::new(),
        }
    }

    /// A registry carrying every builtin type and constraint predicate.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (name, predicate) in TYPE_BUILTINS {
            registry.register_type(*name, *predicate);
        }
        for (name, predicate) in CONSTRAINT_BUILTINS {
            registry.register_constraint(*name, *predicate);
        }
        registry
    }

    /// Register a type predicate under `name`, replacing any previous entry.
    pub fn register_type(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) {
        self.types.insert(name.into(), Box::new(predicate));
    }

    /// Register a constraint predicate under `name`, replacing any previous
    /// entry.
    pub fn register_constraint(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) {
        self.constraints.insert(name.into(), Box::new(predicate));
    }

    /// Look up a type predicate. `None` means the name is unknown — the
    /// caller's "unknown type" branch, never a validation failure of the
    /// value.
    pub fn type_predicate(&self, name: &str) -> Option<&TypePredicate> {
        self.types.get(name).map(Box::as_ref)
    }

    /// Look up a constraint predicate. `None` means the name is unknown.
    pub fn constraint_predicate(&self, name: &str) -> Option<&ConstraintPredicate> {
        self.constraints.get(name).map(Box::as_ref)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered constraint names, sorted.
    pub fn constraint_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constraints.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.types.len())
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
