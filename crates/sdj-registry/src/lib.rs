//! # sdj-registry — Predicate Registry
//!
//! The leaf crate of the SDJ stack. Exposes a name-indexed registry of
//! boolean predicates over JSON values:
//!
//! - **Type predicates** — `Fn(&Value) -> bool`, one per supported type name
//!   (`"string"`, `"positiveInteger"`, `"email"`, `"cssLength"`, ...).
//! - **Constraint predicates** — `Fn(&Value, &Value) -> bool`, one per
//!   supported constraint name (`"maxLength"`, `"enumeration"`,
//!   `"pattern"`, ...), where the second argument is the constraint
//!   parameter taken verbatim from the schema descriptor.
//!
//! Lookup is by string name. A missing name is a *distinct* condition the
//! caller must report as "unknown type/constraint" — it is never folded into
//! a false predicate result. The registry is open: new predicates can be
//! registered at runtime without any engine changes.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (this is the leaf of the DAG).
//! - Predicates are pure and side-effect-free: no logging, no mutation,
//!   no I/O. `Registry` is `Send + Sync` so validators can be shared
//!   across threads.
//! - No `panic!()` or `.unwrap()` outside tests; compiled pattern
//!   singletons are the one place `expect` is permitted, on literal
//!   patterns that are covered by tests.

pub mod constraints;
pub mod registry;
pub mod types;

pub use registry::{ConstraintPredicate, Registry, TypePredicate};
