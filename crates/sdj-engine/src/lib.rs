//! # sdj-engine — Self-Describing JSON Validation Engine
//!
//! Validates documents that carry their own schema annotations as sibling
//! keys: `<property>_pfsch` descriptors (inline or dictionary references),
//! `<property>_pfidx` per-index array overrides, `_pfGlobal` lexically
//! scoped dictionaries, and `_default`/`_fixed` fallback literals for
//! implied properties.
//!
//! ## Design
//!
//! The engine walks a parsed `serde_json::Value` tree depth-first and
//! resolves every check through a [`Registry`] of named predicates, so type
//! and constraint vocabularies are data, not code paths. Findings are
//! accumulated over the whole document; only a structural hazard (excessive
//! nesting) aborts the walk.
//!
//! ## Crate Policy
//!
//! No I/O and no output formatting beyond `Display`: callers parse the
//! document and decide how to render the report. The engine is pure over
//! its inputs.

pub mod convention;
pub mod descriptor;
pub mod error;
pub mod report;
pub mod validator;

pub use descriptor::{Descriptor, Presence};
pub use error::StructuralError;
pub use report::{Finding, FindingKind, SubjectName, ValidationReport};
pub use validator::{Validator, DEFAULT_MAX_DEPTH};

pub use sdj_registry::Registry;
