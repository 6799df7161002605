//! # Reserved Key Grammar
//!
//! The self-describing convention reserves one key and four suffixes:
//!
//! - `_pfGlobal` — lexically scoped dictionary of reusable descriptors,
//!   keyed by `<property>_<schemaName>`.
//! - `<property>_pfsch` — attaches a schema to `<property>`: an inline
//!   descriptor object, or a reference string resolved via the dictionary.
//! - `<property>_pfidx` — per-index overrides for an array property, keyed
//!   by `"all"` or `"i<N>"`.
//! - `<property>_default` / `<property>_fixed` — fallback literals for
//!   implied schemas; `_default` wins when both exist.
//!
//! Annotation keys are metadata: they are excluded from data traversal and
//! are never themselves validated.

/// Reserved key holding a dictionary of reusable descriptors.
pub const GLOBAL_DICT_KEY: &str = "_pfGlobal";

/// Suffix attaching a schema annotation to its base property.
pub const SCHEMA_SUFFIX: &str = "_pfsch";

/// Suffix attaching per-index overrides to an array property.
pub const INDEX_SUFFIX: &str = "_pfidx";

/// Suffix of the preferred fallback literal for an implied schema.
pub const DEFAULT_SUFFIX: &str = "_default";

/// Suffix of the secondary fallback literal for an implied schema.
pub const FIXED_SUFFIX: &str = "_fixed";

/// Index-override key applying to every element of the array.
pub const ALL_ELEMENTS_KEY: &str = "all";

/// True for keys that are schema metadata rather than data.
pub fn is_annotation_key(key: &str) -> bool {
    key == GLOBAL_DICT_KEY
        || key.ends_with(SCHEMA_SUFFIX)
        || key.ends_with(INDEX_SUFFIX)
        || key.ends_with(DEFAULT_SUFFIX)
        || key.ends_with(FIXED_SUFFIX)
}

/// The `_pfsch` sibling key for a property.
pub fn schema_key(property: &str) -> String {
    format!("{property}{SCHEMA_SUFFIX}")
}

/// The `_pfidx` sibling key for an array property.
pub fn index_override_key(property: &str) -> String {
    format!("{property}{INDEX_SUFFIX}")
}

/// The dictionary key composed from a property and a reference schema name.
pub fn dictionary_key(property: &str, schema_name: &str) -> String {
    format!("{property}_{schema_name}")
}

/// The positional index-override key for element `index`.
pub fn positional_key(index: usize) -> String {
    format!("i{index}")
}

/// The `_default` fallback key for a property.
pub fn default_key(property: &str) -> String {
    format!("{property}{DEFAULT_SUFFIX}")
}

/// The `_fixed` fallback key for a property.
pub fn fixed_key(property: &str) -> String {
    format!("{property}{FIXED_SUFFIX}")
}
