//! # sdj-cli — Command-Line Validator for Self-Describing JSON
//!
//! Provides the `sdj` command-line interface over the validation engine.
//!
//! ## Subcommands
//!
//! - `sdj validate` — Validate one or more annotated JSON documents.
//! - `sdj list` — Print the registered type and constraint vocabularies.
//!
//! ```bash
//! sdj validate model.json
//! sdj validate --json model.json fixtures/*.json
//! sdj list --types
//! ```
//!
//! Exit codes: 0 when every document validates clean, 1 when any document
//! has findings, 2 on operational errors (unreadable file, invalid JSON,
//! excessive nesting).

pub mod list;
pub mod validate;
