//! # Findings and Reports
//!
//! Validation never prints and never aborts on a failed check: every
//! violation becomes a [`Finding`] and the engine returns the complete set
//! gathered over the full tree walk. A [`ValidationReport`] is `ok` exactly
//! when it carries no findings.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Classification of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingKind {
    /// A descriptor names a type absent from the registry.
    UnknownType,
    /// A constraint map names an unregistered constraint.
    UnknownConstraint,
    /// The value failed its declared type predicate.
    TypeMismatch,
    /// The value failed a declared constraint predicate.
    ConstraintViolation,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FindingKind::UnknownType => "unknown type",
            FindingKind::UnknownConstraint => "unknown constraint",
            FindingKind::TypeMismatch => "type mismatch",
            FindingKind::ConstraintViolation => "constraint violation",
        };
        f.write_str(label)
    }
}

/// What was being validated: a named key, or an array element by index.
///
/// For ordinary properties the name equals the property; for implied
/// fallbacks it is the literal's own key (`<property>_default` or
/// `<property>_fixed`); for array elements it is the 0-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubjectName {
    /// A property or fallback-literal key.
    Property(String),
    /// A 0-based array index.
    Index(usize),
}

impl fmt::Display for SubjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectName::Property(name) => f.write_str(name),
            SubjectName::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A single validation finding with structured context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Classification of the finding.
    pub kind: FindingKind,
    /// The data property the governing annotation is attached to.
    pub property: String,
    /// The validated subject: property name, fallback key, or array index.
    pub name: SubjectName,
    /// The offending value.
    pub value: Value,
    /// Human-readable description.
    pub detail: String,
}

impl Finding {
    pub(crate) fn unknown_type(
        type_name: &str,
        name: SubjectName,
        value: &Value,
        property: &str,
    ) -> Self {
        let detail = format!(
            "type {type_name:?} declared for {} is not registered",
            subject_phrase(&name, property)
        );
        Self {
            kind: FindingKind::UnknownType,
            property: property.to_string(),
            name,
            value: value.clone(),
            detail,
        }
    }

    pub(crate) fn type_mismatch(
        type_name: &str,
        name: SubjectName,
        value: &Value,
        property: &str,
    ) -> Self {
        let detail = format!(
            "value {value} of {} is not of type {type_name:?}",
            subject_phrase(&name, property)
        );
        Self {
            kind: FindingKind::TypeMismatch,
            property: property.to_string(),
            name,
            value: value.clone(),
            detail,
        }
    }

    pub(crate) fn unknown_constraint(
        constraint_name: &str,
        name: SubjectName,
        value: &Value,
        property: &str,
    ) -> Self {
        let detail = format!(
            "constraint {constraint_name:?} declared for {} is not registered",
            subject_phrase(&name, property)
        );
        Self {
            kind: FindingKind::UnknownConstraint,
            property: property.to_string(),
            name,
            value: value.clone(),
            detail,
        }
    }

    pub(crate) fn constraint_violation(
        constraint_name: &str,
        name: SubjectName,
        value: &Value,
        property: &str,
    ) -> Self {
        let detail = format!(
            "value {value} of {} violates constraint {constraint_name:?}",
            subject_phrase(&name, property)
        );
        Self {
            kind: FindingKind::ConstraintViolation,
            property: property.to_string(),
            name,
            value: value.clone(),
            detail,
        }
    }
}

/// Phrase naming the validated subject relative to its property.
fn subject_phrase(name: &SubjectName, property: &str) -> String {
    match name {
        SubjectName::Index(index) => format!("index {index} of property {property:?}"),
        SubjectName::Property(key) if key == property => format!("property {property:?}"),
        SubjectName::Property(key) => format!("key {key:?} of property {property:?}"),
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.kind, self.detail)
    }
}

/// The aggregated outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub(crate) fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// True when the pass produced no findings.
    pub fn ok(&self) -> bool {
        self.findings.is_empty()
    }

    /// All findings, in traversal order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_distinguishes_subject_forms() {
        let by_property = Finding::type_mismatch(
            "string",
            SubjectName::Property("title".into()),
            &json!(42),
            "title",
        );
        assert_eq!(
            by_property.to_string(),
            r#"  type mismatch: value 42 of property "title" is not of type "string""#
        );

        let by_index = Finding::type_mismatch(
            "string",
            SubjectName::Index(2),
            &json!(42),
            "imageType",
        );
        assert!(by_index.to_string().contains("index 2 of property \"imageType\""));

        let by_fallback = Finding::type_mismatch(
            "string",
            SubjectName::Property("copyright_default".into()),
            &json!(42),
            "copyright",
        );
        assert!(by_fallback
            .to_string()
            .contains("key \"copyright_default\" of property \"copyright\""));
    }

    #[test]
    fn subject_name_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(SubjectName::Property("age".into())).unwrap(),
            json!("age")
        );
        assert_eq!(
            serde_json::to_value(SubjectName::Index(3)).unwrap(),
            json!(3)
        );
    }

    #[test]
    fn report_display_lists_findings_line_by_line() {
        let report = ValidationReport::new(vec![
            Finding::unknown_type("wat", SubjectName::Property("a".into()), &json!(1), "a"),
            Finding::constraint_violation(
                "maxLength",
                SubjectName::Property("b".into()),
                &json!("too long"),
                "b",
            ),
        ]);
        assert!(!report.ok());
        let rendered = report.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("unknown type"));
        assert!(rendered.contains("constraint violation"));
    }
}
