//! FILENAME: model/src/dimension.rs
//! A single labeled dimension value, the smallest unit of group identity.

use serde::{Deserialize, Serialize};

/// Broad classification of a dimension, derived from its header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DimensionKind {
    /// The time dimension. Never part of a group's identity.
    Time,
    /// A geographic dimension (e.g. an admin-geography code list).
    Geography,
    #[default]
    Other,
}

impl DimensionKind {
    /// Classify a dimension from its header name.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower == "time" {
            DimensionKind::Time
        } else if lower.contains("geography") {
            DimensionKind::Geography
        } else {
            DimensionKind::Other
        }
    }
}

/// One dimension value on one row: a code plus an optional display label.
///
/// Equality and hashing cover all three fields, so a list of these can act
/// directly as a group key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionValue {
    pub kind: DimensionKind,
    /// The code-list code for this value (e.g. "K02000001").
    pub code: String,
    /// Human-readable label. Often absent in sparse files.
    pub label: Option<String>,
}

impl DimensionValue {
    pub fn new(kind: DimensionKind, code: impl Into<String>, label: Option<String>) -> Self {
        DimensionValue {
            kind,
            code: code.into(),
            label,
        }
    }

    /// The value shown to users: the label when present and non-empty,
    /// otherwise the code.
    pub fn display(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ => &self.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_label() {
        let value = DimensionValue::new(
            DimensionKind::Geography,
            "K02000001",
            Some("United Kingdom".to_string()),
        );
        assert_eq!(value.display(), "United Kingdom");
    }

    #[test]
    fn display_falls_back_to_code() {
        let missing = DimensionValue::new(DimensionKind::Other, "cpi1dim1A0", None);
        assert_eq!(missing.display(), "cpi1dim1A0");

        let empty = DimensionValue::new(DimensionKind::Other, "cpi1dim1A0", Some(String::new()));
        assert_eq!(empty.display(), "cpi1dim1A0");
    }

    #[test]
    fn kind_classification() {
        assert_eq!(DimensionKind::from_name("Time"), DimensionKind::Time);
        assert_eq!(
            DimensionKind::from_name("admin-geography"),
            DimensionKind::Geography
        );
        assert_eq!(DimensionKind::from_name("aggregate"), DimensionKind::Other);
    }
}
