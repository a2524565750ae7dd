//! FILENAME: model/src/metadata.rs
//! The externally supplied dataset description record.
//!
//! This mirrors the JSON shape the catalog service returns. Every field is
//! optional or defaults to empty: the formatter must cope with sparse
//! records, so absence is representable everywhere and never a crash.
//! The core treats the whole record as read-only.

use serde::{Deserialize, Serialize};

/// Dataset-level descriptive metadata, rendered on the second sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub next_release: Option<String>,
    pub release_frequency: Option<String>,
    /// Canonical URL of the dataset on the website.
    pub uri: Option<String>,
    pub license: Option<String>,
    pub theme: Option<String>,
    pub unit_of_measure: Option<String>,
    pub national_statistic: Option<bool>,

    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub latest_changes: Vec<Change>,
    /// The dimension / code-list catalog, in the publisher's display order.
    #[serde(default)]
    pub dimensions: Vec<CodeList>,
    #[serde(default)]
    pub methodologies: Vec<Reference>,
    #[serde(default)]
    pub publications: Vec<Reference>,
    /// Quality & methodology information note.
    pub qmi: Option<Reference>,
    #[serde(default)]
    pub related_datasets: Vec<Reference>,
    /// Navigational links (taxonomy, editions, latest version, ...).
    #[serde(default)]
    pub links: Vec<Reference>,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub usage_notes: Vec<UsageNote>,
}

/// A publisher contact point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

/// A dated alert attached to a version (correction, advance notice, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
}

/// An entry in the change log for the latest version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub change_type: Option<String>,
}

/// A dimension's code list as described by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeList {
    pub name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl CodeList {
    /// The display name for this dimension: label when present, else name.
    pub fn display_name(&self) -> Option<&str> {
        match (&self.label, &self.name) {
            (Some(label), _) if !label.is_empty() => Some(label),
            (_, Some(name)) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// A titled, optionally linked reference (methodology, publication, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub title: Option<String>,
    pub href: Option<String>,
    pub description: Option<String>,
}

/// A generated download artifact advertised alongside the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Download {
    /// File extension, e.g. "csv" or "xlsx".
    pub extension: Option<String>,
    /// Size in bytes, as reported by the publisher.
    pub size: Option<String>,
    pub href: Option<String>,
}

/// A free-text usage note attached to the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageNote {
    pub title: Option<String>,
    pub note: Option<String>,
}
