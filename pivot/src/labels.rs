//! FILENAME: pivot/src/labels.rs
//! PURPOSE: Chronological vs lexical ordering of time-label columns.
//! CONTEXT: Time labels in a V4 file are free text. If the first label
//! encountered matches a recognized calendar pattern, every label is parsed
//! with that pattern and the columns sort chronologically; otherwise they
//! sort lexically. The classification is made once per conversion, from
//! that single sample, and applied uniformly to the whole label set.

use chrono::{NaiveDate, Utc};
use tracing::warn;

// ============================================================================
// CALENDAR PATTERNS
// ============================================================================

/// A recognized calendar label shape.
///
/// Labels carry no day component, so parsing prefixes a fixed "01-" and the
/// format strings start with `%d-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPattern {
    name: &'static str,
    format: &'static str,
}

/// Abbreviated month with two-digit year ("Jan-96") or four-digit year
/// ("Jan-1996").
const PATTERNS: &[LabelPattern] = &[
    LabelPattern {
        name: "month-two-digit-year",
        format: "%d-%b-%y",
    },
    LabelPattern {
        name: "month-four-digit-year",
        format: "%d-%b-%Y",
    },
];

impl LabelPattern {
    fn parse(&self, label: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("01-{label}"), self.format).ok()
    }
}

/// The ordering decision for one conversion's label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrdering {
    Chronological(LabelPattern),
    Lexical,
}

/// Classify a label set from its single representative sample.
pub fn classify(sample: &str) -> LabelOrdering {
    for pattern in PATTERNS {
        if pattern.parse(sample).is_some() {
            return LabelOrdering::Chronological(*pattern);
        }
    }
    LabelOrdering::Lexical
}

// ============================================================================
// ORDERING
// ============================================================================

/// The ordered label set plus how many labels fell back to "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedLabels {
    pub labels: Vec<String>,
    /// Labels that failed to parse under the chosen calendar pattern and
    /// were assigned the current date instead. A known imprecision of the
    /// format, surfaced to the caller rather than hidden.
    pub fallbacks: usize,
}

/// Order the time labels for the data sheet's columns.
///
/// `labels` must be in first-encounter order; the first entry is the
/// representative sample that decides the ordering mode.
pub fn order_labels(labels: &[String]) -> OrderedLabels {
    let Some(sample) = labels.first() else {
        return OrderedLabels {
            labels: Vec::new(),
            fallbacks: 0,
        };
    };

    match classify(sample) {
        LabelOrdering::Chronological(pattern) => {
            let mut fallbacks = 0;
            let mut keyed: Vec<(NaiveDate, &String)> = labels
                .iter()
                .map(|label| {
                    let date = pattern.parse(label).unwrap_or_else(|| {
                        fallbacks += 1;
                        warn!(
                            label = %label,
                            pattern = pattern.name,
                            "time label does not match the chosen calendar pattern; \
                             ordering it as the current date"
                        );
                        Utc::now().date_naive()
                    });
                    (date, label)
                })
                .collect();
            // Stable sort keeps equal-dated labels in encounter order.
            keyed.sort_by(|a, b| a.0.cmp(&b.0));

            OrderedLabels {
                labels: keyed.into_iter().map(|(_, label)| label.clone()).collect(),
                fallbacks,
            }
        }
        LabelOrdering::Lexical => {
            let mut sorted = labels.to_vec();
            sorted.sort();
            OrderedLabels {
                labels: sorted,
                fallbacks: 0,
            }
        }
    }
}
