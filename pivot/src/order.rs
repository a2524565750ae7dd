//! FILENAME: pivot/src/order.rs
//! PURPOSE: Dimension column reordering and group comparison.
//! CONTEXT: The default dimension order is the order the columns appear in
//! the header. A caller can supply a different display order (e.g. the
//! dimension catalog's order from the metadata record); this module applies
//! that as a position remapping over the already-parsed groups, without
//! touching the underlying data.

use std::cmp::Ordering;

use model::{Group, Observation};

// ============================================================================
// DIMENSION ORDER
// ============================================================================

/// A display-position → source-index remapping over dimension columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionOrder(Vec<usize>);

impl DimensionOrder {
    /// Header order: display position i maps to source index i.
    pub fn identity(dimensions: usize) -> Self {
        DimensionOrder((0..dimensions).collect())
    }

    /// Derive the display order from a catalog of dimension names.
    ///
    /// Catalog entries are matched case-insensitively against the header
    /// names, each header column at most once. Header columns the catalog
    /// does not mention keep their header order at the end, so the result
    /// is always a complete permutation.
    pub fn from_catalog(header_names: &[String], catalog: &[String]) -> Self {
        let mut order = Vec::with_capacity(header_names.len());
        let mut used = vec![false; header_names.len()];

        for wanted in catalog {
            let found = header_names
                .iter()
                .enumerate()
                .find(|(i, name)| !used[*i] && name.eq_ignore_ascii_case(wanted));
            if let Some((i, _)) = found {
                used[i] = true;
                order.push(i);
            }
        }
        for (i, used) in used.iter().enumerate() {
            if !used {
                order.push(i);
            }
        }

        DimensionOrder(order)
    }

    /// Source index shown at display position `display`.
    pub fn source_index(&self, display: usize) -> Option<usize> {
        self.0.get(display).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

// ============================================================================
// SORTED GROUP
// ============================================================================

/// A read-only view over a group that compares and renders its dimension
/// values in display order. Never mutates the underlying group.
#[derive(Debug, Clone, Copy)]
pub struct SortedGroup<'a> {
    group: &'a Group,
    order: &'a DimensionOrder,
}

impl<'a> SortedGroup<'a> {
    pub fn new(group: &'a Group, order: &'a DimensionOrder) -> Self {
        SortedGroup { group, order }
    }

    pub fn group(&self) -> &'a Group {
        self.group
    }

    /// Lexicographic comparison of display values in display order.
    /// The first differing dimension decides; groups with differing
    /// dimension counts compare as equal rather than erroring.
    pub fn compare(&self, other: &SortedGroup<'_>) -> Ordering {
        let left = self.group.key.values();
        let right = other.group.key.values();
        if left.len() != right.len() {
            return Ordering::Equal;
        }

        for source in self.order.positions() {
            let (Some(a), Some(b)) = (left.get(source), right.get(source)) else {
                continue;
            };
            match a.display().cmp(b.display()) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// The row title for this group: dimension display values joined with
    /// line breaks, in display order.
    pub fn title(&self) -> String {
        let values = self.group.key.values();
        self.order
            .positions()
            .filter_map(|source| values.get(source))
            .map(|value| value.display())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn observation(&self, time_label: &str) -> Option<&'a Observation> {
        self.group.observation(time_label)
    }
}

/// Produce the display-ordered group list for the data sheet.
pub fn sort_groups<'a>(groups: &'a [Group], order: &'a DimensionOrder) -> Vec<SortedGroup<'a>> {
    let mut sorted: Vec<SortedGroup<'a>> = groups
        .iter()
        .map(|group| SortedGroup::new(group, order))
        .collect();
    sorted.sort_by(|a, b| a.compare(b));
    sorted
}
