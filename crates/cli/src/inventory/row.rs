//! Ordered label/value rows and the report that accumulates them.
//!
//! Invariants:
//! - Labels keep the position of their first insertion.
//! - Re-inserting a label replaces the value in place.
//! - Report columns are the union of row labels in first-seen order.

/// One report row: ordered display label → display value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailRow {
    entries: Vec<(String, String)>,
}

impl DetailRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing value for the same label in place.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append `other`'s entries; on a label collision `other` wins.
    pub fn merge(mut self, other: DetailRow) -> DetailRow {
        for (label, value) in other.entries {
            self.insert(label, value);
        }
        self
    }
}

/// Rows in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: Vec<DetailRow>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: DetailRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[DetailRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of all row labels, in the order they were first seen.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for label in self.rows.iter().flat_map(DetailRow::labels) {
            if !columns.contains(&label) {
                columns.push(label);
            }
        }
        columns
    }
}
