use std::collections::BTreeSet;

/// State for one row's fill pass.
///
/// Built fresh for every row: a submit regenerates the form, so ordinals
/// consumed by the previous row say nothing about the new DOM.
#[derive(Debug, Default)]
pub struct RowContext {
    row_number: usize,
    used: BTreeSet<usize>,
}

impl RowContext {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            used: BTreeSet::new(),
        }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    /// Returns false if the ordinal was already taken.
    pub fn mark_used(&mut self, index: usize) -> bool {
        self.used.insert(index)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}
