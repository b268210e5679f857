/// Width of a well-formed census extract row.
pub const EXPECTED_WIDTH: usize = 31;

/// Position of the LSOA / data zone name, the one field known to carry an
/// unescaped comma (e.g. "Mosstodloch, Portgordon and seaward - 01").
pub const PLACENAME_INDEX: usize = 13;

/// Undoes comma contamination in a single free-text field.
///
/// A row wider than `expected_width` is assumed to have had the field at
/// `merge_index` split on a comma; the pieces are glued back with ", ".
/// Any other kind of misalignment passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRepair {
    pub expected_width: usize,
    pub merge_index: usize,
}

impl Default for ColumnRepair {
    fn default() -> Self {
        Self {
            expected_width: EXPECTED_WIDTH,
            merge_index: PLACENAME_INDEX,
        }
    }
}

impl ColumnRepair {
    /// Merge cells in place until the row is `expected_width` wide.
    /// Returns the number of merges performed.
    pub fn repair(&self, cells: &mut Vec<String>) -> usize {
        let mut merges = 0;
        while cells.len() > self.expected_width && cells.len() > self.merge_index + 1 {
            let next = cells.remove(self.merge_index + 1);
            let field = &mut cells[self.merge_index];
            field.push_str(", ");
            field.push_str(&next);
            merges += 1;
        }
        merges
    }
}
