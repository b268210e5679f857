#[derive(Debug, Default)]
pub struct RawTable {
    /// Column names, from the first line of the extract.
    pub headers: Vec<String>,
    /// Every following non-empty line, split into trimmed cells.
    /// Cell counts are as found in the file; no repair has been applied.
    pub rows: Vec<Vec<String>>,
}
