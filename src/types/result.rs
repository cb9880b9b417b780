/// Raw result handle surfaced by the native layer after a successful run.
/// The statement adapter forwards this to the driver's result factory
/// without inspecting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of string values in column order
    pub rows: Vec<Vec<String>>,
}

impl RawResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Wrapper the driver's result factory produces around a raw native result.
///
/// Kept thin on purpose: row iteration and result metadata belong to the
/// result layer above, not to the statement adapter that produced this.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    raw: RawResult,
}

impl QueryResult {
    pub fn from_raw(raw: RawResult) -> Self {
        Self { raw }
    }

    /// Column names of the wrapped result.
    pub fn columns(&self) -> &[String] {
        &self.raw.columns
    }

    /// Number of rows in the wrapped result.
    pub fn len(&self) -> usize {
        self.raw.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.rows.is_empty()
    }

    /// Hand the raw native result back out to the layer above.
    pub fn into_raw(self) -> RawResult {
        self.raw
    }
}
