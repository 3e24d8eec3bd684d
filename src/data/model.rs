use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// A header-plus-rows table stored column-major.
///
/// The first column is the independent variable; the remaining columns are
/// dependent series in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// File the data was read from.
    pub source: PathBuf,
    /// Column names in file order (never empty).
    pub headers: Vec<String>,
    /// One value vector per header, all the same length.
    pub columns: Vec<Vec<f64>>,
}

impl Dataset {
    /// Number of columns, including the X column.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Name of the independent (first) column.
    pub fn x_name(&self) -> &str {
        &self.headers[0]
    }

    /// Values of the independent (first) column.
    pub fn x(&self) -> &[f64] {
        &self.columns[0]
    }

    /// Dependent columns `(name, values)` in file order.
    pub fn series_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.headers
            .iter()
            .zip(self.columns.iter())
            .skip(1)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Look up a column by header name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Value at `(row, col)`, if in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col)?.get(row).copied()
    }

    /// File name shown in titles and status lines.
    pub fn source_display(&self) -> String {
        self.source.to_string_lossy().into_owned()
    }
}
