//! Tabular input data
//!
//! The measured-data figures read small two-column CSV tables (wavelength
//! against a measured quantity). This module loads them into a
//! [`SpectralTable`] and reports problems as a typed [`TableError`].
//!
//! # Expected format
//!
//! ```csv
//! # optional comment lines are skipped
//! wavelength_nm,power_W
//! 400,1.2e-6
//! 425,1.9e-6
//! ```
//!
//! Extra columns are ignored; the requested columns must be present.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;

pub use reader::{read_columns, CsvConfig};

/// Errors raised while loading a table
#[derive(Debug, Error)]
pub enum TableError {
    /// The file could not be opened
    #[error("cannot open table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV (bad quoting, ragged rows, ...)
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// A requested column is absent from the header row
    #[error("column `{column}` not found in {} (available: {available})", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: String,
    },

    /// A cell could not be parsed as a finite number
    #[error("row {row}, column `{column}` of {}: `{value}` is not a finite number", .path.display())]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    /// Header present but no data rows
    #[error("table {} has no data rows", .path.display())]
    Empty { path: PathBuf },
}

/// Two numeric columns read from a CSV file, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralTable {
    pub x_column: String,
    pub y_column: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SpectralTable {
    /// Load `x_column` and `y_column` from the CSV at `path`
    ///
    /// # Errors
    ///
    /// - [`TableError::Io`] if the file is missing or unreadable
    /// - [`TableError::MissingColumn`] if either column is absent
    /// - [`TableError::InvalidNumber`] if a cell is not a finite number
    /// - [`TableError::Empty`] if there are no data rows
    pub fn from_csv(
        path: impl AsRef<Path>,
        x_column: &str,
        y_column: &str,
    ) -> Result<Self, TableError> {
        let path = path.as_ref();
        let mut columns = read_columns(path, &[x_column, y_column], None)?;

        let y = columns.pop().unwrap_or_default();
        let x = columns.pop().unwrap_or_default();

        if x.is_empty() {
            return Err(TableError::Empty { path: path.to_path_buf() });
        }

        log::debug!("Loaded {} rows of ({}, {}) from {}", x.len(), x_column, y_column, path.display());

        Ok(Self {
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            x,
            y,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs in file order
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_table(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_csv_keeps_row_order() {
        let file = write_table("wavelength_nm,power_W\n500,2.0\n400,1.0\n600,3.0\n");
        let table = SpectralTable::from_csv(file.path(), "wavelength_nm", "power_W").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.points(), vec![(500.0, 2.0), (400.0, 1.0), (600.0, 3.0)]);
    }

    #[test]
    fn test_from_csv_ignores_extra_columns_and_comments() {
        let file = write_table(
            "# measured 2024-05-01\nnote,camera_response_arb,wavelength_nm\na, 0.5 ,450\nb,0.9,550\n",
        );
        let table =
            SpectralTable::from_csv(file.path(), "wavelength_nm", "camera_response_arb").unwrap();

        assert_eq!(table.x, vec![450.0, 550.0]);
        assert_eq!(table.y, vec![0.5, 0.9]);
    }

    #[test]
    fn test_from_csv_missing_file() {
        let err = SpectralTable::from_csv("/nonexistent/table.csv", "a", "b").unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn test_from_csv_missing_column() {
        let file = write_table("wavelength_nm,power_mW\n400,1.0\n");
        let err = SpectralTable::from_csv(file.path(), "wavelength_nm", "power_W").unwrap_err();

        match err {
            TableError::MissingColumn { column, available, .. } => {
                assert_eq!(column, "power_W");
                assert!(available.contains("power_mW"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_csv_rejects_non_numeric() {
        let file = write_table("wavelength_nm,power_W\n400,1.0\n425,n/a\n");
        let err = SpectralTable::from_csv(file.path(), "wavelength_nm", "power_W").unwrap_err();

        match err {
            TableError::InvalidNumber { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "power_W");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_csv_header_only_is_empty() {
        let file = write_table("wavelength_nm,power_W\n");
        let err = SpectralTable::from_csv(file.path(), "wavelength_nm", "power_W").unwrap_err();
        assert!(matches!(err, TableError::Empty { .. }));
    }
}
