//! CSV column reader
//!
//! Reads named numeric columns out of a delimited text file. Comment lines
//! (default `#`) are skipped, so files exported with a metadata header load
//! unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use sensor_figures::table::{read_columns, CsvConfig};
//!
//! // European dialect
//! let config = CsvConfig::default().delimiter(b';');
//! let cols = read_columns("data.csv", &["wavelength_nm", "power_W"], Some(&config))?;
//! ```

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::TableError;

/// CSV dialect for table input
///
/// # Fields
///
/// - `delimiter`: Column separator (default: `b','`)
/// - `comment`: Lines starting with this byte are skipped (default: `Some(b'#')`)
/// - `trim`: Strip whitespace around fields (default: true)
#[derive(Debug, Clone)]
pub struct CsvConfig {
    pub delimiter: u8,
    pub comment: Option<u8>,
    pub trim: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
            trim: true,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set (or disable) the comment marker
    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }
}

/// Read the named columns of a CSV file as `f64`
///
/// Returns one vector per requested column, in the order of `columns`, each
/// holding the values in file order. Row numbers in errors are 1-based and
/// count data rows only.
///
/// # Errors
///
/// - [`TableError::Io`] if the file cannot be opened
/// - [`TableError::MissingColumn`] if a requested column is not in the header
/// - [`TableError::InvalidNumber`] if a cell is not a finite number
/// - [`TableError::Csv`] for malformed CSV (ragged rows, bad quoting)
pub fn read_columns(
    path: &Path,
    columns: &[&str],
    configuration: Option<&CsvConfig>,
) -> Result<Vec<Vec<f64>>, TableError> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let csv_error = |source: csv::Error| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // ============================= Open File ==============================

    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(configuration.delimiter)
        .comment(configuration.comment)
        .trim(if configuration.trim { Trim::All } else { Trim::None })
        .from_reader(file);

    // ============================= Resolve Header =========================

    let headers = reader.headers().map_err(csv_error)?.clone();

    let indices = columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| TableError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                    available: headers.iter().collect::<Vec<_>>().join(", "),
                })
        })
        .collect::<Result<Vec<usize>, TableError>>()?;

    // ============================= Read Data ==============================

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;

        for (slot, (&index, column)) in indices.iter().zip(columns.iter()).enumerate() {
            let raw = record.get(index).unwrap_or("");
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TableError::InvalidNumber {
                    path: path.to_path_buf(),
                    row: row + 1,
                    column: column.to_string(),
                    value: raw.to_string(),
                })?;
            values[slot].push(value);
        }
    }

    Ok(values)
}
