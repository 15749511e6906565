//! Helper functions for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sensor_figures::paths::ReportPaths;
use tempfile::TempDir;

pub const POWER_CSV: &str = "spectral_power_detector_example.csv";
pub const CAMERA_CSV: &str = "spectral_camera_response_example.csv";

/// Temporary `data/` and `out/` directories, removed on drop
pub struct ReportFixture {
    pub root: TempDir,
    pub paths: ReportPaths,
}

impl ReportFixture {
    /// Empty data directory, output directory not yet created
    pub fn empty() -> Self {
        let root = tempfile::tempdir().unwrap();
        let paths = ReportPaths::new(root.path().join("data"), root.path().join("out"));
        fs::create_dir_all(&paths.data_dir).unwrap();
        Self { root, paths }
    }

    /// Data directory holding both example tables with `rows` rows each
    pub fn with_tables(rows: usize) -> Self {
        let fixture = Self::empty();
        let wavelengths: Vec<f64> = (0..rows).map(|i| 400.0 + 25.0 * i as f64).collect();

        let power: Vec<String> = wavelengths
            .iter()
            .map(|w| format!("{},{:e}", w, 1e-6 * (1.0 + w / 1000.0)))
            .collect();
        write_table(&fixture.paths.data_dir, POWER_CSV, "wavelength_nm,power_W", &power);

        let response: Vec<String> = wavelengths
            .iter()
            .map(|w| format!("{},{}", w, 0.5 + 0.1 * (w / 100.0).sin()))
            .collect();
        write_table(
            &fixture.paths.data_dir,
            CAMERA_CSV,
            "wavelength_nm,camera_response_arb",
            &response,
        );

        fixture
    }
}

/// Write `header` and `rows` to `dir/name`
pub fn write_table(dir: &Path, name: &str, header: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

/// Sorted file names in `dir`, empty if it does not exist
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Assert the PNG at `path` has the given pixel dimensions
pub fn assert_png_size(path: &Path, width: u32, height: u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "{} is not a PNG", path.display());

    // IHDR is always the first chunk: width and height are big-endian at 16..24
    let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((w, h), (width, height), "unexpected size for {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_tables_have_rows() {
        let fixture = ReportFixture::with_tables(4);
        let content = fs::read_to_string(fixture.paths.data_dir.join(POWER_CSV)).unwrap();
        assert_eq!(content.lines().count(), 5);
    }
}
