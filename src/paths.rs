//! Input and output locations

use std::path::{Path, PathBuf};

/// Input CSV files, relative to the data directory
pub const DATA_DIR: &str = "data";

/// Rendered figures, relative to the crate root
pub const OUT_DIR: &str = "figures/remade";

/// Where figures read their tables from and write their files to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl ReportPaths {
    pub fn new(data_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// `data/` and `figures/remade/` under `root`
    pub fn under(root: &Path) -> Self {
        Self::new(root.join(DATA_DIR), root.join(OUT_DIR))
    }

    /// Layout anchored at this crate's source tree, independent of the
    /// working directory
    pub fn from_crate_root() -> Self {
        Self::under(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::from_crate_root()
    }
}
