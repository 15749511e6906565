//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_png_size,
    file_names,
    write_table,
    ReportFixture,
};
