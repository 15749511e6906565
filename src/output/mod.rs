//! Output module for figure rendering
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plot configuration and drawing helpers
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── elements.rs
//!     └── image.rs
//! ```
//!
//! The figures themselves live in [`crate::figures`]; this module only holds
//! what several of them share.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{Canvas, OutputFormat, PlotConfig};
