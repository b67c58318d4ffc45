//! Label-by-label comparison of two configuration trees.

pub mod engine;
pub mod result;

pub use engine::{diff, diff_with_options, DiffOptions, PATH_SEPARATOR};
pub use result::DiffEntry;
