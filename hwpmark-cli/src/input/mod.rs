//! Input handling module

pub mod file_filter;
pub mod glob_resolver;

pub use file_filter::{is_hwp_path, partition_by_extension};
pub use glob_resolver::resolve_patterns;
