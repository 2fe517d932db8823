//! Input pipeline: file detection, conversion, and normalization

pub mod converter;
pub mod file_detector;
pub mod normalizer;
pub mod table_flattener;

pub use file_detector::FileType;
pub use normalizer::{NormalizedText, Normalizer};
pub use table_flattener::flatten_tables;
