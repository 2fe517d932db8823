//! Result ranking and export

pub mod export;

pub use export::RankedResultSet;
