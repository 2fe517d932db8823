//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;
pub mod workflow;

pub use config::Config;
pub use error::{Result, ScreenerError};
