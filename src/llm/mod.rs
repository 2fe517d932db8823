//! Language-model integration: client, prompts, and extraction wrappers

pub mod client;
pub mod extractor;
pub mod prompts;

pub use client::{GeminiClient, TextCompletion};
pub use extractor::{KeywordExtractor, LocationExtractor, OutreachGenerator};
pub use prompts::PromptTemplates;
