//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume screening assistant with priority-weighted keyword scoring")]
#[command(
    long_about = "Screen a batch of resumes against a job description: extract keywords with an LLM, assign priority tiers, compute weighted match scores, and export a ranked sheet with outreach drafts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen resumes against a job description
    Screen {
        /// Path to the job description file (PDF, DOCX, MD)
        #[arg(short, long)]
        jd: PathBuf,

        /// Paths to resume files (PDF, DOCX, MD)
        #[arg(short, long, required = true, num_args = 1..)]
        resumes: Vec<PathBuf>,

        /// Days until each candidate is available, matching resume order
        /// (1-365; missing entries default to 1)
        #[arg(short, long, num_args = 0..)]
        days: Vec<u16>,

        /// High-priority keywords, comma-separated (skips the interactive prompt)
        #[arg(long)]
        high: Option<String>,

        /// Medium-priority keywords, comma-separated (skips the interactive prompt)
        #[arg(long)]
        medium: Option<String>,

        /// Skip the manual location-score review step
        #[arg(long)]
        no_review: bool,

        /// Write the ranked result set to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Split a comma-separated CLI keyword list into trimmed entries.
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
