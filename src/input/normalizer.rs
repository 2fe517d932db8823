//! Document normalization: upload file → flattened Markdown text

use crate::error::{Result, ScreenerError};
use crate::input::converter::{DocxConverter, MarkdownConverter, PdfConverter};
use crate::input::file_detector::FileType;
use crate::input::table_flattener::flatten_tables;
use log::{debug, info};
use std::path::Path;
use tempfile::TempDir;
use tokio::fs;

/// Plain Markdown text derived from an uploaded document. Once constructed,
/// the content contains no pipe-delimited table syntax; tabular data is
/// rendered as comma-separated lines in original row order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Converts resumes and job descriptions to normalized Markdown.
///
/// Intermediate converted artifacts are written under a scoped temporary
/// directory that is removed when the normalizer is dropped, on success
/// and failure alike.
pub struct Normalizer {
    workdir: TempDir,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        let workdir = TempDir::new()?;
        debug!("Normalizer workdir: {}", workdir.path().display());
        Ok(Self { workdir })
    }

    pub async fn normalize(&self, path: &Path) -> Result<NormalizedText> {
        let file_type = detect_file_type(path)?;

        let markdown = match file_type {
            FileType::Pdf => {
                info!("Converting PDF: {}", path.display());
                PdfConverter.convert(path).await?
            }
            FileType::Docx => {
                info!("Converting DOCX: {}", path.display());
                DocxConverter.convert(path).await?
            }
            FileType::Markdown => {
                info!("Reading Markdown: {}", path.display());
                fs::read_to_string(path).await?
            }
            FileType::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(format!(
                    "Only PDF, DOCX, and Markdown uploads are supported: {}",
                    path.display()
                )));
            }
        };

        let flattened = flatten_tables(&markdown);
        self.stage_artifact(path, &flattened).await?;

        Ok(NormalizedText(flattened))
    }

    /// Keep the flattened Markdown on disk for the lifetime of the batch,
    /// mirroring the converted-file handoff between pipeline stages.
    async fn stage_artifact(&self, source: &Path, content: &str) -> Result<()> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let staged = self.workdir.path().join(format!("flattened_{}.md", stem));
        fs::write(&staged, content).await?;
        debug!("Staged artifact: {}", staged.display());
        Ok(())
    }
}

fn detect_file_type(path: &Path) -> Result<FileType> {
    let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
        ScreenerError::InvalidInput(format!("File has no extension: {}", path.display()))
    })?;

    Ok(FileType::from_extension(extension))
}
