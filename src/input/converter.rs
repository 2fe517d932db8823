//! Document-to-Markdown conversion for the supported upload formats

use crate::error::{Result, ScreenerError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;
use zip::ZipArchive;

pub trait MarkdownConverter {
    fn convert(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfConverter;

impl MarkdownConverter for PdfConverter {
    async fn convert(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::Conversion(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxConverter;

impl MarkdownConverter for DocxConverter {
    async fn convert(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let path_display = path.display().to_string();

        // ZIP walking is synchronous; documents are small enough that
        // blocking the worker here is acceptable for a sequential batch.
        tokio::task::spawn_blocking(move || docx_to_markdown(&bytes, &path_display))
            .await
            .map_err(|e| ScreenerError::Conversion(format!("Conversion task failed: {}", e)))?
    }
}

/// Walk `word/document.xml` and render paragraphs as Markdown lines and
/// tables as pipe-delimited rows. Table rows come out in document order so
/// the downstream flattener sees a contiguous run.
fn docx_to_markdown(bytes: &[u8], source: &str) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
        ScreenerError::Conversion(format!("Failed to open DOCX archive '{}': {}", source, e))
    })?;

    let mut document = archive.by_name("word/document.xml").map_err(|e| {
        ScreenerError::Conversion(format!("Missing word/document.xml in '{}': {}", source, e))
    })?;

    let mut xml = String::new();
    document.read_to_string(&mut xml).map_err(|e| {
        ScreenerError::Conversion(format!("Failed to read DOCX XML for '{}': {}", source, e))
    })?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();

    let mut output = String::new();
    let mut paragraph = String::new();
    let mut table_depth: usize = 0;
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();
    let mut in_text_node = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_node = true,
                b"w:tbl" => table_depth += 1,
                b"w:tr" => current_row.clear(),
                b"w:tc" => current_cell.clear(),
                b"w:tab" => {
                    if table_depth > 0 {
                        current_cell.push(' ');
                    } else {
                        paragraph.push('\t');
                    }
                }
                b"w:br" => {
                    if table_depth > 0 {
                        current_cell.push(' ');
                    } else {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_node {
                    let value = e.unescape().map_err(|err| {
                        ScreenerError::Conversion(format!(
                            "Failed to decode DOCX text in '{}': {}",
                            source, err
                        ))
                    })?;
                    if table_depth > 0 {
                        current_cell.push_str(&value);
                    } else {
                        paragraph.push_str(&value);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_node = false,
                b"w:p" => {
                    if table_depth == 0 {
                        output.push_str(paragraph.trim_end());
                        output.push('\n');
                        paragraph.clear();
                    } else {
                        // Paragraph breaks inside a cell collapse to a space.
                        current_cell.push(' ');
                    }
                }
                b"w:tc" => {
                    current_row.push(current_cell.trim().to_string());
                    current_cell.clear();
                }
                b"w:tr" => {
                    if !current_row.is_empty() {
                        output.push_str("| ");
                        output.push_str(&current_row.join(" | "));
                        output.push_str(" |\n");
                    }
                    current_row.clear();
                }
                b"w:tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        output.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(ScreenerError::Conversion(format!(
                    "Failed to parse DOCX XML in '{}': {}",
                    source, err
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(output)
}
