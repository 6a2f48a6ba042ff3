// Document Loader
// Extracts plain text from uploaded files (.txt/.md, .docx, .pdf)

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("File is not valid UTF-8 text")]
    InvalidUtf8,
    #[error("DOCX parse failed: {0}")]
    Docx(String),
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DocumentKind {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "" | "txt" | "md" | "text" => Ok(Self::PlainText),
            "docx" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            other => Err(DocumentError::UnsupportedType(other.to_string())),
        }
    }
}

/// Extract the text content of a file by its extension.
pub fn extract_document_text(file_name: &str, bytes: &[u8]) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let text = match kind {
        DocumentKind::PlainText => plain_text(bytes)?,
        DocumentKind::Docx => docx_text(bytes)?,
        DocumentKind::Pdf => pdf_text(bytes)?,
    };
    info!(
        file = file_name,
        kind = ?kind,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "document.extracted"
    );
    Ok(text)
}

fn plain_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let text = std::str::from_utf8(bytes).map_err(|_| DocumentError::InvalidUtf8)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// Paragraphs joined by newlines; tabs kept as tab characters.
fn docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| DocumentError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        let DocumentChild::Paragraph(para) = child else {
            continue;
        };
        let mut line = String::new();
        for p_child in &para.children {
            let ParagraphChild::Run(run) = p_child else {
                continue;
            };
            for r_child in &run.children {
                match r_child {
                    RunChild::Text(t) => line.push_str(&t.text),
                    RunChild::Tab(_) => line.push('\t'),
                    _ => {}
                }
            }
        }
        paragraphs.push(line);
    }

    Ok(paragraphs.join("\n"))
}

fn pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))
}
