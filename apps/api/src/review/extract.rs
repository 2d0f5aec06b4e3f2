//! Resume text extraction for the three accepted upload formats.
//!
//! Whatever the underlying reader returns is passed through unmodified:
//! no OCR, no layout reconstruction.

use std::path::Path;

use docx_rs::{DocumentChild, InsertChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type.")]
    UnsupportedFormat,

    #[error("Text file is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Failed to read .docx file: {0}")]
    Docx(String),

    #[error("Failed to read PDF file: {0}")]
    Pdf(String),
}

/// Upload format, decided from the filename extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    WordXml,
    Pdf,
}

impl DocumentKind {
    /// Maps the lower-cased extension of the final path component to a kind.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = Path::new(filename)
            .file_name()
            .map(Path::new)
            .and_then(|name| name.extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("txt") => Ok(DocumentKind::PlainText),
            Some("docx") => Ok(DocumentKind::WordXml),
            Some("pdf") => Ok(DocumentKind::Pdf),
            _ => Err(ExtractError::UnsupportedFormat),
        }
    }

    /// Extracts the document text. CPU-bound for PDF and .docx; call from a
    /// blocking context.
    pub fn extract(self, bytes: &[u8]) -> Result<String, ExtractError> {
        match self {
            DocumentKind::PlainText => Ok(std::str::from_utf8(bytes)?.to_string()),
            DocumentKind::WordXml => extract_docx(bytes),
            DocumentKind::Pdf => extract_pdf(bytes),
        }
    }
}

/// Body paragraphs in document order, joined with newlines. Empty paragraphs
/// are kept; tables and other block content are not paragraphs and are skipped.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Paragraph → Run → Text. Runs are concatenated with no separator; runs
/// nested in hyperlinks and tracked insertions count too.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&para.children, &mut text);
    text
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for ic in &insert.children {
                    if let InsertChild::Run(run) = ic {
                        push_run_text(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Tabs become `\t` and breaks `\n`, as a word processor would show them.
fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Per-page text in page order, dropping pages that yield nothing.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
