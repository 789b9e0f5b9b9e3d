//! Document reading — turns uploaded bytes into per-page text.
//!
//! `AppState` holds an `Arc<dyn DocumentReader>` so the PDF backend can be
//! swapped (or faked in tests) without touching the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not a readable PDF: {0}")]
    Unreadable(String),

    #[error("PDF has no text layer")]
    NoText,
}

/// bytes in → ordered page texts out.
pub trait DocumentReader: Send + Sync {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError>;
}

/// Reads the text layer of a PDF with `pdf-extract`.
pub struct PdfTextReader;

impl DocumentReader for PdfTextReader {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| DocumentError::Unreadable(e.to_string()))?;

        check_text_layer(&pages)?;
        Ok(pages)
    }
}

/// Scanned PDFs come back as pages of whitespace; treat them as unreadable.
fn check_text_layer(pages: &[String]) -> Result<(), DocumentError> {
    if pages.iter().all(|p| p.trim().is_empty()) {
        return Err(DocumentError::NoText);
    }
    Ok(())
}

/// Joins pages in order with no separator.
pub fn concat_pages(pages: &[String]) -> String {
    pages.concat()
}
