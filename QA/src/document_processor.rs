use crate::error::{QaError, Result};
use crate::models::{Document, UploadResponse};
use crate::questions::extract_questions;

#[derive(Debug, Clone, Copy)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Runs the whole upload pipeline on the blocking pool: extract, split, derive questions.
    pub async fn analyze_upload(&self, filename: String, bytes: Vec<u8>) -> Result<UploadResponse> {
        let processor = *self;

        tokio::task::spawn_blocking(move || {
            let document = processor.process_pdf(&filename, &bytes)?;
            let questions = extract_questions(&document.text);

            log::info!(
                "Derived {} questions from {} ({} chars)",
                questions.len(),
                document.filename,
                document.text.len()
            );

            Ok(UploadResponse {
                filename: document.filename,
                content: document.text,
                questions,
            })
        })
        .await
        .map_err(|e| QaError::Task(e.to_string()))?
    }

    /// Extracts the text of every page, in page order, and wraps it in a [`Document`].
    ///
    /// Blocking: PDF parsing is CPU-bound, call this from a blocking context.
    pub fn process_pdf(&self, filename: &str, bytes: &[u8]) -> Result<Document> {
        log::info!("Processing PDF: {} ({} bytes)", filename, bytes.len());

        let text = self.extract_text(bytes)?;

        Ok(Document {
            filename: filename.to_string(),
            text,
        })
    }

    /// Opens the PDF in memory and concatenates the per-page text with no separators.
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| QaError::DocumentFormat(e.to_string()))?;

        log::debug!("Extracted {} pages", pages.len());
        Ok(pages.concat())
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bytes_that_are_not_a_pdf() {
        let processor = DocumentProcessor::new();
        let result = processor.extract_text(b"this is plain text, not a pdf");
        assert!(matches!(result, Err(QaError::DocumentFormat(_))));
    }

    #[test]
    fn rejects_empty_buffer() {
        let processor = DocumentProcessor::new();
        let result = processor.process_pdf("empty.pdf", &[]);
        assert!(matches!(result, Err(QaError::DocumentFormat(_))));
    }
}
