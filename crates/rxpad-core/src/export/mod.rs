//! Export of rendered prescriptions to PDF via a platform printer.

mod document;
mod printer;

pub use document::*;
pub use printer::*;

use thiserror::Error;

use crate::i18n::Language;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    PdfGeneration(String),

    #[error("Sharing failed: {0}")]
    Share(String),
}

impl ExportError {
    /// Localized `(title, message)` pair for the failure notification.
    ///
    /// The technical detail stays in the log; users see one generic message.
    pub fn user_message(&self, language: Language) -> (&'static str, &'static str) {
        let t = language.translations();
        (t.error_title, t.pdf_error_message)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
