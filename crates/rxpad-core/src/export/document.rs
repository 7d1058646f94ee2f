//! Rendered document bundle.

use sha2::{Digest, Sha256};

use crate::models::PrescriptionData;
use crate::render::{RenderOptions, Renderer};

/// MIME type handed to the share sheet.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Uniform type identifier handed to the share sheet on iOS.
pub const PDF_UTI: &str = "com.adobe.pdf";

/// Suggested file name: `Prescription_<patientName>_<date>.pdf`.
pub fn export_file_name(data: &PrescriptionData) -> String {
    format!("Prescription_{}_{}.pdf", data.patient_name, data.date)
}

/// A rendered prescription ready for conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Self-contained HTML document
    pub html: String,
    /// Suggested PDF file name
    pub file_name: String,
    /// SHA-256 of `html`, hex encoded
    pub digest: String,
}

impl RenderedDocument {
    /// Render `data` and bundle it with its file name and digest.
    pub fn render(data: &PrescriptionData, options: RenderOptions) -> Self {
        let html = Renderer::new(options).render(data);
        let digest = digest_html(&html);
        Self {
            html,
            file_name: export_file_name(data),
            digest,
        }
    }

    /// Whether `other` has byte-identical content.
    pub fn same_content(&self, other: &RenderedDocument) -> bool {
        self.digest == other.digest
    }
}

/// Hex SHA-256 of a document.
pub fn digest_html(html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(html.as_bytes());
    hex::encode(hasher.finalize())
}
