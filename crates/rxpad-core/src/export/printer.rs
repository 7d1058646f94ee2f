//! Print-to-PDF and share flow.

use tracing::{info, warn};

use super::document::{RenderedDocument, PDF_MIME_TYPE, PDF_UTI};
use super::{ExportError, ExportResult};
use crate::models::PrescriptionData;
use crate::render::RenderOptions;

/// Share sheet parameters for a generated PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub mime_type: String,
    pub dialog_title: String,
    pub uti: String,
}

impl ShareRequest {
    /// Share request for a PDF with the given suggested file name.
    pub fn pdf(file_name: &str) -> Self {
        Self {
            mime_type: PDF_MIME_TYPE.to_string(),
            dialog_title: file_name.to_string(),
            uti: PDF_UTI.to_string(),
        }
    }
}

/// Platform print/share collaborator.
pub trait DocumentPrinter {
    /// Convert HTML into a PDF file and return its URI.
    fn print_to_file(&self, html: &str) -> ExportResult<String>;

    /// Whether a share sheet is available on this device.
    fn is_sharing_available(&self) -> bool;

    /// Open the share sheet for a generated file.
    fn share(&self, uri: &str, request: &ShareRequest) -> ExportResult<()>;
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    /// URI of the generated PDF
    pub uri: String,
    /// Whether the share sheet was opened
    pub shared: bool,
    /// The document that was printed
    pub document: RenderedDocument,
}

/// Renders prescriptions and hands them to a [`DocumentPrinter`].
pub struct PrescriptionExporter<'a, P: DocumentPrinter + ?Sized> {
    printer: &'a P,
    options: RenderOptions,
}

impl<'a, P: DocumentPrinter + ?Sized> PrescriptionExporter<'a, P> {
    /// Create a new exporter.
    pub fn new(printer: &'a P, options: RenderOptions) -> Self {
        Self { printer, options }
    }

    /// Render, print to PDF and share if the device supports it.
    ///
    /// Every printer failure collapses into [`ExportError::PdfGeneration`];
    /// nothing is retried and no partial output is returned.
    pub fn export(&self, data: &PrescriptionData) -> ExportResult<ExportOutcome> {
        let document = RenderedDocument::render(data, self.options);

        let result = self.print_and_share(&document);
        match result {
            Ok((uri, shared)) => {
                info!(file_name = %document.file_name, shared, "exported prescription");
                Ok(ExportOutcome {
                    uri,
                    shared,
                    document,
                })
            }
            Err(e) => {
                warn!(file_name = %document.file_name, error = %e, "prescription export failed");
                Err(match e {
                    ExportError::PdfGeneration(_) => e,
                    ExportError::Share(_) => ExportError::PdfGeneration(e.to_string()),
                })
            }
        }
    }

    fn print_and_share(&self, document: &RenderedDocument) -> ExportResult<(String, bool)> {
        let uri = self.printer.print_to_file(&document.html)?;

        if !self.printer.is_sharing_available() {
            return Ok((uri, false));
        }

        self.printer
            .share(&uri, &ShareRequest::pdf(&document.file_name))?;
        Ok((uri, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Medication;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPrinter {
        fail_print: bool,
        fail_share: bool,
        can_share: bool,
        printed: RefCell<Vec<String>>,
        shared: RefCell<Vec<(String, ShareRequest)>>,
    }

    impl DocumentPrinter for RecordingPrinter {
        fn print_to_file(&self, html: &str) -> ExportResult<String> {
            if self.fail_print {
                return Err(ExportError::PdfGeneration("printer offline".into()));
            }
            self.printed.borrow_mut().push(html.to_string());
            Ok("file:///cache/print.pdf".into())
        }

        fn is_sharing_available(&self) -> bool {
            self.can_share
        }

        fn share(&self, uri: &str, request: &ShareRequest) -> ExportResult<()> {
            if self.fail_share {
                return Err(ExportError::Share("dismissed".into()));
            }
            self.shared
                .borrow_mut()
                .push((uri.to_string(), request.clone()));
            Ok(())
        }
    }

    fn make_prescription() -> PrescriptionData {
        let mut data = PrescriptionData::new("01/15/2024");
        data.patient_name = "Jane Doe".into();
        data.add_medication(Medication::new(
            "Cetirizine".into(),
            "10mg".into(),
            "Once daily".into(),
            "7 days".into(),
        ));
        data
    }

    #[test]
    fn test_export_prints_and_shares() {
        let printer = RecordingPrinter {
            can_share: true,
            ..Default::default()
        };
        let exporter = PrescriptionExporter::new(&printer, RenderOptions::default());

        let outcome = exporter.export(&make_prescription()).unwrap();
        assert!(outcome.shared);
        assert_eq!(outcome.uri, "file:///cache/print.pdf");
        assert_eq!(printer.printed.borrow().len(), 1);
        assert_eq!(printer.printed.borrow()[0], outcome.document.html);

        let shared = printer.shared.borrow();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].1.dialog_title, "Prescription_Jane Doe_01/15/2024.pdf");
        assert_eq!(shared[0].1.mime_type, "application/pdf");
        assert_eq!(shared[0].1.uti, "com.adobe.pdf");
    }

    #[test]
    fn test_export_without_share_sheet() {
        let printer = RecordingPrinter::default();
        let exporter = PrescriptionExporter::new(&printer, RenderOptions::default());

        let outcome = exporter.export(&make_prescription()).unwrap();
        assert!(!outcome.shared);
        assert!(printer.shared.borrow().is_empty());
    }

    #[test]
    fn test_print_failure_is_single_error() {
        let printer = RecordingPrinter {
            fail_print: true,
            can_share: true,
            ..Default::default()
        };
        let exporter = PrescriptionExporter::new(&printer, RenderOptions::default());

        let err = exporter.export(&make_prescription()).unwrap_err();
        assert!(matches!(err, ExportError::PdfGeneration(_)));
        assert_eq!(err.to_string(), "PDF generation failed: printer offline");
        assert!(printer.shared.borrow().is_empty());
    }

    #[test]
    fn test_share_failure_maps_to_pdf_error() {
        let printer = RecordingPrinter {
            fail_share: true,
            can_share: true,
            ..Default::default()
        };
        let exporter = PrescriptionExporter::new(&printer, RenderOptions::default());

        let err = exporter.export(&make_prescription()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PDF generation failed: Sharing failed: dismissed"
        );
    }
}
