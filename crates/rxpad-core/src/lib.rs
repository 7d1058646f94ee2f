//! RxPad Core Library
//!
//! Prescription drafting core for the RxPad mobile app.
//!
//! # Architecture
//!
//! ```text
//!  Form screens (foreign UI)
//!        │   doctor / patient / clinical fields
//!        │
//!        ├──── search ────► Catalog ──► MedicationTemplate ──► Medication (pre-filled)
//!        │
//!        ▼
//!  PrescriptionData ──validate──► Renderer (+ Language) ──► HTML
//!                                                             │
//!                                            ┌────────────────▼────────────────┐
//!                                            │  DocumentPrinter (platform)     │
//!                                            │  print to PDF → share sheet     │
//!                                            └─────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Static medication catalog with search and category filters
//! - [`models`]: Domain types (MedicationTemplate, Medication, PrescriptionData)
//! - [`i18n`]: English and Spanish label tables
//! - [`render`]: Deterministic HTML document renderer
//! - [`export`]: Print-to-PDF and share flow

pub mod catalog;
pub mod export;
pub mod i18n;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use catalog::Catalog;
pub use export::{
    export_file_name, DocumentPrinter, ExportError, PrescriptionExporter, RenderedDocument,
    ShareRequest,
};
pub use i18n::{Language, Translations};
pub use models::{
    Category, Medication, MedicationTemplate, PrescriptionData, ValidationError,
};
pub use render::{render_prescription_html, RenderOptions, Renderer};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum RxPadError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Callback error: {0}")]
    CallbackError(String),
}

impl From<ValidationError> for RxPadError {
    fn from(e: ValidationError) -> Self {
        RxPadError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for RxPadError {
    fn from(e: serde_json::Error) -> Self {
        RxPadError::SerializationError(e.to_string())
    }
}

impl From<ExportError> for RxPadError {
    fn from(e: ExportError) -> Self {
        RxPadError::ExportFailed(e.to_string())
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for RxPadError {
    fn from(e: uniffi::UnexpectedUniFFICallbackError) -> Self {
        RxPadError::CallbackError(e.reason)
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the core over the built-in medication catalog.
#[uniffi::export]
pub fn open_rxpad() -> Arc<RxPadCore> {
    Arc::new(RxPadCore {
        catalog: Catalog::seeded(),
    })
}

// =========================================================================
// Main API Object
// =========================================================================

/// Stateless API object; the in-progress prescription lives in the form layer.
#[derive(uniffi::Object)]
pub struct RxPadCore {
    catalog: Catalog,
}

#[uniffi::export]
impl RxPadCore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Search templates by name/generic name within a category ("all" or none for every category).
    pub fn search_medications(
        &self,
        query: String,
        category: Option<String>,
    ) -> Vec<FfiMedicationTemplate> {
        self.catalog
            .search(&query, category.as_deref())
            .into_iter()
            .map(|t| t.clone().into())
            .collect()
    }

    /// Category keys present in the catalog.
    pub fn list_categories(&self) -> Vec<String> {
        self.catalog
            .list_categories()
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }

    /// Localized label for a category key.
    pub fn category_label(
        &self,
        category: String,
        language: FfiLanguage,
    ) -> Result<String, RxPadError> {
        let category: Category = category
            .parse()
            .map_err(|e: models::UnknownCategory| RxPadError::InvalidInput(e.to_string()))?;
        Ok(category.label(language.into()).to_string())
    }

    /// Get a template by ID.
    pub fn get_medication_template(&self, id: String) -> Option<FfiMedicationTemplate> {
        self.catalog.find_by_id(&id).map(|t| t.clone().into())
    }

    /// Closest template to a query with no results, for "did you mean" hints.
    pub fn suggest_medication(&self, query: String) -> Option<FfiMedicationTemplate> {
        self.catalog.closest_match(&query).map(|t| t.clone().into())
    }

    /// New medication pre-filled from a template's first suggestions.
    pub fn medication_from_template(&self, id: String) -> Result<FfiMedication, RxPadError> {
        let template = self
            .catalog
            .find_by_id(&id)
            .ok_or_else(|| RxPadError::NotFound(format!("medication template {}", id)))?;
        Ok(template.to_medication().into())
    }

    // =========================================================================
    // Prescription Operations
    // =========================================================================

    /// Empty prescription stamped with today's date.
    pub fn new_prescription(&self) -> FfiPrescription {
        PrescriptionData::new_today().into()
    }

    /// Create a medication entry with a fresh ID, rejecting blank required fields.
    pub fn new_medication(
        &self,
        name: String,
        dosage: String,
        frequency: String,
        duration: String,
        instructions: Option<String>,
    ) -> Result<FfiMedication, RxPadError> {
        let mut medication = Medication::new(name, dosage, frequency, duration);
        medication.instructions = instructions.filter(|i| !i.is_empty());
        medication.validate()?;
        Ok(medication.into())
    }

    /// Check a prescription is complete enough to render.
    pub fn validate_prescription(&self, data: FfiPrescription) -> Result<(), RxPadError> {
        let data: PrescriptionData = data.into();
        data.validate()?;
        Ok(())
    }

    /// Localized notification for the first validation failure, if any.
    pub fn validation_message(
        &self,
        data: FfiPrescription,
        language: FfiLanguage,
    ) -> Option<FfiNotification> {
        let data: PrescriptionData = data.into();
        data.validate().err().map(|e| {
            let (title, message) = e.user_message(language.into());
            FfiNotification {
                title: title.to_string(),
                message: message.to_string(),
            }
        })
    }

    /// Localized notification shown when `generate_and_share` fails.
    pub fn export_error_message(&self, language: FfiLanguage) -> FfiNotification {
        let (title, message) =
            ExportError::PdfGeneration(String::new()).user_message(language.into());
        FfiNotification {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Serialize a prescription to the JSON document passed between screens.
    pub fn prescription_to_json(&self, data: FfiPrescription) -> Result<String, RxPadError> {
        let data: PrescriptionData = data.into();
        Ok(data.to_json()?)
    }

    /// Parse the JSON document passed between screens.
    pub fn prescription_from_json(&self, json: String) -> Result<FfiPrescription, RxPadError> {
        Ok(PrescriptionData::from_json(&json)?.into())
    }

    // =========================================================================
    // Document Operations
    // =========================================================================

    /// Render the prescription document (HTML) for preview.
    pub fn render_prescription_html(&self, data: FfiPrescription, language: FfiLanguage) -> String {
        let data: PrescriptionData = data.into();
        render_prescription_html(&data, language.into())
    }

    /// Suggested PDF file name.
    pub fn export_file_name(&self, data: FfiPrescription) -> String {
        let data: PrescriptionData = data.into();
        export_file_name(&data)
    }

    /// Render, print to PDF and open the share sheet.
    pub fn generate_and_share(
        &self,
        data: FfiPrescription,
        language: FfiLanguage,
        printer: Arc<dyn FfiDocumentPrinter>,
    ) -> Result<FfiExportOutcome, RxPadError> {
        let data: PrescriptionData = data.into();
        let printer = ForeignPrinter { inner: printer };
        let exporter =
            PrescriptionExporter::new(&printer, RenderOptions::for_language(language.into()));
        let outcome = exporter.export(&data)?;
        Ok(FfiExportOutcome {
            uri: outcome.uri,
            shared: outcome.shared,
            file_name: outcome.document.file_name,
            digest: outcome.document.digest,
        })
    }
}

// =========================================================================
// Foreign Printer
// =========================================================================

/// Platform print/share implementation supplied by the app.
#[uniffi::export(with_foreign)]
pub trait FfiDocumentPrinter: Send + Sync {
    /// Convert HTML to a PDF file, returning its URI.
    fn print_to_file(&self, html: String) -> Result<String, RxPadError>;

    /// Whether the share sheet can be shown.
    fn is_sharing_available(&self) -> bool;

    /// Show the share sheet for a file.
    fn share(
        &self,
        uri: String,
        mime_type: String,
        dialog_title: String,
        uti: String,
    ) -> Result<(), RxPadError>;
}

struct ForeignPrinter {
    inner: Arc<dyn FfiDocumentPrinter>,
}

impl DocumentPrinter for ForeignPrinter {
    fn print_to_file(&self, html: &str) -> export::ExportResult<String> {
        self.inner
            .print_to_file(html.to_string())
            .map_err(|e| ExportError::PdfGeneration(e.to_string()))
    }

    fn is_sharing_available(&self) -> bool {
        self.inner.is_sharing_available()
    }

    fn share(&self, uri: &str, request: &ShareRequest) -> export::ExportResult<()> {
        self.inner
            .share(
                uri.to_string(),
                request.mime_type.clone(),
                request.dialog_title.clone(),
                request.uti.clone(),
            )
            .map_err(|e| ExportError::Share(e.to_string()))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLanguage {
    En,
    Es,
}

impl From<FfiLanguage> for Language {
    fn from(language: FfiLanguage) -> Self {
        match language {
            FfiLanguage::En => Language::En,
            FfiLanguage::Es => Language::Es,
        }
    }
}

impl From<Language> for FfiLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::En => FfiLanguage::En,
            Language::Es => FfiLanguage::Es,
        }
    }
}

/// FFI-safe medication template.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicationTemplate {
    pub id: String,
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub common_dosages: Vec<String>,
    pub common_frequencies: Vec<String>,
    pub common_durations: Vec<String>,
    pub common_instructions: Vec<String>,
}

impl From<MedicationTemplate> for FfiMedicationTemplate {
    fn from(template: MedicationTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            generic_name: template.generic_name,
            category: template.category.as_str().to_string(),
            common_dosages: template.common_dosages,
            common_frequencies: template.common_frequencies,
            common_durations: template.common_durations,
            common_instructions: template.common_instructions,
        }
    }
}

/// FFI-safe medication.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: Option<String>,
}

impl From<Medication> for FfiMedication {
    fn from(med: Medication) -> Self {
        Self {
            id: med.id,
            name: med.name,
            dosage: med.dosage,
            frequency: med.frequency,
            duration: med.duration,
            instructions: med.instructions,
        }
    }
}

impl From<FfiMedication> for Medication {
    fn from(med: FfiMedication) -> Self {
        Medication {
            id: med.id,
            name: med.name,
            dosage: med.dosage,
            frequency: med.frequency,
            duration: med.duration,
            instructions: med.instructions,
        }
    }
}

/// FFI-safe prescription.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPrescription {
    pub doctor_name: String,
    pub license_number: String,
    pub specialization: String,
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
    pub patient_name: String,
    pub patient_age: String,
    pub patient_gender: String,
    pub patient_phone: String,
    pub patient_address: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub blood_pressure: Option<String>,
    pub weight: Option<String>,
    pub temperature: Option<String>,
    pub medications: Vec<FfiMedication>,
    pub notes: Option<String>,
    pub follow_up_date: Option<String>,
    pub template_image_uri: Option<String>,
    pub date: String,
}

impl From<PrescriptionData> for FfiPrescription {
    fn from(data: PrescriptionData) -> Self {
        Self {
            doctor_name: data.doctor_name,
            license_number: data.license_number,
            specialization: data.specialization,
            clinic_name: data.clinic_name,
            clinic_address: data.clinic_address,
            clinic_phone: data.clinic_phone,
            patient_name: data.patient_name,
            patient_age: data.patient_age,
            patient_gender: data.patient_gender,
            patient_phone: data.patient_phone,
            patient_address: data.patient_address,
            diagnosis: data.diagnosis,
            symptoms: data.symptoms,
            blood_pressure: data.blood_pressure,
            weight: data.weight,
            temperature: data.temperature,
            medications: data.medications.into_iter().map(|m| m.into()).collect(),
            notes: data.notes,
            follow_up_date: data.follow_up_date,
            template_image_uri: data.template_image_uri,
            date: data.date,
        }
    }
}

impl From<FfiPrescription> for PrescriptionData {
    fn from(data: FfiPrescription) -> Self {
        PrescriptionData {
            doctor_name: data.doctor_name,
            license_number: data.license_number,
            specialization: data.specialization,
            clinic_name: data.clinic_name,
            clinic_address: data.clinic_address,
            clinic_phone: data.clinic_phone,
            patient_name: data.patient_name,
            patient_age: data.patient_age,
            patient_gender: data.patient_gender,
            patient_phone: data.patient_phone,
            patient_address: data.patient_address,
            diagnosis: data.diagnosis,
            symptoms: data.symptoms,
            blood_pressure: data.blood_pressure,
            weight: data.weight,
            temperature: data.temperature,
            medications: data.medications.into_iter().map(|m| m.into()).collect(),
            notes: data.notes,
            follow_up_date: data.follow_up_date,
            template_image_uri: data.template_image_uri,
            date: data.date,
        }
    }
}

/// FFI-safe user notification (title + message).
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotification {
    pub title: String,
    pub message: String,
}

/// FFI-safe export result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExportOutcome {
    pub uri: String,
    pub shared: bool,
    pub file_name: String,
    pub digest: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct StubPrinter {
        fail: bool,
        shared_titles: Mutex<Vec<String>>,
    }

    impl FfiDocumentPrinter for StubPrinter {
        fn print_to_file(&self, _html: String) -> Result<String, RxPadError> {
            if self.fail {
                return Err(RxPadError::CallbackError("no printer".into()));
            }
            Ok("file:///tmp/out.pdf".into())
        }

        fn is_sharing_available(&self) -> bool {
            true
        }

        fn share(
            &self,
            _uri: String,
            _mime_type: String,
            dialog_title: String,
            _uti: String,
        ) -> Result<(), RxPadError> {
            self.shared_titles.lock().unwrap().push(dialog_title);
            Ok(())
        }
    }

    fn make_prescription(core: &RxPadCore) -> FfiPrescription {
        let mut data = core.new_prescription();
        data.date = "01/15/2024".into();
        data.doctor_name = "John Smith".into();
        data.license_number = "MED123456".into();
        data.clinic_name = "City Medical Center".into();
        data.patient_name = "Jane Doe".into();
        data.patient_age = "35".into();
        data.diagnosis = "URTI".into();
        data.symptoms = "Fever".into();
        data.medications
            .push(core.medication_from_template("1".into()).unwrap());
        data
    }

    #[test]
    fn test_search_via_ffi() {
        let core = open_rxpad();
        let results = core.search_medications("".into(), Some("antibiotics".into()));
        let ids: Vec<&str> = results.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert_eq!(results[0].category, "antibiotics");

        assert_eq!(core.search_medications("paracetamol".into(), None).len(), 1);
    }

    #[test]
    fn test_category_label_via_ffi() {
        let core = open_rxpad();
        assert_eq!(
            core.category_label("antibiotics".into(), FfiLanguage::Es).unwrap(),
            "Antibióticos"
        );
        assert!(matches!(
            core.category_label("bogus".into(), FfiLanguage::En),
            Err(RxPadError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_medication_from_template() {
        let core = open_rxpad();
        let med = core.medication_from_template("1".into()).unwrap();
        assert_eq!(med.name, "Paracetamol");
        assert_eq!(med.dosage, "500mg");
        assert_eq!(med.instructions.as_deref(), Some("After meals"));

        assert!(matches!(
            core.medication_from_template("404".into()),
            Err(RxPadError::NotFound(_))
        ));
    }

    #[test]
    fn test_new_medication_validation() {
        let core = open_rxpad();
        let err = core
            .new_medication("X".into(), "".into(), "daily".into(), "1 day".into(), None)
            .unwrap_err();
        assert!(matches!(err, RxPadError::Validation(_)));

        let med = core
            .new_medication("X".into(), "1mg".into(), "daily".into(), "1 day".into(), Some(String::new()))
            .unwrap();
        assert!(med.instructions.is_none());
    }

    #[test]
    fn test_validation_message() {
        let core = open_rxpad();
        let mut data = make_prescription(&core);
        assert!(core.validation_message(data.clone(), FfiLanguage::En).is_none());
        assert!(core.validate_prescription(data.clone()).is_ok());

        data.medications.clear();
        let note = core.validation_message(data, FfiLanguage::Es).unwrap();
        assert_eq!(note.title, "Sin Medicamentos");
    }

    #[test]
    fn test_json_round_trip_via_ffi() {
        let core = open_rxpad();
        let data = make_prescription(&core);
        let json = core.prescription_to_json(data.clone()).unwrap();
        let parsed = core.prescription_from_json(json).unwrap();
        assert_eq!(parsed.patient_name, data.patient_name);
        assert_eq!(parsed.medications[0].id, data.medications[0].id);

        assert!(matches!(
            core.prescription_from_json("not json".into()),
            Err(RxPadError::SerializationError(_))
        ));
    }

    #[test]
    fn test_generate_and_share() {
        let core = open_rxpad();
        let printer = Arc::new(StubPrinter {
            fail: false,
            shared_titles: Mutex::new(Vec::new()),
        });

        let outcome = core
            .generate_and_share(make_prescription(&core), FfiLanguage::En, printer.clone())
            .unwrap();
        assert!(outcome.shared);
        assert_eq!(outcome.file_name, "Prescription_Jane Doe_01/15/2024.pdf");
        assert_eq!(outcome.digest.len(), 64);
        assert_eq!(
            printer.shared_titles.lock().unwrap().as_slice(),
            ["Prescription_Jane Doe_01/15/2024.pdf".to_string()]
        );
    }

    #[test]
    fn test_generate_and_share_failure() {
        let core = open_rxpad();
        let printer = Arc::new(StubPrinter {
            fail: true,
            shared_titles: Mutex::new(Vec::new()),
        });

        let err = core
            .generate_and_share(make_prescription(&core), FfiLanguage::En, printer.clone())
            .unwrap_err();
        assert!(matches!(err, RxPadError::ExportFailed(_)));
        assert!(printer.shared_titles.lock().unwrap().is_empty());

        let notification = core.export_error_message(FfiLanguage::Es);
        assert_eq!(notification.title, Language::Es.translations().error_title);
        assert_eq!(notification.message, Language::Es.translations().pdf_error_message);
    }
}
