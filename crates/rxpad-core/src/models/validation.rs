//! Presence validation for prescriptions.

use thiserror::Error;

use crate::i18n::Language;

/// Reasons a prescription (or medication) is not ready to render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    #[error("Diagnosis and symptoms are required")]
    MissingClinicalDetails,

    #[error("At least one medication is required")]
    NoMedications,

    #[error("Incomplete medication: {}", .0.join(", "))]
    IncompleteMedication(Vec<&'static str>),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Localized (title, message) pair for the blocking notification.
    pub fn user_message(&self, language: Language) -> (&'static str, &'static str) {
        let t = language.translations();
        match self {
            ValidationError::MissingRequiredFields(_) => {
                (t.missing_information, t.fill_required_fields)
            }
            ValidationError::MissingClinicalDetails => {
                (t.missing_information, t.provide_diagnosis_symptoms)
            }
            ValidationError::NoMedications => (t.no_medications_error, t.add_at_least_one_medication),
            ValidationError::IncompleteMedication(_) => {
                (t.missing_information, t.incomplete_medication)
            }
        }
    }
}

/// Empty or whitespace-only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
