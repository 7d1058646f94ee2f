//! Medication line items.

use serde::{Deserialize, Serialize};

use super::validation::{is_blank, ValidationError, ValidationResult};

/// A medication entry on a prescription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Unique ID within the prescription, generated at creation
    pub id: String,
    /// Medicine name
    pub name: String,
    /// Dosage (e.g., "500mg")
    pub dosage: String,
    /// Frequency (e.g., "Twice daily")
    pub frequency: String,
    /// Duration (e.g., "5 days")
    pub duration: String,
    /// Free-text instructions (e.g., "After meals")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Medication {
    /// Create a new medication with a freshly generated ID.
    pub fn new(name: String, dosage: String, frequency: String, duration: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            dosage,
            frequency,
            duration,
            instructions: None,
        }
    }

    /// Builder-style setter for instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Check that name, dosage, frequency and duration are filled in.
    pub fn validate(&self) -> ValidationResult<()> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("dosage", &self.dosage),
            ("frequency", &self.frequency),
            ("duration", &self.duration),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::IncompleteMedication(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_medication_has_unique_id() {
        let a = Medication::new("A".into(), "1mg".into(), "daily".into(), "1 day".into());
        let b = Medication::new("A".into(), "1mg".into(), "daily".into(), "1 day".into());
        assert_ne!(a.id, b.id);
        assert!(a.instructions.is_none());
    }

    #[test]
    fn test_validate_complete() {
        let med = Medication::new(
            "Paracetamol".into(),
            "500mg".into(),
            "Twice daily".into(),
            "5 days".into(),
        );
        assert!(med.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_blank_fields() {
        let med = Medication::new("Paracetamol".into(), "  ".into(), "".into(), "5 days".into());
        assert_eq!(
            med.validate(),
            Err(ValidationError::IncompleteMedication(vec!["dosage", "frequency"]))
        );
    }

    #[test]
    fn test_instructions_omitted_from_json_when_absent() {
        let med = Medication::new("A".into(), "1mg".into(), "daily".into(), "1 day".into());
        let json = serde_json::to_string(&med).unwrap();
        assert!(!json.contains("instructions"));

        let with = med.with_instructions("After meals");
        let json = serde_json::to_string(&with).unwrap();
        assert!(json.contains("\"instructions\":\"After meals\""));
    }
}
