//! The prescription aggregate built up during one form session.

use serde::{Deserialize, Serialize};

use super::medication::Medication;
use super::validation::{is_blank, ValidationError, ValidationResult};

/// Date stamp format used for new prescriptions (e.g. "10/19/2026").
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// All data collected for one prescription.
///
/// Serialized as a camelCase key/value document; that is the shape the form
/// screens pass to the preview screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionData {
    // Doctor
    pub doctor_name: String,
    pub license_number: String,
    #[serde(default)]
    pub specialization: String,
    pub clinic_name: String,
    #[serde(default)]
    pub clinic_address: String,
    #[serde(default)]
    pub clinic_phone: String,

    // Patient
    pub patient_name: String,
    pub patient_age: String,
    #[serde(default)]
    pub patient_gender: String,
    #[serde(default)]
    pub patient_phone: String,
    #[serde(default)]
    pub patient_address: String,

    // Clinical
    pub diagnosis: String,
    pub symptoms: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    /// Medications in display/print order
    #[serde(default)]
    pub medications: Vec<Medication>,

    // Additional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,

    /// Opaque image URI supplied by the image picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_image_uri: Option<String>,

    /// Date stamp, fixed when the session starts
    pub date: String,
}

impl PrescriptionData {
    /// Create an empty prescription stamped with the given date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Create an empty prescription stamped with today's local date.
    pub fn new_today() -> Self {
        Self::new(chrono::Local::now().format(DATE_FORMAT).to_string())
    }

    /// Append a medication at the end of the list.
    pub fn add_medication(&mut self, medication: Medication) {
        self.medications.push(medication);
    }

    /// Replace the medication with the same ID, keeping its position.
    ///
    /// Returns false if no medication has that ID.
    pub fn update_medication(&mut self, medication: Medication) -> bool {
        match self.medications.iter_mut().find(|m| m.id == medication.id) {
            Some(slot) => {
                *slot = medication;
                true
            }
            None => false,
        }
    }

    /// Remove a medication by ID.
    pub fn remove_medication(&mut self, id: &str) -> Option<Medication> {
        let index = self.medications.iter().position(|m| m.id == id)?;
        Some(self.medications.remove(index))
    }

    /// Reset every field except the date stamp.
    pub fn clear(&mut self) {
        let date = std::mem::take(&mut self.date);
        *self = Self::new(date);
    }

    /// Check the prescription is complete enough to render.
    ///
    /// Checks run in the order the form reports them: identity fields,
    /// then clinical details, then medications.
    pub fn validate(&self) -> ValidationResult<()> {
        let missing: Vec<&'static str> = [
            ("doctorName", &self.doctor_name),
            ("licenseNumber", &self.license_number),
            ("clinicName", &self.clinic_name),
            ("patientName", &self.patient_name),
            ("patientAge", &self.patient_age),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredFields(missing));
        }

        if is_blank(&self.diagnosis) || is_blank(&self.symptoms) {
            return Err(ValidationError::MissingClinicalDetails);
        }

        if self.medications.is_empty() {
            return Err(ValidationError::NoMedications);
        }

        Ok(())
    }

    /// Whether the prescription passes [`validate`](Self::validate).
    pub fn is_renderable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Serialize to the key/value document passed between screens.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the key/value document passed between screens.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Optional field value if it is present and non-empty.
///
/// Whitespace-only values still count as present.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_complete() -> PrescriptionData {
        let mut data = PrescriptionData::new("01/15/2024");
        data.doctor_name = "John Smith".into();
        data.license_number = "MED123456".into();
        data.clinic_name = "City Medical Center".into();
        data.patient_name = "Jane Doe".into();
        data.patient_age = "35".into();
        data.diagnosis = "URTI".into();
        data.symptoms = "Fever, cough".into();
        data.add_medication(Medication::new(
            "Paracetamol".into(),
            "500mg".into(),
            "Twice daily".into(),
            "5 days".into(),
        ));
        data
    }

    #[test]
    fn test_new_today_has_date() {
        let data = PrescriptionData::new_today();
        assert_eq!(data.date.len(), 10);
        assert!(data.medications.is_empty());
    }

    #[test]
    fn test_validate_complete() {
        assert!(make_complete().validate().is_ok());
        assert!(make_complete().is_renderable());
    }

    #[test]
    fn test_validate_missing_identity_fields() {
        let mut data = make_complete();
        data.doctor_name = "".into();
        data.patient_age = "   ".into();
        // Clinical details also missing, but identity is reported first
        data.diagnosis = "".into();

        assert_eq!(
            data.validate(),
            Err(ValidationError::MissingRequiredFields(vec!["doctorName", "patientAge"]))
        );
    }

    #[test]
    fn test_validate_missing_clinical() {
        let mut data = make_complete();
        data.symptoms = "".into();
        assert_eq!(data.validate(), Err(ValidationError::MissingClinicalDetails));
    }

    #[test]
    fn test_validate_no_medications() {
        let mut data = make_complete();
        data.medications.clear();
        assert_eq!(data.validate(), Err(ValidationError::NoMedications));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut data = make_complete();
        let second = Medication::new("Ibuprofen".into(), "200mg".into(), "TID".into(), "3 days".into());
        let second_id = second.id.clone();
        data.add_medication(second);
        data.add_medication(Medication::new("C".into(), "1".into(), "1".into(), "1".into()));

        let mut edited = data.medications[1].clone();
        edited.dosage = "400mg".into();
        assert!(data.update_medication(edited));

        assert_eq!(data.medications[1].id, second_id);
        assert_eq!(data.medications[1].dosage, "400mg");
        assert_eq!(data.medications.len(), 3);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut data = make_complete();
        let stranger = Medication::new("X".into(), "1".into(), "1".into(), "1".into());
        assert!(!data.update_medication(stranger));
        assert_eq!(data.medications.len(), 1);
    }

    #[test]
    fn test_remove_medication() {
        let mut data = make_complete();
        let id = data.medications[0].id.clone();

        let removed = data.remove_medication(&id);
        assert_eq!(removed.map(|m| m.name), Some("Paracetamol".to_string()));
        assert!(data.remove_medication(&id).is_none());
        assert!(data.medications.is_empty());
    }

    #[test]
    fn test_clear_keeps_date() {
        let mut data = make_complete();
        data.notes = Some("Rest".into());
        data.clear();

        assert_eq!(data.date, "01/15/2024");
        assert!(data.doctor_name.is_empty());
        assert!(data.notes.is_none());
        assert!(data.medications.is_empty());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let mut data = make_complete();
        data.follow_up_date = Some("After 7 days".into());
        let json = data.to_json().unwrap();

        assert!(json.contains("\"doctorName\":\"John Smith\""));
        assert!(json.contains("\"followUpDate\":\"After 7 days\""));
        assert!(!json.contains("bloodPressure"));

        let parsed = PrescriptionData::from_json(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_from_json_tolerates_missing_optionals() {
        let json = r#"{
            "doctorName": "A", "licenseNumber": "B", "clinicName": "C",
            "patientName": "D", "patientAge": "40",
            "diagnosis": "E", "symptoms": "F",
            "medications": [{"id": "1", "name": "M", "dosage": "1mg",
                             "frequency": "daily", "duration": "2 days"}],
            "date": "2/3/2025"
        }"#;

        let data = PrescriptionData::from_json(json).unwrap();
        assert!(data.blood_pressure.is_none());
        assert!(data.specialization.is_empty());
        assert_eq!(data.medications[0].instructions, None);
        assert!(data.is_renderable());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(PrescriptionData::from_json("").is_err());
        assert!(PrescriptionData::from_json("{\"doctorName\": 3}").is_err());
    }

    #[test]
    fn test_present_filters_empty() {
        assert_eq!(present(&Some("120/80".into())), Some("120/80"));
        assert_eq!(present(&Some("  ".into())), Some("  "));
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
    }
}
