//! Label tables for English and Spanish.

/// Structural labels and user-facing messages for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    // Sections
    pub doctor_details: &'static str,
    pub patient_information: &'static str,
    pub clinical_assessment: &'static str,
    pub medications: &'static str,
    pub additional_notes: &'static str,
    pub prescription: &'static str,
    pub follow_up: &'static str,

    // Doctor fields
    pub doctor_name: &'static str,
    pub license_number: &'static str,
    pub license_no: &'static str,
    pub specialization: &'static str,
    pub clinic_name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,

    // Patient fields
    pub name: &'static str,
    pub patient_name: &'static str,
    pub age: &'static str,
    pub gender: &'static str,

    // Clinical fields
    pub diagnosis: &'static str,
    pub symptoms: &'static str,
    pub blood_pressure: &'static str,
    pub weight: &'static str,
    pub temperature: &'static str,

    // Medication fields
    pub medicine_name: &'static str,
    pub medicine_and_dosage: &'static str,
    pub dosage: &'static str,
    pub frequency: &'static str,
    pub duration: &'static str,
    pub instructions: &'static str,

    // Messages
    pub no_medications: &'static str,
    pub no_search_results: &'static str,
    pub did_you_mean: &'static str,
    pub missing_information: &'static str,
    pub fill_required_fields: &'static str,
    pub provide_diagnosis_symptoms: &'static str,
    pub no_medications_error: &'static str,
    pub add_at_least_one_medication: &'static str,
    pub incomplete_medication: &'static str,
    pub error_title: &'static str,
    pub pdf_error_message: &'static str,
    pub no_prescription_data: &'static str,

    // Document
    pub prescription_title: &'static str,
    pub date: &'static str,
    pub next_visit: &'static str,
    pub rx_symbol: &'static str,
}

pub static EN: Translations = Translations {
    doctor_details: "Doctor Details",
    patient_information: "Patient Information",
    clinical_assessment: "Clinical Assessment",
    medications: "Medications",
    additional_notes: "Additional Notes",
    prescription: "Prescription",
    follow_up: "Follow-up",

    doctor_name: "Doctor Name",
    license_number: "License Number",
    license_no: "License No",
    specialization: "Specialization",
    clinic_name: "Clinic/Hospital Name",
    address: "Address",
    phone: "Phone",

    name: "Name",
    patient_name: "Patient Name",
    age: "Age",
    gender: "Gender",

    diagnosis: "Diagnosis",
    symptoms: "Symptoms",
    blood_pressure: "Blood Pressure",
    weight: "Weight",
    temperature: "Temperature",

    medicine_name: "Medicine Name",
    medicine_and_dosage: "Medicine & Dosage",
    dosage: "Dosage",
    frequency: "Frequency",
    duration: "Duration",
    instructions: "Instructions",

    no_medications: "No medications added yet",
    no_search_results: "No medications found",
    did_you_mean: "Did you mean",
    missing_information: "Missing Information",
    fill_required_fields: "Please fill in all required fields",
    provide_diagnosis_symptoms: "Please provide diagnosis and symptoms",
    no_medications_error: "No Medications",
    add_at_least_one_medication: "Please add at least one medication",
    incomplete_medication: "Please fill in name, dosage, frequency and duration",
    error_title: "Error",
    pdf_error_message: "Failed to generate PDF. Please try again.",
    no_prescription_data: "No prescription data found",

    prescription_title: "Medical Prescription",
    date: "Date",
    next_visit: "Next Visit",
    rx_symbol: "℞",
};

pub static ES: Translations = Translations {
    doctor_details: "Datos del Médico",
    patient_information: "Información del Paciente",
    clinical_assessment: "Evaluación Clínica",
    medications: "Medicamentos",
    additional_notes: "Notas Adicionales",
    prescription: "Prescripción",
    follow_up: "Seguimiento",

    doctor_name: "Nombre del Médico",
    license_number: "Número de Licencia",
    license_no: "Licencia",
    specialization: "Especialización",
    clinic_name: "Nombre de Clínica/Hospital",
    address: "Dirección",
    phone: "Teléfono",

    name: "Nombre",
    patient_name: "Nombre del Paciente",
    age: "Edad",
    gender: "Género",

    diagnosis: "Diagnóstico",
    symptoms: "Síntomas",
    blood_pressure: "Presión Arterial",
    weight: "Peso",
    temperature: "Temperatura",

    medicine_name: "Nombre del Medicamento",
    medicine_and_dosage: "Medicamento y Dosis",
    dosage: "Dosis",
    frequency: "Frecuencia",
    duration: "Duración",
    instructions: "Instrucciones",

    no_medications: "No se han agregado medicamentos",
    no_search_results: "No se encontraron medicamentos",
    did_you_mean: "¿Quiso decir",
    missing_information: "Información Faltante",
    fill_required_fields: "Por favor complete todos los campos requeridos",
    provide_diagnosis_symptoms: "Por favor proporcione diagnóstico y síntomas",
    no_medications_error: "Sin Medicamentos",
    add_at_least_one_medication: "Por favor agregue al menos un medicamento",
    incomplete_medication: "Por favor complete nombre, dosis, frecuencia y duración",
    error_title: "Error",
    pdf_error_message: "Error al generar PDF. Por favor intente de nuevo.",
    no_prescription_data: "No se encontraron datos de receta",

    prescription_title: "Receta Médica",
    date: "Fecha",
    next_visit: "Próxima Visita",
    rx_symbol: "℞",
};
