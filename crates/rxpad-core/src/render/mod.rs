//! Prescription document renderer.
//!
//! Turns a [`PrescriptionData`] into a self-contained HTML document ready for
//! print-to-PDF conversion. Rendering is a pure function of the prescription
//! and the [`RenderOptions`]: no clock, no I/O, byte-identical output for
//! identical input.
//!
//! Optional blocks (template image, blood pressure, weight, temperature,
//! notes, follow-up) appear only when their field is non-blank, each tagged
//! with a `data-section` attribute.

mod escape;
mod style;

pub use escape::escape_html;

use std::borrow::Cow;

use tracing::debug;

use crate::i18n::{Language, Translations};
use crate::models::{present, Medication, PrescriptionData};

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Language for structural labels
    pub language: Language,
    /// Escape reserved markup characters in field values.
    ///
    /// `false` interpolates values verbatim, as older documents did.
    pub escape_markup: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::En,
            escape_markup: true,
        }
    }
}

impl RenderOptions {
    /// Default options in the given language.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

/// Render a prescription with default options in the given language.
pub fn render_prescription_html(data: &PrescriptionData, language: Language) -> String {
    Renderer::new(RenderOptions::for_language(language)).render(data)
}

/// HTML renderer for prescriptions.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the full document.
    ///
    /// The caller is responsible for validating `data` first.
    pub fn render(&self, data: &PrescriptionData) -> String {
        let t = self.options.language.translations();
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", self.options.language.code()));
        html.push_str("<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{}</title>\n", t.prescription_title));
        html.push_str("<style>");
        html.push_str(style::STYLESHEET);
        html.push_str("</style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");

        if let Some(uri) = present(&data.template_image_uri) {
            html.push_str(&format!(
                "<div class=\"template-image\" data-section=\"template-image\"><img src=\"{}\" alt=\"\"></div>\n",
                self.text(uri)
            ));
        }

        self.push_header(&mut html, data, t);

        html.push_str(&format!(
            "<div class=\"date-line\">{}: {}</div>\n",
            t.date,
            self.text(&data.date)
        ));

        self.push_patient(&mut html, data, t);
        self.push_clinical(&mut html, data, t);
        self.push_medications(&mut html, &data.medications, t);

        if let Some(notes) = present(&data.notes) {
            html.push_str("<div class=\"section\" data-section=\"notes\">\n");
            html.push_str(&format!(
                "<div class=\"section-title\">{}</div>\n",
                t.additional_notes
            ));
            html.push_str(&format!("<div class=\"notes\">{}</div>\n", self.text(notes)));
            html.push_str("</div>\n");
        }

        if let Some(follow_up) = present(&data.follow_up_date) {
            html.push_str("<div class=\"section\" data-section=\"follow-up\">\n");
            html.push_str(&format!("<div class=\"section-title\">{}</div>\n", t.follow_up));
            html.push_str(&format!(
                "<div class=\"follow-up\">{}: {}</div>\n",
                t.next_visit,
                self.text(follow_up)
            ));
            html.push_str("</div>\n");
        }

        html.push_str("<div class=\"footer\">\n");
        html.push_str(&format!(
            "<div class=\"signature\">Dr. {}<br>{}</div>\n",
            self.text(&data.doctor_name),
            self.text(&data.specialization)
        ));
        html.push_str("</div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        debug!(
            language = %self.options.language,
            medications = data.medications.len(),
            bytes = html.len(),
            "rendered prescription"
        );

        html
    }

    fn push_header(&self, html: &mut String, data: &PrescriptionData, t: &Translations) {
        html.push_str("<div class=\"header\">\n");
        html.push_str(&format!(
            "<div class=\"clinic-name\">{}</div>\n",
            self.text(&data.clinic_name)
        ));
        html.push_str("<div class=\"doctor-info\">\n");
        html.push_str(&format!(
            "<strong>Dr. {}</strong> ({})<br>\n",
            self.text(&data.doctor_name),
            self.text(&data.specialization)
        ));
        html.push_str(&format!(
            "{}: {}<br>\n",
            t.license_no,
            self.text(&data.license_number)
        ));
        html.push_str(&format!("{}<br>\n", self.text(&data.clinic_address)));
        html.push_str(&format!("{}: {}\n", t.phone, self.text(&data.clinic_phone)));
        html.push_str("</div>\n");
        html.push_str("</div>\n");
    }

    fn push_patient(&self, html: &mut String, data: &PrescriptionData, t: &Translations) {
        html.push_str("<div class=\"section\" data-section=\"patient\">\n");
        html.push_str(&format!(
            "<div class=\"section-title\">{}</div>\n",
            t.patient_information
        ));
        html.push_str("<div class=\"info-grid\">\n");
        self.push_item(html, t.name, &data.patient_name, None);
        let age_gender = format!(
            "{} / {}",
            self.text(&data.patient_age),
            self.text(&data.patient_gender)
        );
        // already escaped
        html.push_str(&info_item(&format!("{} / {}", t.age, t.gender), &age_gender, None));
        self.push_item(html, t.phone, &data.patient_phone, None);
        self.push_item(html, t.address, &data.patient_address, None);
        html.push_str("</div>\n");
        html.push_str("</div>\n");
    }

    fn push_clinical(&self, html: &mut String, data: &PrescriptionData, t: &Translations) {
        html.push_str("<div class=\"section\" data-section=\"clinical\">\n");
        html.push_str(&format!(
            "<div class=\"section-title\">{}</div>\n",
            t.clinical_assessment
        ));
        html.push_str("<div class=\"info-grid\">\n");
        self.push_item(html, t.diagnosis, &data.diagnosis, None);
        self.push_item(html, t.symptoms, &data.symptoms, None);
        if let Some(bp) = present(&data.blood_pressure) {
            self.push_item(html, t.blood_pressure, bp, Some("blood-pressure"));
        }
        if let Some(weight) = present(&data.weight) {
            self.push_item(html, t.weight, weight, Some("weight"));
        }
        if let Some(temperature) = present(&data.temperature) {
            self.push_item(html, t.temperature, temperature, Some("temperature"));
        }
        html.push_str("</div>\n");
        html.push_str("</div>\n");
    }

    fn push_medications(&self, html: &mut String, medications: &[Medication], t: &Translations) {
        html.push_str("<div class=\"section\" data-section=\"medications\">\n");
        html.push_str(&format!("<div class=\"rx-symbol\">{}</div>\n", t.rx_symbol));
        html.push_str(&format!("<div class=\"section-title\">{}</div>\n", t.prescription));
        html.push_str("<table>\n");
        html.push_str(&format!(
            "<thead><tr><th style=\"width: 40px;\">#</th><th>{}</th><th>{}</th><th>{}</th></tr></thead>\n",
            t.medicine_and_dosage, t.frequency, t.duration
        ));
        html.push_str("<tbody>\n");

        for (index, med) in medications.iter().enumerate() {
            html.push_str("<tr class=\"medication-row\">");
            html.push_str(&format!("<td>#{}</td>", index + 1));
            html.push_str(&format!(
                "<td><div class=\"med-name\">{}</div><div class=\"med-dosage\">{}</div></td>",
                self.text(&med.name),
                self.text(&med.dosage)
            ));
            html.push_str(&format!("<td>{}</td>", self.text(&med.frequency)));
            html.push_str(&format!("<td>{}</td>", self.text(&med.duration)));
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n");
        html.push_str("</table>\n");
        html.push_str("</div>\n");
    }

    fn push_item(&self, html: &mut String, label: &str, value: &str, marker: Option<&str>) {
        html.push_str(&info_item(label, &self.text(value), marker));
    }

    /// Field value as it should appear in the document.
    fn text<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape_markup {
            Cow::Owned(escape_html(value))
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// Label/value cell of an info grid. `value` must already be prepared.
fn info_item(label: &str, value: &str, marker: Option<&str>) -> String {
    let marker = marker
        .map(|m| format!(" data-section=\"{}\"", m))
        .unwrap_or_default();
    format!(
        "<div class=\"info-item\"{}><div class=\"info-label\">{}</div><div class=\"info-value\">{}</div></div>\n",
        marker, label, value
    )
}
