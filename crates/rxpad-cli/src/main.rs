use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rxpad_core::catalog::{Catalog, ALL_CATEGORIES};
use rxpad_core::{Language, MedicationTemplate, PrescriptionData, RenderOptions, RenderedDocument};

#[derive(Parser)]
#[command(name = "rxpad")]
#[command(about = "Render prescriptions and browse the medication catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the medication catalog
    Search {
        /// Text to match against name and generic name
        #[arg(default_value = "")]
        query: String,
        /// Category key, or "all"
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Message language (en, es)
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// List catalog categories
    Categories {
        /// Label language (en, es)
        #[arg(long, default_value = "en")]
        lang: Language,
    },
    /// Show one medication template
    Show {
        /// Template ID
        id: String,
    },
    /// Render a prescription JSON document to HTML
    Render {
        /// Prescription JSON file
        input: PathBuf,
        /// Document language (en, es)
        #[arg(long, default_value = "en")]
        lang: Language,
        /// Output path (defaults to the suggested file name with .html)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Interpolate field values without escaping markup
        #[arg(long)]
        no_escape: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("rxpad=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::seeded();

    match cli.command {
        Commands::Search {
            query,
            category,
            lang,
        } => {
            for line in search_lines(&catalog, &query, &category, lang) {
                println!("{}", line);
            }
        }
        Commands::Categories { lang } => {
            for category in catalog.list_categories() {
                println!("{:<18} {}", category.as_str(), category.label(lang));
            }
        }
        Commands::Show { id } => match catalog.find_by_id(&id) {
            Some(template) => print!("{}", describe(template)),
            None => {
                println!("Medication template {} not found.", id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Render {
            input,
            lang,
            out,
            no_escape,
        } => {
            let options = RenderOptions {
                language: lang,
                escape_markup: !no_escape,
            };
            if !render(&input, out.as_deref(), options)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse, validate, render and write one prescription.
///
/// Returns false when the prescription failed validation.
fn render(input: &Path, out: Option<&Path>, options: RenderOptions) -> Result<bool> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let data = PrescriptionData::from_json(&json).with_context(|| {
        format!(
            "{}: {}",
            options.language.translations().no_prescription_data,
            input.display()
        )
    })?;

    if let Err(e) = data.validate() {
        let (title, message) = e.user_message(options.language);
        tracing::warn!(error = %e, "prescription not renderable");
        eprintln!("{}: {}", title, message);
        return Ok(false);
    }

    let document = RenderedDocument::render(&data, options);
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(&document.file_name));
    write_document(&path, &document)?;

    tracing::info!(path = %path.display(), digest = %document.digest, "wrote prescription");
    println!("{}", path.display());
    Ok(true)
}

/// Result lines for `search`, or the localized empty-state message and hint.
fn search_lines(catalog: &Catalog, query: &str, category: &str, lang: Language) -> Vec<String> {
    let results = catalog.search(query, Some(category));
    if !results.is_empty() {
        return results.into_iter().map(summary_line).collect();
    }

    let t = lang.translations();
    let mut lines = vec![t.no_search_results.to_string()];
    if let Some(hint) = catalog.closest_match(query) {
        lines.push(format!("{}: {}?", t.did_you_mean, hint.name));
    }
    lines
}

/// `<file name>.html` with path separators from the date replaced.
fn default_output_path(file_name: &str) -> PathBuf {
    let stem = file_name.strip_suffix(".pdf").unwrap_or(file_name);
    PathBuf::from(format!("{}.html", stem.replace(['/', '\\'], "-")))
}

fn write_document(path: &Path, document: &RenderedDocument) -> Result<()> {
    fs::write(path, &document.html).with_context(|| format!("Failed to write {}", path.display()))
}

fn summary_line(template: &MedicationTemplate) -> String {
    format!(
        "{:>3}  {} ({}) [{}]",
        template.id, template.name, template.generic_name, template.category
    )
}

fn describe(template: &MedicationTemplate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", summary_line(template)));
    for (label, values) in [
        ("Dosages", &template.common_dosages),
        ("Frequencies", &template.common_frequencies),
        ("Durations", &template.common_durations),
        ("Instructions", &template.common_instructions),
    ] {
        out.push_str(&format!("  {}: {}\n", label, values.join("; ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rxpad_core::Medication;

    fn write_prescription(dir: &Path, data: &PrescriptionData) -> PathBuf {
        let path = dir.join("rx.json");
        fs::write(&path, data.to_json().unwrap()).unwrap();
        path
    }

    fn make_prescription() -> PrescriptionData {
        let mut data = PrescriptionData::new("01/15/2024");
        data.doctor_name = "John Smith".into();
        data.license_number = "MED123456".into();
        data.clinic_name = "City Medical Center".into();
        data.patient_name = "Jane Doe".into();
        data.patient_age = "35".into();
        data.diagnosis = "URTI".into();
        data.symptoms = "Fever".into();
        data.add_medication(Medication::new(
            "Paracetamol".into(),
            "500mg".into(),
            "Twice daily".into(),
            "5 days".into(),
        ));
        data
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("Prescription_Jane Doe_01/15/2024.pdf"),
            PathBuf::from("Prescription_Jane Doe_01-15-2024.html")
        );
    }

    #[test]
    fn test_render_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_prescription(dir.path(), &make_prescription());
        let out = dir.path().join("out.html");

        let rendered = render(&input, Some(&out), RenderOptions::for_language(Language::Es)).unwrap();
        assert!(rendered);

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("Paracetamol"));
        assert!(html.contains("Fecha: 01/15/2024"));
    }

    #[test]
    fn test_render_rejects_invalid_prescription() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = make_prescription();
        data.medications.clear();
        let input = write_prescription(dir.path(), &data);
        let out = dir.path().join("out.html");

        let rendered = render(&input, Some(&out), RenderOptions::default()).unwrap();
        assert!(!rendered);
        assert!(!out.exists());
    }

    #[test]
    fn test_render_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rx.json");
        fs::write(&input, "{").unwrap();

        assert!(render(&input, None, RenderOptions::default()).is_err());
    }

    #[test]
    fn test_search_lines_localized_hint() {
        let catalog = Catalog::seeded();

        let lines = search_lines(&catalog, "paracetmol", ALL_CATEGORIES, Language::Es);
        assert_eq!(
            lines,
            vec![
                "No se encontraron medicamentos".to_string(),
                "¿Quiso decir: Paracetamol?".to_string(),
            ]
        );

        let lines = search_lines(&catalog, "paracetmol", ALL_CATEGORIES, Language::En);
        assert_eq!(lines[1], "Did you mean: Paracetamol?");
    }

    #[test]
    fn test_search_lines_lists_matches() {
        let catalog = Catalog::seeded();
        let lines = search_lines(&catalog, "", "antibiotics", Language::Es);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Amoxicillin"));
    }

    #[test]
    fn test_describe_lists_suggestions() {
        let catalog = Catalog::seeded();
        let text = describe(catalog.find_by_id("10").unwrap());
        assert!(text.contains("Salbutamol (Albuterol) [respiratory]"));
        assert!(text.contains("Dosages: 100mcg per puff; 2 puffs"));
    }
}
