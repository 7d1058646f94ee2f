//! Medication template models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::medication::Medication;
use crate::i18n::Language;

/// Therapeutic category of a catalog template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Analgesics,
    Antibiotics,
    Antihistamines,
    Cardiovascular,
    Diabetes,
    Respiratory,
    Gastrointestinal,
    Other,
}

/// Unknown category key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Analgesics,
        Category::Antibiotics,
        Category::Antihistamines,
        Category::Cardiovascular,
        Category::Diabetes,
        Category::Respiratory,
        Category::Gastrointestinal,
        Category::Other,
    ];

    /// Lowercase key used in filters and serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Analgesics => "analgesics",
            Category::Antibiotics => "antibiotics",
            Category::Antihistamines => "antihistamines",
            Category::Cardiovascular => "cardiovascular",
            Category::Diabetes => "diabetes",
            Category::Respiratory => "respiratory",
            Category::Gastrointestinal => "gastrointestinal",
            Category::Other => "other",
        }
    }

    /// Localized display label.
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, Category::Analgesics) => "Analgesics (Pain Relief)",
            (Language::En, Category::Antibiotics) => "Antibiotics",
            (Language::En, Category::Antihistamines) => "Antihistamines",
            (Language::En, Category::Cardiovascular) => "Cardiovascular",
            (Language::En, Category::Diabetes) => "Diabetes",
            (Language::En, Category::Respiratory) => "Respiratory",
            (Language::En, Category::Gastrointestinal) => "Gastrointestinal",
            (Language::En, Category::Other) => "Other",
            (Language::Es, Category::Analgesics) => "Analgésicos (Alivio del Dolor)",
            (Language::Es, Category::Antibiotics) => "Antibióticos",
            (Language::Es, Category::Antihistamines) => "Antihistamínicos",
            (Language::Es, Category::Cardiovascular) => "Cardiovascular",
            (Language::Es, Category::Diabetes) => "Diabetes",
            (Language::Es, Category::Respiratory) => "Respiratorio",
            (Language::Es, Category::Gastrointestinal) => "Gastrointestinal",
            (Language::Es, Category::Other) => "Otro",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only medication template from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationTemplate {
    /// Unique template identifier
    pub id: String,
    /// Brand or common name
    pub name: String,
    /// Generic (INN) name
    pub generic_name: String,
    /// Therapeutic category
    pub category: Category,
    /// Suggested dosages, most common first
    pub common_dosages: Vec<String>,
    /// Suggested frequencies, most common first
    pub common_frequencies: Vec<String>,
    /// Suggested durations, most common first
    pub common_durations: Vec<String>,
    /// Suggested instructions, most common first
    pub common_instructions: Vec<String>,
}

impl MedicationTemplate {
    /// Check whether the (already case-folded) query occurs in the name or
    /// generic name.
    pub fn matches_query(&self, folded_query: &str) -> bool {
        folded_query.is_empty()
            || self.name.to_lowercase().contains(folded_query)
            || self.generic_name.to_lowercase().contains(folded_query)
    }

    /// Create a new medication pre-filled with the first suggestion of each list.
    pub fn to_medication(&self) -> Medication {
        let first = |list: &[String]| list.first().cloned().unwrap_or_default();
        let mut medication = Medication::new(
            self.name.clone(),
            first(&self.common_dosages),
            first(&self.common_frequencies),
            first(&self.common_durations),
        );
        medication.instructions = self.common_instructions.first().cloned();
        medication
    }
}
