//! Medication catalog lookup.
//!
//! A fixed, in-memory list of [`MedicationTemplate`]s with:
//! - substring search over name and generic name, optionally restricted to a
//!   category (the sentinel `"all"` means no restriction)
//! - enumeration of the categories present
//! - lookup by template ID
//!
//! Lookups never fail; no match is an empty result or `None`.

mod seed;

pub use seed::seed_templates;

use strsim::jaro_winkler;
use tracing::debug;

use crate::models::{Category, MedicationTemplate};

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Minimum similarity for a "did you mean" suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.75;

/// Read-only medication catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<MedicationTemplate>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Catalog over the compiled-in seed list.
    pub fn seeded() -> Self {
        Self::from_templates(seed_templates())
    }

    /// Catalog over an arbitrary template list (order is kept).
    pub fn from_templates(templates: Vec<MedicationTemplate>) -> Self {
        Self { templates }
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MedicationTemplate> {
        self.templates.iter()
    }

    /// Search by free text, optionally within one category.
    ///
    /// The query is trimmed and case-folded. A `category` of `None` or
    /// `"all"` searches everything; any other value must equal a category
    /// key exactly. Results keep catalog order.
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&MedicationTemplate> {
        let folded = query.trim().to_lowercase();
        let category = category.filter(|c| *c != ALL_CATEGORIES);

        let results: Vec<&MedicationTemplate> = self
            .templates
            .iter()
            .filter(|t| category.map_or(true, |c| t.category.as_str() == c))
            .filter(|t| t.matches_query(&folded))
            .collect();

        debug!(
            query = %folded,
            category = category.unwrap_or(ALL_CATEGORIES),
            matches = results.len(),
            "catalog search"
        );

        results
    }

    /// Distinct categories present, in first-occurrence order.
    pub fn list_categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category) {
                categories.push(template.category);
            }
        }
        categories
    }

    /// Look up a template by exact ID.
    pub fn find_by_id(&self, id: &str) -> Option<&MedicationTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Closest template by name or generic name, for "did you mean" hints.
    ///
    /// Returns `None` for blank queries or when nothing is similar enough.
    pub fn closest_match(&self, query: &str) -> Option<&MedicationTemplate> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return None;
        }

        self.templates
            .iter()
            .map(|t| {
                let name = jaro_winkler(&folded, &t.name.to_lowercase());
                let generic = jaro_winkler(&folded, &t.generic_name.to_lowercase());
                (t, name.max(generic))
            })
            .filter(|(_, score)| *score >= MIN_SUGGESTION_SIMILARITY)
            // max_by keeps the last of equal maxima; reverse first so the
            // earliest catalog entry wins ties
            .rev()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(t, _)| t)
    }
}
