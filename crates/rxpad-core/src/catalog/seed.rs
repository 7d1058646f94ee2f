//! Compiled-in medication templates.

use crate::models::{Category, MedicationTemplate};

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    generic_name: &str,
    category: Category,
    dosages: &[&str],
    frequencies: &[&str],
    durations: &[&str],
    instructions: &[&str],
) -> MedicationTemplate {
    let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
    MedicationTemplate {
        id: id.into(),
        name: name.into(),
        generic_name: generic_name.into(),
        category,
        common_dosages: owned(dosages),
        common_frequencies: owned(frequencies),
        common_durations: owned(durations),
        common_instructions: owned(instructions),
    }
}

/// The seed catalog, in display order.
pub fn seed_templates() -> Vec<MedicationTemplate> {
    vec![
        // Analgesics
        template(
            "1",
            "Paracetamol",
            "Acetaminophen",
            Category::Analgesics,
            &["500mg", "650mg", "1000mg"],
            &["Every 4-6 hours", "Every 8 hours", "Twice daily"],
            &["3 days", "5 days", "7 days", "As needed"],
            &["After meals", "With water", "Do not exceed 4g/day"],
        ),
        template(
            "2",
            "Ibuprofen",
            "Ibuprofen",
            Category::Analgesics,
            &["200mg", "400mg", "600mg"],
            &["Every 6-8 hours", "Three times daily", "As needed"],
            &["3 days", "5 days", "7 days"],
            &["After meals", "With food", "Avoid empty stomach"],
        ),
        // Antibiotics
        template(
            "3",
            "Amoxicillin",
            "Amoxicillin",
            Category::Antibiotics,
            &["250mg", "500mg", "875mg"],
            &["Three times daily", "Twice daily", "Every 8 hours"],
            &["5 days", "7 days", "10 days"],
            &["Complete full course", "With or without food", "Take at same time daily"],
        ),
        template(
            "4",
            "Azithromycin",
            "Azithromycin",
            Category::Antibiotics,
            &["250mg", "500mg"],
            &["Once daily", "Day 1: 500mg, Days 2-5: 250mg"],
            &["3 days", "5 days"],
            &["Before meals", "Complete full course", "1 hour before or 2 hours after food"],
        ),
        // Antihistamines
        template(
            "5",
            "Cetirizine",
            "Cetirizine",
            Category::Antihistamines,
            &["5mg", "10mg"],
            &["Once daily", "At bedtime"],
            &["5 days", "7 days", "14 days"],
            &["With or without food", "May cause drowsiness", "Avoid alcohol"],
        ),
        template(
            "6",
            "Loratadine",
            "Loratadine",
            Category::Antihistamines,
            &["10mg"],
            &["Once daily"],
            &["7 days", "14 days", "As needed"],
            &["Non-drowsy formula", "With or without food"],
        ),
        // Cardiovascular
        template(
            "7",
            "Atorvastatin",
            "Atorvastatin",
            Category::Cardiovascular,
            &["10mg", "20mg", "40mg"],
            &["Once daily", "At bedtime"],
            &["30 days", "Ongoing"],
            &["At same time daily", "Can be taken with or without food", "Avoid grapefruit"],
        ),
        template(
            "8",
            "Metoprolol",
            "Metoprolol",
            Category::Cardiovascular,
            &["25mg", "50mg", "100mg"],
            &["Twice daily", "Once daily"],
            &["30 days", "Ongoing"],
            &["With food", "Do not stop suddenly", "Monitor blood pressure"],
        ),
        // Diabetes
        template(
            "9",
            "Metformin",
            "Metformin",
            Category::Diabetes,
            &["500mg", "850mg", "1000mg"],
            &["Twice daily", "Three times daily", "With meals"],
            &["30 days", "Ongoing"],
            &["With meals", "Start with low dose", "Monitor blood sugar"],
        ),
        // Respiratory
        template(
            "10",
            "Salbutamol",
            "Albuterol",
            Category::Respiratory,
            &["100mcg per puff", "2 puffs"],
            &["As needed", "Every 4-6 hours", "Before exercise"],
            &["As needed", "30 days"],
            &["Shake well before use", "Rinse mouth after use", "Wait 1 min between puffs"],
        ),
        template(
            "11",
            "Montelukast",
            "Montelukast",
            Category::Respiratory,
            &["4mg", "5mg", "10mg"],
            &["Once daily", "At bedtime"],
            &["30 days", "Ongoing"],
            &["In the evening", "With or without food"],
        ),
        // Gastrointestinal
        template(
            "12",
            "Omeprazole",
            "Omeprazole",
            Category::Gastrointestinal,
            &["20mg", "40mg"],
            &["Once daily", "Before breakfast"],
            &["14 days", "30 days"],
            &["Before meals", "Swallow whole", "Do not crush"],
        ),
        template(
            "13",
            "Ranitidine",
            "Ranitidine",
            Category::Gastrointestinal,
            &["150mg", "300mg"],
            &["Twice daily", "Once daily at bedtime"],
            &["14 days", "30 days"],
            &["With or without food", "At bedtime for GERD"],
        ),
    ]
}
