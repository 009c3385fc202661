use crate::pipeline::types::WasteCategory;

// Ordered keyword rules over free-text upstream labels. Order is a
// contract: a label matching several rules resolves to the earliest one.
const RULES: [(&str, WasteCategory); 7] = [
    ("plastic", WasteCategory::Plastic),
    ("paper", WasteCategory::Paper),
    ("cardboard", WasteCategory::Cardboard),
    ("metal", WasteCategory::Metal),
    ("glass", WasteCategory::Glass),
    ("food", WasteCategory::Organic),
    ("organic", WasteCategory::Organic),
];

/// Map a detection label onto a coarse waste category, case-insensitive,
/// first substring match wins. Anything unmatched is `Trash`.
pub fn map_waste_type(label: &str) -> WasteCategory {
    let label = label.to_lowercase();
    for (keyword, category) in RULES {
        if label.contains(keyword) {
            return category;
        }
    }
    WasteCategory::Trash
}
