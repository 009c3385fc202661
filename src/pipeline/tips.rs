use crate::pipeline::types::WasteCategory;

/// Static disposal guidance attached to a coarse waste category.
pub struct CategoryProfile {
    pub category: &'static str,
    pub tips: &'static [&'static str],
    pub impact: &'static str,
}

const PLASTIC: CategoryProfile = CategoryProfile {
    category: "Dry Waste (Sukha Kachra)",
    tips: &[
        "Rinse the item to remove any food residue.",
        "Crush bottles to save space in the bin.",
        "Remove caps and lids before disposal.",
        "Check the recycling symbol on the packaging.",
        "Keep soft plastics like wrappers separate.",
    ],
    impact: "Recycling one ton of plastic can save 7,500 kWh of electricity.",
};

const PAPER: CategoryProfile = CategoryProfile {
    category: "Dry Waste (Sukha Kachra)",
    tips: &[
        "Ensure paper is clean and dry.",
        "Remove any plastic wrapping or laminate.",
        "Staples are usually fine to leave in.",
        "Avoid shredding unless required, it lowers fibre quality.",
        "Flatten paper to save space.",
    ],
    impact: "Recycling one ton of paper saves 17 trees.",
};

const CARDBOARD: CategoryProfile = CategoryProfile {
    category: "Dry Waste (Sukha Kachra)",
    tips: &[
        "Flatten boxes before putting them out.",
        "Remove tape and plastic labels.",
        "Keep cardboard dry, wet board cannot be recycled.",
        "Avoid greasy pizza boxes, they contaminate the batch.",
        "Stack pieces neatly for collection.",
    ],
    impact: "Recycling cardboard uses 75% less energy than making it new.",
};

const METAL: CategoryProfile = CategoryProfile {
    category: "Dry Waste (Sukha Kachra)",
    tips: &[
        "Rinse cans to remove food residue.",
        "Watch out for sharp edges on opened tins.",
        "Labels can stay on, they burn off in processing.",
        "Do not crush aerosol cans.",
        "Aluminium foil can be recycled if clean.",
    ],
    impact: "One recycled aluminum can saves enough energy to run a TV for 3 hours.",
};

const GLASS: CategoryProfile = CategoryProfile {
    category: "Dry Waste (Sukha Kachra)",
    tips: &[
        "Rinse bottles and jars.",
        "Remove metal or plastic lids.",
        "Don't recycle broken glass with intact containers.",
        "No mirrors, window panes or light bulbs.",
        "Separate by color if your collector requires it.",
    ],
    impact: "Recycling glass cuts related air pollution significantly.",
};

const ORGANIC: CategoryProfile = CategoryProfile {
    category: "Wet Waste (Geela Kachra)",
    tips: &[
        "Use a bin with a lid to contain odours.",
        "Include fruit and vegetable peels.",
        "Avoid too much oil or cooked meat in compost.",
        "Line the bin with newspaper instead of plastic.",
        "Use the collected waste for composting.",
    ],
    impact: "Composting organic waste reduces methane emissions from landfills.",
};

const TRASH: CategoryProfile = CategoryProfile {
    category: "Reject Waste",
    tips: &[
        "For non-recyclables that belong in neither dry nor wet waste.",
        "Includes chip packets and multilayer packaging.",
        "Styrofoam and used tissues go here too.",
        "Always check packaging before assuming it recycles.",
        "Reduce non-recyclables where you can.",
    ],
    impact: "Segregating reject waste prevents contamination of recyclables.",
};

/// Look up the profile for a category. The lookup is total: every
/// category has a profile and `Trash` doubles as the fallback.
pub fn profile_for(category: WasteCategory) -> &'static CategoryProfile {
    match category {
        WasteCategory::Plastic => &PLASTIC,
        WasteCategory::Paper => &PAPER,
        WasteCategory::Cardboard => &CARDBOARD,
        WasteCategory::Metal => &METAL,
        WasteCategory::Glass => &GLASS,
        WasteCategory::Organic => &ORGANIC,
        WasteCategory::Trash => &TRASH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_complete_profile() {
        for category in WasteCategory::ALL {
            let profile = profile_for(category);
            assert!(!profile.category.is_empty());
            assert!(!profile.tips.is_empty());
            assert!(!profile.impact.is_empty());
        }
    }

    #[test]
    fn organic_is_wet_waste_and_trash_is_reject() {
        assert_eq!(
            profile_for(WasteCategory::Organic).category,
            "Wet Waste (Geela Kachra)"
        );
        assert_eq!(profile_for(WasteCategory::Trash).category, "Reject Waste");
        assert_eq!(
            profile_for(WasteCategory::Plastic).category,
            "Dry Waste (Sukha Kachra)"
        );
    }
}
