/// Coarse waste category used for disposal guidance, independent of the
/// detection service's fine-grained label vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteCategory {
    Plastic,
    Paper,
    Cardboard,
    Metal,
    Glass,
    Organic,
    Trash,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 7] = [
        WasteCategory::Plastic,
        WasteCategory::Paper,
        WasteCategory::Cardboard,
        WasteCategory::Metal,
        WasteCategory::Glass,
        WasteCategory::Organic,
        WasteCategory::Trash,
    ];
}
