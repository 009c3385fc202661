use serde::Serialize;

/// The only object that crosses the output boundary.
///
/// `confidence` is a whole percent; `category` is the display name of the
/// coarse waste category, not the enum.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassificationResult {
    pub name: String,
    pub category: String,
    pub confidence: u8,
    pub info: String,
    pub tips: Vec<String>,
    pub impact: String,
}
