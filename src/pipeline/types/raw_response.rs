use indexmap::IndexMap;
use serde::Deserialize;

/// Parsed body of an upstream detection response.
///
/// The service answers in one of three shapes: `predictions` as an object
/// keyed by class label, `predictions` as an ordered detection list, or
/// (for classification models) bare labels under `predicted_classes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInferenceResponse {
    #[serde(default)]
    pub predictions: Option<Predictions>,
    #[serde(default)]
    pub predicted_classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Predictions {
    /// Object keyed by class label. Document order is preserved so
    /// equal-confidence ties stay deterministic.
    Keyed(IndexMap<String, Detection>),
    /// Ordered list of detections.
    Listed(Vec<ListedDetection>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListedDetection {
    pub class: String,
    pub confidence: f64,
}
