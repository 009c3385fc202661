pub mod category;
pub mod prediction;
pub mod raw_response;
pub mod result;

pub use category::WasteCategory;
pub use prediction::{ConfidenceSource, NormalizedPrediction};
pub use raw_response::{Detection, ListedDetection, Predictions, RawInferenceResponse};
pub use result::ClassificationResult;
