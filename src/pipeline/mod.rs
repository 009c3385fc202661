pub mod context;
pub mod gate;
pub mod mapper;
pub mod normalizer;
pub mod orchestrator;
pub mod tips;
pub mod types;

pub use orchestrator::{ClassificationOrchestrator, OrchestratorBuilder};
pub use types::{ClassificationResult, NormalizedPrediction, RawInferenceResponse, WasteCategory};
