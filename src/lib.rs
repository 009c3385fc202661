pub mod config;
pub mod error;
pub mod inference;
pub mod pipeline;

pub use config::Settings;
pub use error::{ClassificationError, UpstreamError};

pub use inference::gateway::{InferenceGateway, RoboflowGateway};
pub use pipeline::orchestrator::{ClassificationOrchestrator, OrchestratorBuilder};
pub use pipeline::types::ClassificationResult;
