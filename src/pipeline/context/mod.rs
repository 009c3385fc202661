pub mod metrics;
pub mod request_context;
pub mod state;

pub use metrics::RequestMetrics;
pub use request_context::RequestContext;
pub use state::{Gated, Inferred, Normalized, ProcessingState, Received};
