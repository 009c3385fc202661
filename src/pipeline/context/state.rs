use crate::pipeline::types::{NormalizedPrediction, RawInferenceResponse};

// Markers tracking a request through the classification state machine

pub struct Received;

pub struct Inferred {
    pub(super) raw: RawInferenceResponse,
}

pub struct Normalized {
    pub(super) prediction: NormalizedPrediction,
}

pub struct Gated {
    pub(super) prediction: NormalizedPrediction,
}

// Optional: Add trait for introspection
pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for Received {
    fn state_name() -> &'static str {
        "Received"
    }
}

impl ProcessingState for Inferred {
    fn state_name() -> &'static str {
        "Inferred"
    }
}

impl ProcessingState for Normalized {
    fn state_name() -> &'static str {
        "Normalized"
    }
}

impl ProcessingState for Gated {
    fn state_name() -> &'static str {
        "Gated"
    }
}
