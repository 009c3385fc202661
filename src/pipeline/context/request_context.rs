use crate::pipeline::context::metrics::RequestMetrics;
use crate::pipeline::context::state::{Gated, Inferred, Normalized, Received};
use crate::pipeline::types::{NormalizedPrediction, RawInferenceResponse};
use std::time::{Duration, Instant};
use uuid::Uuid;

// RequestContext with compile-time state tracking via the phantom data
pub struct RequestContext<S> {
    request_id: Uuid,
    metrics: RequestMetrics,
    processing_start: Instant,
    state: S,
}

impl<S> RequestContext<S> {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }
}

impl RequestContext<Received> {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            metrics: RequestMetrics::new(),
            processing_start: Instant::now(),
            state: Received,
        }
    }

    pub fn into_inferred(mut self, raw: RawInferenceResponse) -> RequestContext<Inferred> {
        self.metrics.record_inference_duration(self.elapsed());
        RequestContext::<Inferred> {
            request_id: self.request_id,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: Inferred { raw },
        }
    }
}

impl Default for RequestContext<Received> {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext<Inferred> {
    pub fn raw(&self) -> &RawInferenceResponse {
        &self.state.raw
    }

    pub fn into_normalized(self, prediction: NormalizedPrediction) -> RequestContext<Normalized> {
        RequestContext::<Normalized> {
            request_id: self.request_id,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: Normalized { prediction },
        }
    }
}

impl RequestContext<Normalized> {
    pub fn prediction(&self) -> &NormalizedPrediction {
        &self.state.prediction
    }

    pub fn into_gated(mut self) -> RequestContext<Gated> {
        self.metrics.record_total_duration(self.elapsed());
        let prediction = self.state.prediction;
        RequestContext::<Gated> {
            request_id: self.request_id,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: Gated { prediction },
        }
    }
}

impl RequestContext<Gated> {
    pub fn prediction(&self) -> &NormalizedPrediction {
        &self.state.prediction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::RawInferenceResponse;

    fn empty_raw() -> RawInferenceResponse {
        serde_json::from_str("{}").unwrap()
    }

    #[test]
    fn transitions_keep_the_request_id() {
        let received = RequestContext::new();
        let id = received.request_id();
        let inferred = received.into_inferred(empty_raw());
        let normalized = inferred.into_normalized(NormalizedPrediction::measured("bottle", 0.9));
        let gated = normalized.into_gated();
        assert_eq!(gated.request_id(), id);
        assert_eq!(gated.prediction().label(), "bottle");
    }

    #[test]
    fn inference_duration_is_recorded_on_transition() {
        let context = RequestContext::new().into_inferred(empty_raw());
        assert!(context.metrics().inference_duration().is_some());
    }
}
