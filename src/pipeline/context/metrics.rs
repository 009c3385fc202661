use std::time::Duration;

/// Metrics collected while a classification request is processed
pub struct RequestMetrics {
    inference_duration: Option<Duration>,
    total_duration: Option<Duration>,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self {
            inference_duration: None,
            total_duration: None,
        }
    }

    pub fn record_inference_duration(&mut self, duration: Duration) {
        self.inference_duration = Some(duration);
    }

    pub fn record_total_duration(&mut self, duration: Duration) {
        self.total_duration = Some(duration);
    }

    pub fn inference_duration(&self) -> Option<Duration> {
        self.inference_duration
    }

    pub fn total_duration(&self) -> Option<Duration> {
        self.total_duration
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}
