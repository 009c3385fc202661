/// Whether a prediction's confidence was measured by the model or
/// assumed for a score-less classification label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceSource {
    Measured,
    Assumed,
}

/// Canonical `(label, confidence)` pair produced after shape detection.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPrediction {
    label: String,
    confidence: f64,
    source: ConfidenceSource,
}

impl NormalizedPrediction {
    pub fn measured(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            source: ConfidenceSource::Measured,
        }
    }

    pub fn assumed(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            source: ConfidenceSource::Assumed,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn source(&self) -> ConfidenceSource {
        self.source
    }

    /// Confidence as a whole percent, rounded half-up.
    pub fn percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}
