use crate::error::ClassificationError;
use crate::pipeline::types::{ConfidenceSource, NormalizedPrediction};
use tracing::warn;

/// Threshold check rejecting low-certainty predictions before
/// categorization. Applied once, after normalization, to every path that
/// produced a measured score; assumed confidences carry no measurement
/// and pass through unchecked.
pub struct ConfidenceGate {
    threshold: f64,
}

impl ConfidenceGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn check(&self, prediction: &NormalizedPrediction) -> Result<(), ClassificationError> {
        if prediction.source() == ConfidenceSource::Measured
            && prediction.confidence() < self.threshold
        {
            warn!(
                "Rejecting {}: confidence {:.3} below threshold {:.2}",
                prediction.label(),
                prediction.confidence(),
                self.threshold
            );
            return Err(ClassificationError::LowConfidence {
                confidence: prediction.confidence(),
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_measured_confidence_below_threshold() {
        let gate = ConfidenceGate::new(0.5);
        let prediction = NormalizedPrediction::measured("glass_jar", 0.3);
        assert!(matches!(
            gate.check(&prediction),
            Err(ClassificationError::LowConfidence { .. })
        ));
    }

    #[test]
    fn accepts_confidence_exactly_at_threshold() {
        let gate = ConfidenceGate::new(0.5);
        let prediction = NormalizedPrediction::measured("glass_jar", 0.5);
        assert!(gate.check(&prediction).is_ok());
    }

    #[test]
    fn accepts_measured_confidence_above_threshold() {
        let gate = ConfidenceGate::new(0.5);
        let prediction = NormalizedPrediction::measured("plastic_bottle", 0.92);
        assert!(gate.check(&prediction).is_ok());
    }

    #[test]
    fn assumed_confidence_is_exempt() {
        let gate = ConfidenceGate::new(0.95);
        let prediction = NormalizedPrediction::assumed("metal_can", 0.9);
        assert!(gate.check(&prediction).is_ok());
    }
}
