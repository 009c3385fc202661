use crate::pipeline::types::{NormalizedPrediction, Predictions, RawInferenceResponse};
use tracing::debug;

/// Collapses the three upstream response shapes into the single winning
/// prediction. Shapes are tried in priority order: label-keyed map,
/// detection list, flat class list. A shape that is present but yields no
/// candidate falls through to the next one.
pub struct ResponseNormalizer {
    fallback_confidence: f64,
}

impl ResponseNormalizer {
    pub fn new(fallback_confidence: f64) -> Self {
        Self {
            fallback_confidence,
        }
    }

    pub fn normalize(&self, raw: &RawInferenceResponse) -> Option<NormalizedPrediction> {
        self.from_keyed(raw)
            .or_else(|| self.from_listed(raw))
            .or_else(|| self.from_flat(raw))
    }

    /// Shape a: object keyed by class label. A non-empty map always yields
    /// exactly one winner; equal confidences keep the earlier key.
    fn from_keyed(&self, raw: &RawInferenceResponse) -> Option<NormalizedPrediction> {
        let Some(Predictions::Keyed(map)) = &raw.predictions else {
            return None;
        };
        let mut top: Option<(&str, f64)> = None;
        for (label, detection) in map {
            let beats_current = match top {
                Some((_, best)) => detection.confidence > best,
                None => true,
            };
            if beats_current {
                top = Some((label.as_str(), detection.confidence));
            }
        }
        top.map(|(label, confidence)| {
            debug!("Top keyed prediction: {} ({:.3})", label, confidence);
            NormalizedPrediction::measured(label, confidence)
        })
    }

    /// Shape b: ordered detection list, reduced against a seed confidence
    /// of 0. A list whose confidences are all <= 0 degenerates to the seed
    /// and yields nothing.
    fn from_listed(&self, raw: &RawInferenceResponse) -> Option<NormalizedPrediction> {
        let Some(Predictions::Listed(detections)) = &raw.predictions else {
            return None;
        };
        let mut top: Option<(&str, f64)> = None;
        let mut best = 0.0;
        for detection in detections {
            if detection.confidence > best {
                best = detection.confidence;
                top = Some((detection.class.as_str(), detection.confidence));
            }
        }
        top.map(|(label, confidence)| {
            debug!("Top listed prediction: {} ({:.3})", label, confidence);
            NormalizedPrediction::measured(label, confidence)
        })
    }

    /// Shape c: bare class labels with no score. The first label wins and
    /// carries the configured fallback confidence.
    fn from_flat(&self, raw: &RawInferenceResponse) -> Option<NormalizedPrediction> {
        let label = raw.predicted_classes.first()?;
        debug!("Falling back to predicted class: {}", label);
        Some(NormalizedPrediction::assumed(
            label,
            self.fallback_confidence,
        ))
    }
}
