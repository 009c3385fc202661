use crate::config::Settings;
use crate::error::ClassificationError;
use crate::inference::{InferenceGateway, RoboflowGateway};
use crate::pipeline::context::RequestContext;
use crate::pipeline::gate::ConfidenceGate;
use crate::pipeline::mapper::map_waste_type;
use crate::pipeline::normalizer::ResponseNormalizer;
use crate::pipeline::tips::profile_for;
use crate::pipeline::types::ClassificationResult;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry point of the classification pipeline: image bytes in, a stable
/// verdict or exactly one taxonomy error out. Holds no per-request state;
/// one instance serves concurrent requests.
pub struct ClassificationOrchestrator {
    gateway: Arc<dyn InferenceGateway>,
    normalizer: ResponseNormalizer,
    gate: ConfidenceGate,
}

impl ClassificationOrchestrator {
    pub fn builder(settings: Settings) -> OrchestratorBuilder {
        OrchestratorBuilder::new(settings)
    }

    pub async fn classify(&self, image: &[u8]) -> Result<ClassificationResult, ClassificationError> {
        if image.is_empty() {
            return Err(ClassificationError::MissingImage);
        }

        let context = RequestContext::new();
        let request_id = context.request_id();
        debug!("Request {}: classifying {} image bytes", request_id, image.len());

        let raw = self.gateway.infer(image).await?;
        let context = context.into_inferred(raw);

        let Some(prediction) = self.normalizer.normalize(context.raw()) else {
            warn!("Request {}: no usable prediction in upstream response", request_id);
            return Err(ClassificationError::Unclassifiable);
        };
        let context = context.into_normalized(prediction);

        self.gate.check(context.prediction())?;
        let context = context.into_gated();

        let prediction = context.prediction();
        let category = map_waste_type(prediction.label());
        let profile = profile_for(category);

        let result = ClassificationResult {
            name: prediction.label().to_string(),
            category: profile.category.to_string(),
            confidence: prediction.percent(),
            info: format!("This item has been identified as {}.", prediction.label()),
            tips: profile.tips.iter().map(|tip| tip.to_string()).collect(),
            impact: profile.impact.to_string(),
        };

        info!(
            "Request {}: {} -> {:?} ({}%) in {}ms",
            request_id,
            result.name,
            category,
            result.confidence,
            context.elapsed().as_millis()
        );

        Ok(result)
    }
}

pub struct OrchestratorBuilder {
    settings: Settings,
    gateway: Option<Arc<dyn InferenceGateway>>,
}

impl OrchestratorBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            gateway: None,
        }
    }

    // Sets the confidence threshold, this will override the configuration.
    pub fn confidence_threshold(mut self, threshold: f64) -> Self {
        self.settings.confidence_threshold = threshold;
        self
    }

    // Sets the fallback confidence, this will override the configuration.
    pub fn fallback_confidence(mut self, confidence: f64) -> Self {
        self.settings.fallback_confidence = confidence;
        self
    }

    // Replaces the outbound gateway, mainly for driving tests.
    pub fn gateway(mut self, gateway: Arc<dyn InferenceGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn build(self) -> Result<ClassificationOrchestrator, ClassificationError> {
        let gateway = match self.gateway {
            Some(gateway) => gateway,
            None => Arc::new(RoboflowGateway::new(self.settings.clone())?),
        };
        Ok(ClassificationOrchestrator {
            gateway,
            normalizer: ResponseNormalizer::new(self.settings.fallback_confidence),
            gate: ConfidenceGate::new(self.settings.confidence_threshold),
        })
    }
}
