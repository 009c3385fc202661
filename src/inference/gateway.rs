use crate::config::Settings;
use crate::error::{ClassificationError, UpstreamError};
use crate::pipeline::types::RawInferenceResponse;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::time::Duration;
use tracing::{debug, error};

/// Outbound seam to the upstream detection service: sends image bytes,
/// returns the parsed response or a typed failure.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    async fn infer(&self, image: &[u8]) -> Result<RawInferenceResponse, ClassificationError>;
}

/// Gateway to the hosted Roboflow detect endpoint. One POST per request,
/// no retries; a single failed attempt is a failed request.
pub struct RoboflowGateway {
    client: reqwest::Client,
    settings: Settings,
}

impl RoboflowGateway {
    pub fn new(settings: Settings) -> Result<Self, ClassificationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(UpstreamError::Transport)?;
        Ok(Self { client, settings })
    }

    // Credentials are checked before any network I/O is attempted.
    fn require_credentials(&self) -> Result<(), ClassificationError> {
        if self.settings.model_name.is_empty() {
            return Err(ClassificationError::Configuration("ROBOFLOW_MODEL_NAME"));
        }
        if self.settings.model_version.is_empty() {
            return Err(ClassificationError::Configuration("ROBOFLOW_MODEL_VERSION"));
        }
        if self.settings.api_key.is_empty() {
            return Err(ClassificationError::Configuration("ROBOFLOW_API_KEY"));
        }
        Ok(())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}?api_key={}",
            self.settings.detect_base_url,
            self.settings.model_name,
            self.settings.model_version,
            self.settings.api_key
        )
    }
}

#[async_trait]
impl InferenceGateway for RoboflowGateway {
    async fn infer(&self, image: &[u8]) -> Result<RawInferenceResponse, ClassificationError> {
        self.require_credentials()?;

        let body = BASE64.encode(image);
        debug!("Posting {} bytes of base64 image data upstream", body.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Detection service returned {}: {}", status, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().await.map_err(UpstreamError::Transport)?;
        let raw = serde_json::from_str(&text).map_err(UpstreamError::Decode)?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_credentials() -> Settings {
        Settings {
            model_name: "waste-detection".to_string(),
            model_version: "3".to_string(),
            api_key: "secret".to_string(),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn missing_model_name_fails_before_any_request() {
        let mut settings = settings_with_credentials();
        settings.model_name = String::new();
        let gateway = RoboflowGateway::new(settings).unwrap();
        let err = gateway.infer(&[1, 2, 3]).await.unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::Configuration("ROBOFLOW_MODEL_NAME")
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let mut settings = settings_with_credentials();
        settings.api_key = String::new();
        let gateway = RoboflowGateway::new(settings).unwrap();
        let err = gateway.infer(&[1, 2, 3]).await.unwrap_err();
        assert!(matches!(
            err,
            ClassificationError::Configuration("ROBOFLOW_API_KEY")
        ));
    }

    #[test]
    fn endpoint_embeds_model_version_and_key() {
        let gateway = RoboflowGateway::new(settings_with_credentials()).unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://detect.roboflow.com/waste-detection/3?api_key=secret"
        );
    }
}
