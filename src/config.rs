use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Pipeline settings, layered from `ROBOFLOW_*` environment variables
/// over the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model_name: String,
    pub model_version: String,
    pub api_key: String,
    pub detect_base_url: String,
    pub confidence_threshold: f64,
    pub fallback_confidence: f64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            model_version: String::new(),
            api_key: String::new(),
            detect_base_url: "https://detect.roboflow.com".to_string(),
            confidence_threshold: 0.5,
            // Confidence assigned to classification-style responses that
            // carry bare labels with no score.
            fallback_confidence: 0.9,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("ROBOFLOW"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_credentials_empty() {
        let settings = Settings::default();
        assert!(settings.model_name.is_empty());
        assert!(settings.model_version.is_empty());
        assert!(settings.api_key.is_empty());
    }

    #[test]
    fn defaults_match_documented_tuning() {
        let settings = Settings::default();
        assert_eq!(settings.detect_base_url, "https://detect.roboflow.com");
        assert_eq!(settings.confidence_threshold, 0.5);
        assert_eq!(settings.fallback_confidence, 0.9);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn overrides_layer_on_top_of_defaults() {
        let settings: Settings = Config::builder()
            .set_override("model_name", "waste-detection").unwrap()
            .set_override("confidence_threshold", 0.75).unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.model_name, "waste-detection");
        assert_eq!(settings.confidence_threshold, 0.75);
        assert_eq!(settings.fallback_confidence, 0.9);
    }
}
