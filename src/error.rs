use thiserror::Error;

// Main classification error type, one variant per pipeline exit.

#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("No file uploaded.")]
    MissingImage,
    #[error("Server configuration error: {0} is not set")]
    Configuration(&'static str),
    #[error("Upstream Error: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("No object detected or low confidence.")]
    Unclassifiable,
    #[error("Top prediction confidence {confidence:.2} is below threshold {threshold:.2}")]
    LowConfidence { confidence: f64, threshold: f64 },
}

// Upstream detection service error type
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Request to detection service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Detection service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode detection response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClassificationError {
    /// HTTP status the web layer should answer with for this error.
    /// An upstream non-2xx passes its own status through verbatim.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingImage | Self::Unclassifiable | Self::LowConfidence { .. } => 400,
            Self::Configuration(_) => 500,
            Self::Upstream(UpstreamError::Status { status, .. }) => *status,
            Self::Upstream(_) => 500,
        }
    }

    /// JSON error body. Input and prediction failures use the `msg` key,
    /// server-side failures the `error` key.
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::MissingImage | Self::Unclassifiable | Self::LowConfidence { .. } => {
                serde_json::json!({ "msg": self.to_string() })
            }
            Self::Configuration(_) | Self::Upstream(_) => {
                serde_json::json!({ "error": self.to_string() })
            }
        }
    }
}
