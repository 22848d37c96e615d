//! Client for the remote classification service.

use crate::config::ClientConfig;
use crate::error::ScanError;
use crate::payload::ImagePayload;
use crate::prediction::RawPrediction;
use reqwest::Url;
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;

const USER_AGENT: &str = concat!("RecycleScan/", env!("CARGO_PKG_VERSION"));

/// Multipart field the service expects the photo under.
pub const IMAGE_FIELD: &str = "image";

/// Turns an image into a prediction. Implemented over HTTP by [`HttpClassifier`].
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &ImagePayload) -> Result<RawPrediction, ScanError>;
}

/// Blocking HTTP client posting the image as multipart form data.
pub struct HttpClassifier {
    http: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpClassifier {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ScanError> {
        let endpoint = Url::parse(&cfg.endpoint)
            .map_err(|e| ScanError::Config(format!("endpoint {:?}: {e}", cfg.endpoint)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ScanError::Config(format!(
                "endpoint {:?} is not http(s)",
                cfg.endpoint
            )));
        }

        let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, image: &ImagePayload) -> Result<RawPrediction, ScanError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        tracing::debug!(
            endpoint = %self.endpoint,
            file = %image.file_name,
            bytes = image.len(),
            "sending classification request"
        );
        let response = self.http.post(self.endpoint.clone()).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("classification service answered {status} for {}", image.file_name);
            return Err(ScanError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        let prediction: RawPrediction = serde_json::from_slice(&body)?;
        tracing::info!(
            object = %prediction.detected_object,
            score = prediction.recyclability_score,
            "classification received"
        );
        Ok(prediction)
    }
}
