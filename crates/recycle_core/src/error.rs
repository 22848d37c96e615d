use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between picking a file and holding a prediction.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not read image {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("image is {size} bytes, limit is {limit}")]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("could not decode image preview: {0}")]
    Preview(#[from] image::ImageError),

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("classification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classification service returned status {0}")]
    Status(u16),

    #[error("malformed classification response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Scan flow transition errors.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("a scan is already in progress")]
    ScanInProgress,

    #[error("current results must be cleared before starting a new scan")]
    ResultsPending,

    #[error("no scan is in progress")]
    NotScanning,

    #[error("scan worker stopped without an answer")]
    WorkerLost,

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl FlowError {
    /// Short text for the blocking alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            FlowError::Scan(ScanError::UnsupportedImage(_)) => {
                "This file type is not supported. Please choose a JPEG, PNG or WebP photo."
            }
            FlowError::Scan(ScanError::ImageTooLarge { .. }) => {
                "This photo is too large. Please choose a smaller image."
            }
            FlowError::ScanInProgress => "A scan is already running.",
            _ => "Failed to analyze image. Please try again.",
        }
    }
}
