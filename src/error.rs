use thiserror::Error;

/// Failures of the video element. `Display` is what the viewer sees; the
/// technical detail only goes to the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("Video failed to load. Please check the URL.")]
    LoadFailed { detail: String },
    #[error("Failed to play video. Please try again.")]
    PlaybackRejected { detail: String },
}

impl MediaError {
    pub fn detail(&self) -> &str {
        match self {
            MediaError::LoadFailed { detail } | MediaError::PlaybackRejected { detail } => detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Submission was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page config defines no markers")]
    NoMarkers,
    #[error("region {0:?} is configured more than once")]
    DuplicateRegion(String),
    #[error("region {0:?} has no video source")]
    MissingVideo(String),
}
