use crate::models::ErrorResponse;
use rocket::http::Status;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("No YouTube API key provided. Enter one in the sidebar.")]
    MissingApiKey,
    #[error("The YouTube API rejected the API key: {0}")]
    InvalidApiKey(String),
    #[error("Not a valid YouTube URL: {0}")]
    InvalidUrl(String),
    #[error("Could not load video details. Check the video ID: {0}")]
    VideoNotFound(String),
    #[error("YouTube API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to reach the YouTube API: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AnalyzeError {
    pub fn status(&self) -> Status {
        match self {
            AnalyzeError::MissingApiKey | AnalyzeError::InvalidApiKey(_) => Status::Unauthorized,
            AnalyzeError::InvalidUrl(_) => Status::BadRequest,
            AnalyzeError::VideoNotFound(_) => Status::NotFound,
            AnalyzeError::Api { .. } | AnalyzeError::Transport(_) => Status::BadGateway,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AnalyzeError::MissingApiKey => "missing_api_key",
            AnalyzeError::InvalidApiKey(_) => "invalid_api_key",
            AnalyzeError::InvalidUrl(_) => "invalid_url",
            AnalyzeError::VideoNotFound(_) => "video_not_found",
            AnalyzeError::Api { .. } => "api_error",
            AnalyzeError::Transport(_) => "transport_error",
        }
    }
}

impl From<AnalyzeError> for ErrorResponse {
    fn from(error: AnalyzeError) -> Self {
        ErrorResponse {
            error: error.code().to_string(),
            message: error.to_string(),
            status: error.status(),
        }
    }
}
