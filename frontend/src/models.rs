use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_id: String,
    pub published_at: String,
    pub duration: String,
    pub duration_seconds: i64,
    pub views: u64,
    pub likes: u64,
    pub comment_count: u64,
    pub thumbnail_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CredentialStatus {
    pub server_key_configured: bool,
}
