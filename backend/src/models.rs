use crate::utils::{parse_count, parse_iso8601_duration_to_seconds};
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::io::Cursor;

/// Credential resolved for a single request, if any.
#[derive(Debug)]
pub struct ApiKey(pub Option<String>);

#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub server_key_configured: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_id: String,
    pub published_at: String, // ISO 8601
    pub duration: String,     // ISO 8601
    pub duration_seconds: i64,
    pub views: u64,
    pub likes: u64,
    pub comment_count: u64,
    pub thumbnail_url: String,
}

impl From<VideoItem> for VideoDetails {
    fn from(item: VideoItem) -> Self {
        let thumbnail_url = item.snippet.thumbnails.best_url().unwrap_or_default();

        VideoDetails {
            duration_seconds: parse_iso8601_duration_to_seconds(&item.content_details.duration),
            views: parse_count(item.statistics.view_count.as_deref()),
            likes: parse_count(item.statistics.like_count.as_deref()),
            comment_count: parse_count(item.statistics.comment_count.as_deref()),
            video_id: item.id,
            title: item.snippet.title,
            channel_name: item.snippet.channel_title,
            channel_id: item.snippet.channel_id,
            published_at: item.snippet.published_at,
            duration: item.content_details.duration,
            thumbnail_url,
        }
    }
}

// YouTube Data API v3 wire types.
// Documentation: https://developers.google.com/youtube/v3/docs/videos

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: String,
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest of the three standard resolutions that is present.
    pub fn best_url(&self) -> Option<String> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|thumbnail| thumbnail.url.clone())
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

// The API encodes counts as strings and omits them when hidden by the uploader.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentDetails {
    pub duration: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip)]
    pub status: Status,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
