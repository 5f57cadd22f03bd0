use crate::errors::AnalyzeError;
use crate::models::{ApiErrorResponse, VideoItem, VideoListResponse};
use anyhow::Result;
use log::{debug, error};
use reqwest::Client;
use url::Url;

/// Descriptive info, statistics and content details.
pub const VIDEO_PARTS: &str = "snippet,statistics,contentDetails";

const CREDENTIAL_REASONS: &[&str] = &[
    "keyInvalid",
    "keyExpired",
    "ipRefererBlocked",
    "accessNotConfigured",
];

#[rocket::async_trait]
pub trait VideoLookup: Send + Sync {
    /// Returns the first item for `video_id`, or `None` when the API knows no such video.
    async fn fetch_video(
        &self,
        api_key: &str,
        video_id: &str,
    ) -> Result<Option<VideoItem>, AnalyzeError>;
}

pub struct YoutubeClient {
    client: Client,
    base_url: Url,
}

impl YoutubeClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow::anyhow!(
                "YouTube API base URL cannot be a base: {base_url}"
            ));
        }

        Ok(YoutubeClient {
            client: Client::new(),
            base_url,
        })
    }

    fn videos_url(&self, api_key: &str, video_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("videos");
        }
        url.query_pairs_mut()
            .append_pair("part", VIDEO_PARTS)
            .append_pair("id", video_id)
            .append_pair("key", api_key);
        url
    }
}

#[rocket::async_trait]
impl VideoLookup for YoutubeClient {
    async fn fetch_video(
        &self,
        api_key: &str,
        video_id: &str,
    ) -> Result<Option<VideoItem>, AnalyzeError> {
        debug!("Requesting {VIDEO_PARTS} for video ID: {video_id}");

        let response = self
            .client
            .get(self.videos_url(api_key, video_id))
            .send()
            .await
            .map_err(|e| AnalyzeError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let api_error = classify_api_error(status.as_u16(), &body);
            error!("YouTube API request for video ID {video_id} failed: {api_error}");
            return Err(api_error);
        }

        let list = response
            .json::<VideoListResponse>()
            .await
            .map_err(|e| AnalyzeError::Transport(e.without_url()))?;

        Ok(list.items.into_iter().next())
    }
}

/// Turns a non-success API response into the matching failure class.
pub fn classify_api_error(status: u16, body: &str) -> AnalyzeError {
    let Ok(ApiErrorResponse { error }) = serde_json::from_str::<ApiErrorResponse>(body) else {
        return AnalyzeError::Api {
            status,
            message: if body.trim().is_empty() {
                "empty response body".to_string()
            } else {
                body.trim().to_string()
            },
        };
    };

    let credential_failure = error
        .errors
        .iter()
        .any(|detail| CREDENTIAL_REASONS.contains(&detail.reason.as_str()))
        || (status == 400 && error.message.contains("API key not valid"));

    if credential_failure {
        AnalyzeError::InvalidApiKey(error.message)
    } else {
        AnalyzeError::Api {
            status: if error.code != 0 { error.code } else { status },
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Local stand-in for the Data API serving canned `/videos` bodies.
    mod mock_api {
        use rocket::config::LogLevel;
        use rocket::fairing::AdHoc;
        use rocket::http::Status;
        use rocket::response::content::RawJson;
        use rocket::tokio::sync::oneshot;
        use std::net::{Ipv4Addr, TcpListener};

        #[get("/videos?<id>&<key>")]
        fn videos(id: &str, key: &str) -> (Status, RawJson<String>) {
            if key == "bad-key" {
                let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[{"reason":"keyInvalid"}]}}"#;
                return (Status::BadRequest, RawJson(body.to_string()));
            }
            if id == "missing" {
                return (Status::Ok, RawJson(r#"{"kind":"youtube#videoListResponse","items":[]}"#.to_string()));
            }

            let body = serde_json::json!({
                "kind": "youtube#videoListResponse",
                "items": [
                    {
                        "id": id,
                        "snippet": { "title": "First", "channelTitle": "Channel" },
                        "statistics": { "viewCount": "42" },
                        "contentDetails": { "duration": "PT1M" }
                    },
                    { "id": "other", "snippet": { "title": "Second" } }
                ]
            });
            (Status::Ok, RawJson(body.to_string()))
        }

        /// Starts the server and returns its base URL once it accepts requests.
        pub async fn serve() -> String {
            let port = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
                .and_then(|listener| listener.local_addr())
                .expect("free local port")
                .port();

            let config = rocket::Config {
                address: Ipv4Addr::LOCALHOST.into(),
                port,
                log_level: LogLevel::Off,
                ..rocket::Config::debug_default()
            };

            let (ready_tx, ready_rx) = oneshot::channel();
            let server = rocket::custom(config)
                .mount("/youtube/v3", routes![videos])
                .attach(AdHoc::on_liftoff("Ready signal", move |_| {
                    Box::pin(async move {
                        let _ = ready_tx.send(());
                    })
                }));

            rocket::tokio::spawn(server.launch());
            ready_rx.await.expect("mock API started");

            format!("http://127.0.0.1:{port}/youtube/v3")
        }
    }

    #[rocket::async_test]
    async fn fetch_returns_first_item() {
        let client = YoutubeClient::new(&mock_api::serve().await).unwrap();

        let item = client
            .fetch_video("good-key", "abc")
            .await
            .unwrap()
            .expect("first item");

        assert_eq!(item.id, "abc");
        assert_eq!(item.snippet.title, "First");
        assert_eq!(item.statistics.view_count.as_deref(), Some("42"));
        assert_eq!(item.content_details.duration, "PT1M");
    }

    #[rocket::async_test]
    async fn fetch_returns_none_for_empty_items() {
        let client = YoutubeClient::new(&mock_api::serve().await).unwrap();

        let result = client.fetch_video("good-key", "missing").await;

        assert!(matches!(result, Ok(None)));
    }

    #[rocket::async_test]
    async fn fetch_reports_rejected_key() {
        let client = YoutubeClient::new(&mock_api::serve().await).unwrap();

        let result = client.fetch_video("bad-key", "abc").await;

        assert!(matches!(result, Err(AnalyzeError::InvalidApiKey(_))));
    }

    #[test]
    fn builds_videos_request_url() {
        let client = YoutubeClient::new("https://www.googleapis.com/youtube/v3").unwrap();
        let url = client.videos_url("secret", "dQw4w9WgXcQ");

        assert_eq!(url.path(), "/youtube/v3/videos");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("part".to_string(), VIDEO_PARTS.to_string()),
                ("id".to_string(), "dQw4w9WgXcQ".to_string()),
                ("key".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let client = YoutubeClient::new("http://localhost:9999/v3/").unwrap();
        assert_eq!(client.videos_url("k", "id").path(), "/v3/videos");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(YoutubeClient::new("not a url").is_err());
        assert!(YoutubeClient::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn invalid_key_is_a_credential_failure() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{ "message": "API key not valid.", "domain": "global", "reason": "badRequest" }]
            }
        }"#;
        assert!(matches!(
            classify_api_error(400, body),
            AnalyzeError::InvalidApiKey(message) if message.starts_with("API key not valid")
        ));

        let expired = r#"{"error":{"code":400,"message":"API key expired.","errors":[{"reason":"keyExpired"}]}}"#;
        assert!(matches!(
            classify_api_error(400, expired),
            AnalyzeError::InvalidApiKey(_)
        ));
    }

    #[test]
    fn other_failures_are_api_errors() {
        let quota = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota.","errors":[{"reason":"quotaExceeded"}]}}"#;
        match classify_api_error(403, quota) {
            AnalyzeError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("exceeded your quota"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match classify_api_error(503, "  ") {
            AnalyzeError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "empty response body");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
