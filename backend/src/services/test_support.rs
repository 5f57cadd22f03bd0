use crate::errors::AnalyzeError;
use crate::models::{Snippet, Statistics, Thumbnail, Thumbnails, VideoItem};
use crate::services::youtube_service::VideoLookup;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type Responder = Box<dyn Fn() -> Result<Option<VideoItem>, AnalyzeError> + Send + Sync>;

/// Stand-in for the YouTube API that records every lookup it receives.
pub struct FakeLookup {
    respond: Responder,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl FakeLookup {
    pub fn returning(item: Option<VideoItem>) -> Self {
        Self::with(Box::new(move || Ok(item.clone())))
    }

    pub fn failing(error: fn() -> AnalyzeError) -> Self {
        Self::with(Box::new(move || Err(error())))
    }

    fn with(respond: Responder) -> Self {
        FakeLookup {
            respond,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[rocket::async_trait]
impl VideoLookup for FakeLookup {
    async fn fetch_video(
        &self,
        api_key: &str,
        video_id: &str,
    ) -> Result<Option<VideoItem>, AnalyzeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((api_key.to_string(), video_id.to_string()));
        (self.respond)()
    }
}

pub fn sample_item(video_id: &str) -> VideoItem {
    VideoItem {
        id: video_id.to_string(),
        snippet: Snippet {
            title: "Sample video".to_string(),
            channel_id: "UC0000000000000000000000".to_string(),
            channel_title: "Sample channel".to_string(),
            published_at: "2024-03-05T14:07:00Z".to_string(),
            thumbnails: Thumbnails {
                high: Some(Thumbnail {
                    url: format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"),
                }),
                ..Default::default()
            },
        },
        statistics: Statistics {
            view_count: Some("1234567".to_string()),
            like_count: Some("8910".to_string()),
            comment_count: Some("112".to_string()),
        },
        content_details: Default::default(),
    }
}
