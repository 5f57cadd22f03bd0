use crate::errors::AnalyzeError;
use crate::models::VideoDetails;
use crate::services::youtube_service::VideoLookup;
use crate::utils::extract_youtube_video_id;
use log::{info, warn};

/// Runs the whole analysis for one submitted URL: credential check, ID
/// extraction, then a single lookup. Each step stops the flow on failure.
pub async fn analyze_video_url(
    lookup: &dyn VideoLookup,
    api_key: Option<&str>,
    url: &str,
) -> Result<VideoDetails, AnalyzeError> {
    let api_key = api_key.ok_or(AnalyzeError::MissingApiKey)?;

    let video_id = extract_youtube_video_id(url).ok_or_else(|| {
        warn!("Rejected URL without a video ID: {url}");
        AnalyzeError::InvalidUrl(url.trim().to_string())
    })?;

    fetch_video_details(lookup, api_key, &video_id).await
}

pub async fn fetch_video_details(
    lookup: &dyn VideoLookup,
    api_key: &str,
    video_id: &str,
) -> Result<VideoDetails, AnalyzeError> {
    match lookup.fetch_video(api_key, video_id).await? {
        Some(item) => {
            let mut details = VideoDetails::from(item);
            if details.video_id.is_empty() {
                details.video_id = video_id.to_string();
            }
            info!(
                "Fetched YT-Video: {}\nChannel: {} -> {}, Published: {}\nDuration: {}, Views: {}, Likes: {}, Comments: {}",
                details.title,
                details.channel_name,
                details.channel_id,
                details.published_at,
                details.duration,
                details.views,
                details.likes,
                details.comment_count,
            );
            Ok(details)
        }
        None => {
            warn!("No video found for ID: {video_id}");
            Err(AnalyzeError::VideoNotFound(video_id.to_string()))
        }
    }
}
