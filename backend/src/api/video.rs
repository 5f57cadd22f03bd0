use crate::errors::AnalyzeError;
use crate::models::{ApiKey, ErrorResponse, VideoDetails};
use crate::services::video_service;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/analyze?<url>")]
pub async fn analyze_video(
    url: Option<String>,
    api_key: ApiKey,
    state: &State<AppState>,
) -> Result<Json<VideoDetails>, ErrorResponse> {
    // Optional so a bare `/video/analyze` fails here instead of reaching `/<id>`
    let Some(url) = url else {
        return Err(AnalyzeError::InvalidUrl(String::new()).into());
    };
    info!("Analyzing URL: {url}");

    video_service::analyze_video_url(state.lookup.as_ref(), api_key.0.as_deref(), &url)
        .await
        .map(Json)
        .map_err(ErrorResponse::from)
}

#[get("/<id>")]
pub async fn get_video_details(
    id: &str,
    api_key: ApiKey,
    state: &State<AppState>,
) -> Result<Json<VideoDetails>, ErrorResponse> {
    let Some(key) = api_key.0.as_deref() else {
        return Err(AnalyzeError::MissingApiKey.into());
    };

    video_service::fetch_video_details(state.lookup.as_ref(), key, id)
        .await
        .map(Json)
        .map_err(ErrorResponse::from)
}
