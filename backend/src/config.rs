use crate::models::ApiKey;
use crate::services::youtube_service::YoutubeClient;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "X-YouTube-Api-Key";

lazy_static! {
    pub static ref YOUTUBE_API_KEY: Option<String> = env::var("YOUTUBE_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());
    pub static ref YOUTUBE_API_BASE_URL: String = env::var("YOUTUBE_API_BASE_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
    pub static ref LOG_LEVEL: LevelFilter = env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
}

pub fn init_logger() {
    Builder::new().filter_level(*LOG_LEVEL).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> Result<AppState> {
    let base_url = &*YOUTUBE_API_BASE_URL;
    info!("Using YouTube Data API at: {base_url}");

    let client = YoutubeClient::new(base_url)?;

    let server_api_key = YOUTUBE_API_KEY.clone();
    if server_api_key.is_some() {
        info!("Server-side YouTube API key configured.");
    } else {
        warn!("No YOUTUBE_API_KEY set; every request has to supply its own key.");
    }

    Ok(AppState {
        lookup: Arc::new(client),
        server_api_key,
    })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            API_KEY_HEADER,
            "Accept",
            "Content-Type",
        ]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

/// Resolves the credential for a request: a key sent by the client wins,
/// otherwise the server-configured key is used. A missing key is not a guard
/// failure; the analysis flow reports it so the response body stays JSON.
#[rocket::async_trait]
impl<'r> FromRequest<'r> for ApiKey {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let supplied = request
            .headers()
            .get_one(API_KEY_HEADER)
            .map(str::trim)
            .filter(|key| !key.is_empty());

        if let Some(key) = supplied {
            return Outcome::Success(ApiKey(Some(key.to_string())));
        }

        let configured = request
            .rocket()
            .state::<AppState>()
            .and_then(|state| state.server_api_key.clone());

        Outcome::Success(ApiKey(configured))
    }
}
