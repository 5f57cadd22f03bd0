use crate::env_variable_utils::BACKEND_URL;
use crate::models::{CredentialStatus, ErrorResponse, VideoDetails};
use gloo_net::http::Request;
use yew::prelude::*;

pub const API_KEY_HEADER: &str = "X-YouTube-Api-Key";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Loaded(VideoDetails),
    NotFound(String),
    Failed(String),
}

impl AnalysisState {
    /// Heading shown above a failure message; `None` outside the failure states.
    pub fn failure_heading(&self) -> Option<&'static str> {
        match self {
            AnalysisState::NotFound(_) => Some("🔍 Video not found"),
            AnalysisState::Failed(_) => Some("⚠️ Something went wrong"),
            _ => None,
        }
    }
}

pub async fn load_credential_status() -> Result<CredentialStatus, String> {
    let url = format!("{}/credentials", &*BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<CredentialStatus>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn analyze_video(url: String, api_key: String, analysis: UseStateHandle<AnalysisState>) {
    let request_url = format!(
        "{}/video/analyze?url={}",
        &*BACKEND_URL,
        urlencoding::encode(url.trim())
    );

    let mut request = Request::get(&request_url);
    if !api_key.trim().is_empty() {
        request = request.header(API_KEY_HEADER, api_key.trim());
    }

    let next_state = match request.send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<VideoDetails>().await {
                    Ok(details) => AnalysisState::Loaded(details),
                    Err(e) => AnalysisState::Failed(format!("Failed to parse response: {e}")),
                }
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                state_from_error(status, &text)
            }
        }
        Err(e) => AnalysisState::Failed(format!("Failed to connect to backend: {e}")),
    };

    if let AnalysisState::NotFound(msg) | AnalysisState::Failed(msg) = &next_state {
        web_sys::console::error_1(&msg.clone().into());
    }

    analysis.set(next_state);
}

/// Maps a failed backend response onto what the page shows.
pub fn state_from_error(status: u16, body: &str) -> AnalysisState {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) if error_response.error == "video_not_found" => {
            AnalysisState::NotFound(error_response.message)
        }
        Ok(error_response) => AnalysisState::Failed(error_response.message),
        Err(_) if status == 404 => {
            AnalysisState::NotFound("Could not load video details. Check the video ID.".to_string())
        }
        Err(_) if body.trim().is_empty() => {
            AnalysisState::Failed(format!("Request failed with status: {status}"))
        }
        Err(_) => AnalysisState::Failed(format!("Request failed ({status}): {body}")),
    }
}
