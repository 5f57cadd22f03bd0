use crate::models::CredentialStatus;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/")]
pub fn index() -> &'static str {
    "YouTube Video Analyzer backend"
}

/// Lets the UI decide whether it has to ask for a key before analyzing.
#[get("/credentials")]
pub fn credential_status(state: &State<AppState>) -> Json<CredentialStatus> {
    Json(CredentialStatus {
        server_key_configured: state.server_api_key.is_some(),
    })
}
