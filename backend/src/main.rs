#[macro_use]
extern crate rocket;

mod api;
mod config;
mod errors;
mod models;
mod services;
mod utils;

use crate::config::{create_app_state, create_cors, init_logger, load_environment};
use crate::services::youtube_service::VideoLookup;
use log::info;
use rocket::{Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub lookup: Arc<dyn VideoLookup>,
    pub server_api_key: Option<String>,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::index, api::credential_status])
        .mount(
            "/video",
            routes![api::analyze_video, api::get_video_details],
        )
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let state = create_app_state()?;
    let cors = create_cors()?;

    let _rocket = build_rocket(state).attach(cors).launch().await?;
    info!("Backend shut down.");

    Ok(())
}
