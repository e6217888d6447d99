#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;

use crate::config::{
    create_app_state, create_cors, init_logger, load_environment, FeedConfig, FRONTEND_ORIGIN,
};
use crate::services::youtube::VideoPlatform;
use rocket::{Build, Rocket};

pub struct AppState {
    pub config: FeedConfig,
    pub platform: Box<dyn VideoPlatform>,
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/api", routes![api::youtube_videos])
}

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let state = create_app_state().expect("Failed to create application state");
    let cors = create_cors(&FRONTEND_ORIGIN).expect("Failed to create CORS options");

    build_rocket(state).attach(cors)
}
