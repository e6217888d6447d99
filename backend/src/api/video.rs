use crate::models::{ErrorResponse, VideosResponse};
use crate::services::video_service;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/youtube-videos")]
pub async fn youtube_videos(
    state: &State<AppState>,
) -> Result<Json<VideosResponse>, ErrorResponse> {
    match video_service::fetch_channel_videos(&*state.platform, &state.config).await {
        Ok(videos) => {
            info!("Serving {} channel videos.", videos.len());
            Ok(Json(VideosResponse { videos }))
        }
        Err(e) => {
            error!("Failed to fetch YouTube videos: {e:?}");
            Err(ErrorResponse::new("Failed to fetch videos"))
        }
    }
}
