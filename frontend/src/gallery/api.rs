use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ErrorResponse, MergedVideo, VideosResponse};
use gloo_net::http::Request;

pub async fn fetch_videos() -> Result<Vec<MergedVideo>, String> {
    let url = format!("{}/api/youtube-videos", &*BACKEND_URL);

    let result = match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                response
                    .json::<VideosResponse>()
                    .await
                    .map(|body| body.videos)
                    .map_err(|e| format!("Failed to parse videos: {e}"))
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                Err(describe_failure(status, &text))
            }
        }
        Err(e) => Err(format!("Failed to connect to backend: {e}")),
    };

    if let Err(error) = &result {
        web_sys::console::error_1(&error.clone().into());
    }
    result
}

/// Turns a non-2xx proxy response into the message shown above the gallery.
pub fn describe_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => format!("Failed to load videos: {}", error_response.error),
        Err(_) if body.trim().is_empty() => format!("Failed to load videos: HTTP {status}"),
        Err(_) => format!("Failed to load videos: HTTP {status} - {}", body.trim()),
    }
}
