use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// One search hit: identifies a video and carries its descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub thumbnail_url: String,
    pub tags: Option<Vec<String>>,
}

/// Per-video data from the details endpoint. Hidden statistics stay `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoDetail {
    pub id: String,
    pub duration: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub published_at: String,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,
}

impl MergedVideo {
    pub fn new(summary: VideoSummary, detail: Option<&VideoDetail>) -> Self {
        let tags = summary
            .tags
            .or_else(|| detail.and_then(|d| d.tags.clone()));

        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            published_at: summary.published_at,
            thumbnail_url: summary.thumbnail_url,
            tags,
            duration: detail.and_then(|d| d.duration.clone()),
            view_count: detail.and_then(|d| d.view_count),
            like_count: detail.and_then(|d| d.like_count),
            comment_count: detail.and_then(|d| d.comment_count),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideosResponse {
    pub videos: Vec<MergedVideo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(Status::InternalServerError)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
