use serde::{Deserialize, Serialize};

/// A channel video as served by `GET /api/youtube-videos`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergedVideo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
}

impl MergedVideo {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideosResponse {
    pub videos: Vec<MergedVideo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
