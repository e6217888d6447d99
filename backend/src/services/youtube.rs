use crate::config::FeedConfig;
use crate::models::{VideoDetail, VideoSummary};
use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// Read access to a video platform's catalogue.
#[rocket::async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Newest-first videos published on `channel_id`, at most `max_results`.
    async fn search_videos(&self, channel_id: &str, max_results: u32)
        -> Result<Vec<VideoSummary>>;

    /// Duration and statistics for the given video ids.
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>>;
}

/// YouTube Data API v3 client.
// Documentation: https://developers.google.com/youtube/v3/docs
pub struct YouTubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl YouTubeClient {
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.clone(),
        })
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("YOUTUBE_API_KEY is not configured"))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self
            .base_url
            .join(endpoint)
            .with_context(|| format!("Invalid YouTube endpoint: {endpoint}"))?;

        // The key travels in the query string, so errors are stripped of the URL.
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| anyhow::Error::new(e.without_url()))
            .with_context(|| format!("Request to YouTube {endpoint} endpoint failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "YouTube {endpoint} endpoint returned HTTP {status}: {}",
                upstream_error_message(&body)
            );
        }

        response
            .json::<T>()
            .await
            .map_err(|e| anyhow::Error::new(e.without_url()))
            .with_context(|| format!("Malformed YouTube {endpoint} response"))
    }
}

#[rocket::async_trait]
impl VideoPlatform for YouTubeClient {
    async fn search_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoSummary>> {
        let api_key = self.api_key()?;
        let max_results = max_results.to_string();

        let response: SearchListResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("maxResults", max_results.as_str()),
                    ("order", "date"),
                    ("type", "video"),
                    ("key", api_key),
                ],
            )
            .await?;

        Ok(response.items.into_iter().map(VideoSummary::from).collect())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>> {
        let api_key = self.api_key()?;
        let ids = ids.join(",");

        let response: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "contentDetails,statistics,snippet"),
                    ("id", ids.as_str()),
                    ("key", api_key),
                ],
            )
            .await?;

        Ok(response.items.into_iter().map(VideoDetail::from).collect())
    }
}

/// Pulls `error.message` out of a YouTube error envelope, falling back to the
/// raw body.
fn upstream_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct YouTubeReason {
        message: String,
    }
    #[derive(Deserialize)]
    struct YouTubeError {
        error: YouTubeReason,
    }

    match serde_json::from_str::<YouTubeError>(body) {
        Ok(YouTubeError {
            error: YouTubeReason { message },
        }) => message,
        Err(_) if body.trim().is_empty() => "<empty body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

fn parse_count(raw: Option<String>) -> Option<u64> {
    raw.and_then(|count| count.parse().ok())
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    published_at: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    fn best_url(self) -> String {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|thumbnail| thumbnail.url)
            .unwrap_or_default()
    }
}

impl From<SearchItem> for VideoSummary {
    fn from(item: SearchItem) -> Self {
        let SearchItem { id, snippet } = item;
        VideoSummary {
            id: id.video_id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnail_url: snippet.thumbnails.best_url(),
            tags: snippet.tags,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default)]
    content_details: Option<ContentDetails>,
    #[serde(default)]
    statistics: Option<Statistics>,
    #[serde(default)]
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

// YouTube encodes counts as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl From<VideoItem> for VideoDetail {
    fn from(item: VideoItem) -> Self {
        let statistics = item.statistics.unwrap_or_default();
        VideoDetail {
            id: item.id,
            duration: item.content_details.and_then(|details| details.duration),
            view_count: parse_count(statistics.view_count),
            like_count: parse_count(statistics.like_count),
            comment_count: parse_count(statistics.comment_count),
            tags: item.snippet.and_then(|snippet| snippet.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_item_picks_best_thumbnail() {
        let response: SearchListResponse = serde_json::from_value(json!({
            "kind": "youtube#searchListResponse",
            "items": [{
                "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
                "snippet": {
                    "publishedAt": "2025-05-01T12:00:00Z",
                    "title": "Cold plunge basics",
                    "description": "How to start.",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg" },
                        "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg" }
                    }
                }
            }]
        }))
        .unwrap();

        let summaries: Vec<VideoSummary> =
            response.items.into_iter().map(VideoSummary::from).collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "dQw4w9WgXcQ");
        assert_eq!(
            summaries[0].thumbnail_url,
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
        );
        assert_eq!(summaries[0].tags, None);
    }

    #[test]
    fn search_item_without_video_id_is_malformed() {
        let parsed = serde_json::from_value::<SearchListResponse>(json!({
            "items": [{
                "id": { "kind": "youtube#channel", "channelId": "UC123" },
                "snippet": { "publishedAt": "2025-05-01T12:00:00Z", "title": "Channel" }
            }]
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn video_item_parses_string_counts() {
        let response: VideoListResponse = serde_json::from_value(json!({
            "items": [{
                "id": "abc",
                "contentDetails": { "duration": "PT1H2M3S" },
                "statistics": { "viewCount": "2300000", "likeCount": "1500", "commentCount": "n/a" },
                "snippet": { "title": "ignored", "tags": ["recovery", "sauna"] }
            }]
        }))
        .unwrap();

        let detail = VideoDetail::from(response.items.into_iter().next().unwrap());
        assert_eq!(detail.id, "abc");
        assert_eq!(detail.duration.as_deref(), Some("PT1H2M3S"));
        assert_eq!(detail.view_count, Some(2_300_000));
        assert_eq!(detail.like_count, Some(1500));
        assert_eq!(detail.comment_count, None);
        assert_eq!(
            detail.tags,
            Some(vec!["recovery".to_string(), "sauna".to_string()])
        );
    }

    #[test]
    fn video_item_without_statistics_has_no_counts() {
        let response: VideoListResponse =
            serde_json::from_value(json!({ "items": [{ "id": "abc" }] })).unwrap();
        let detail = VideoDetail::from(response.items.into_iter().next().unwrap());
        assert_eq!(detail, VideoDetail { id: "abc".to_string(), ..VideoDetail::default() });
    }

    #[test]
    fn error_message_prefers_youtube_envelope() {
        let body = r#"{"error":{"code":403,"message":"API key not valid."}}"#;
        assert_eq!(upstream_error_message(body), "API key not valid.");
        assert_eq!(upstream_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(upstream_error_message("  "), "<empty body>");
    }

    #[rocket::async_test]
    async fn missing_api_key_fails_before_any_request() {
        let client = YouTubeClient::new(&FeedConfig::new(None, Some("UC123".to_string()))).unwrap();
        let err = client.search_videos("UC123", 50).await.unwrap_err();
        assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    }
}
