use crate::config::FeedConfig;
use crate::models::{MergedVideo, VideoDetail, VideoSummary};
use crate::services::youtube::VideoPlatform;
use anyhow::{Context, Result};
use log::info;

/// Fetches the channel's newest videos and enriches them with their details.
///
/// Any failure along the way fails the whole feed; nothing partial is
/// returned and nothing is retried.
pub async fn fetch_channel_videos(
    platform: &dyn VideoPlatform,
    config: &FeedConfig,
) -> Result<Vec<MergedVideo>> {
    let channel_id = config
        .channel_id
        .as_deref()
        .context("YOUTUBE_CHANNEL_ID is not configured")?;

    let summaries = platform
        .search_videos(channel_id, config.max_results)
        .await
        .context("YouTube search failed")?;
    info!(
        "Found {} videos for channel {channel_id}.",
        summaries.len()
    );

    if summaries.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = summaries.iter().map(|s| s.id.clone()).collect();
    let details = platform
        .video_details(&ids)
        .await
        .context("YouTube video details lookup failed")?;

    Ok(merge_videos(summaries, &details))
}

/// Joins every summary with the detail sharing its id.
///
/// Output order and length follow `summaries`. Repeated ids are not
/// deduplicated; each occurrence is joined on its own.
pub fn merge_videos(summaries: Vec<VideoSummary>, details: &[VideoDetail]) -> Vec<MergedVideo> {
    summaries
        .into_iter()
        .map(|summary| {
            let detail = details.iter().find(|d| d.id == summary.id);
            MergedVideo::new(summary, detail)
        })
        .collect()
}
