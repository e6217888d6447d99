use crate::services::youtube::YouTubeClient;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Upper bound the search endpoint accepts for `maxResults`.
pub const MAX_SEARCH_RESULTS: u32 = 50;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

lazy_static! {
    pub static ref YOUTUBE_API_KEY: Option<String> = non_empty_var("YOUTUBE_API_KEY");
    pub static ref YOUTUBE_CHANNEL_ID: Option<String> = non_empty_var("YOUTUBE_CHANNEL_ID");
    pub static ref YOUTUBE_API_BASE_URL: String =
        env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    pub static ref YOUTUBE_MAX_RESULTS: u32 = env::var("YOUTUBE_MAX_RESULTS")
        .unwrap_or_else(|_| MAX_SEARCH_RESULTS.to_string())
        .parse::<u32>()
        .unwrap_or(MAX_SEARCH_RESULTS)
        .clamp(1, MAX_SEARCH_RESULTS);
    pub static ref YOUTUBE_TIMEOUT_SECS: u64 = env::var("YOUTUBE_TIMEOUT_SECS")
        .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
        .parse::<u64>()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Everything the feed fetcher needs to reach the video platform.
///
/// Credentials stay optional here: a missing key or channel id only shows up
/// as a failed upstream call when the feed is requested.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_key: Option<String>,
    pub channel_id: Option<String>,
    pub api_base_url: Url,
    pub max_results: u32,
    pub timeout: Duration,
}

impl FeedConfig {
    pub fn new(api_key: Option<String>, channel_id: Option<String>) -> Self {
        Self {
            api_key,
            channel_id,
            api_base_url: parse_base_url(DEFAULT_API_BASE_URL)
                .expect("default YouTube API base URL is valid"),
            max_results: MAX_SEARCH_RESULTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(YOUTUBE_API_KEY.clone(), YOUTUBE_CHANNEL_ID.clone());
        config.api_base_url = parse_base_url(&YOUTUBE_API_BASE_URL)?;
        config.max_results = *YOUTUBE_MAX_RESULTS;
        config.timeout = Duration::from_secs(*YOUTUBE_TIMEOUT_SECS);
        Ok(config)
    }
}

/// Parses the API root, forcing a trailing slash so endpoint names join
/// underneath it instead of replacing the last path segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).with_context(|| format!("Invalid YouTube API base URL: {raw}"))
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting video gallery backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state() -> Result<AppState> {
    let config = FeedConfig::from_env()?;

    if config.api_key.is_none() {
        warn!("YOUTUBE_API_KEY is not set; video requests will fail.");
    }
    if config.channel_id.is_none() {
        warn!("YOUTUBE_CHANNEL_ID is not set; video requests will fail.");
    }
    info!(
        "Using YouTube API at {} (max {} results, {}s timeout)",
        config.api_base_url,
        config.max_results,
        config.timeout.as_secs()
    );

    let platform = YouTubeClient::new(&config)?;

    Ok(AppState {
        config,
        platform: Box::new(platform),
    })
}

pub fn create_cors(origin: &str) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[origin]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
