use crate::models::{VideoDetail, VideoSummary};
use crate::services::youtube::VideoPlatform;
use anyhow::{bail, Result};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// In-memory `VideoPlatform` recording the calls it receives.
#[derive(Default)]
pub struct FakePlatform {
    pub summaries: Vec<VideoSummary>,
    pub details: Vec<VideoDetail>,
    pub fail_search: bool,
    pub fail_details: bool,
    pub searched_channels: Mutex<Vec<(String, u32)>>,
    pub detail_requests: Mutex<Vec<Vec<String>>>,
}

impl FakePlatform {
    pub fn new(summaries: Vec<VideoSummary>, details: Vec<VideoDetail>) -> Self {
        Self {
            summaries,
            details,
            ..Self::default()
        }
    }
}

#[rocket::async_trait]
impl VideoPlatform for FakePlatform {
    async fn search_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoSummary>> {
        self.searched_channels
            .lock()
            .unwrap()
            .push((channel_id.to_string(), max_results));
        if self.fail_search {
            bail!("search endpoint unavailable");
        }
        Ok(self.summaries.clone())
    }

    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetail>> {
        self.detail_requests.lock().unwrap().push(ids.to_vec());
        if self.fail_details {
            bail!("videos endpoint unavailable");
        }
        Ok(self
            .details
            .iter()
            .filter(|detail| ids.contains(&detail.id))
            .cloned()
            .collect())
    }
}

pub fn summary(id: &str) -> VideoSummary {
    VideoSummary {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: format!("About {id}"),
        published_at: "2025-05-01T12:00:00Z".to_string(),
        thumbnail_url: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        tags: None,
    }
}

pub fn detail(id: &str, duration: &str, views: u64) -> VideoDetail {
    VideoDetail {
        id: id.to_string(),
        duration: Some(duration.to_string()),
        view_count: Some(views),
        like_count: Some(views / 10),
        comment_count: Some(views / 100),
        tags: None,
    }
}

/// Serves one canned `(status, body)` per connection on a local port, in
/// order, and records each request line it receives.
pub struct FakeUpstream {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let head = read_request_head(&mut stream);
                let request_line = head.lines().next().unwrap_or_default().to_string();
                recorded.lock().unwrap().push(request_line);

                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    if status == 200 { "OK" } else { "Error" },
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/youtube/v3"),
            requests,
        }
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(read) => head.extend_from_slice(&buffer[..read]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
