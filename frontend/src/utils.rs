use lazy_static::lazy_static;
use regex::Regex;

/// Shown when a video has no usable duration.
pub const DURATION_FALLBACK: &str = "00:00";

lazy_static! {
    static ref ISO8601_DURATION: Regex =
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("valid duration pattern");
}

/// Formats `PT#H#M#S` as `H:MM:SS`, or `M:SS` when there are no hours.
pub fn format_iso8601_duration(duration: Option<&str>) -> String {
    match duration.and_then(parse_iso8601_duration) {
        Some((0, minutes, seconds)) => format!("{minutes}:{seconds:02}"),
        Some((hours, minutes, seconds)) => format!("{hours}:{minutes:02}:{seconds:02}"),
        None => DURATION_FALLBACK.to_string(),
    }
}

fn parse_iso8601_duration(duration: &str) -> Option<(u64, u64, u64)> {
    let captures = ISO8601_DURATION.captures(duration)?;
    let component = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(value) => value.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some((component(1)?, component(2)?, component(3)?))
}

// Compact view/subscriber counts: 1.5K, 2.3M
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// `2025-05-01T12:00:00Z` -> `May 1, 2025`. Unparseable input is returned as is.
pub fn format_publish_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%B %-d, %Y").to_string()
    } else {
        iso_date.to_string()
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_with_hours() {
        assert_eq!(format_iso8601_duration(Some("PT1H2M3S")), "1:02:03");
        assert_eq!(format_iso8601_duration(Some("PT2H")), "2:00:00");
        assert_eq!(format_iso8601_duration(Some("PT10H5S")), "10:00:05");
    }

    #[test]
    fn duration_without_hours() {
        assert_eq!(format_iso8601_duration(Some("PT5M")), "5:00");
        assert_eq!(format_iso8601_duration(Some("PT4M13S")), "4:13");
        assert_eq!(format_iso8601_duration(Some("PT45S")), "0:45");
        assert_eq!(format_iso8601_duration(Some("PT0H12M7S")), "12:07");
    }

    #[test]
    fn duration_fallback() {
        assert_eq!(format_iso8601_duration(None), "00:00");
        assert_eq!(format_iso8601_duration(Some("")), "00:00");
        assert_eq!(format_iso8601_duration(Some("5 minutes")), "00:00");
        assert_eq!(format_iso8601_duration(Some("P1DT2H")), "00:00");
        assert_eq!(format_iso8601_duration(Some("PT1.5S")), "00:00");
        assert_eq!(format_iso8601_duration(Some("PT3S2M")), "00:00");
        assert_eq!(
            format_iso8601_duration(Some("PT99999999999999999999S")),
            "00:00"
        );
    }

    #[test]
    fn bare_pt_is_zero_length() {
        assert_eq!(format_iso8601_duration(Some("PT")), "0:00");
    }

    #[test]
    fn counts() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(2_300_000), "2.3M");
        assert_eq!(format_count(1_000_000), "1.0M");
    }

    #[test]
    fn publish_date() {
        assert_eq!(format_publish_date("2025-05-01T12:00:00Z"), "May 1, 2025");
        assert_eq!(format_publish_date("2024-12-31T23:59:59Z"), "December 31, 2024");
        assert_eq!(format_publish_date("yesterday"), "yesterday");
    }

    #[test]
    fn watch_link() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
