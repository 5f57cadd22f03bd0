use crate::models::VideoDetails;

pub fn format_iso8601_date(iso_date: &str) -> String {
    format_iso8601(iso_date, "%Y-%m-%d")
}

pub fn format_iso8601_datetime(iso_date: &str) -> String {
    format_iso8601(iso_date, "%Y-%m-%d %H:%M")
}

fn format_iso8601(iso_date: &str, pattern: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format(pattern).to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_duration(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Label/value pairs for the metric cards, in display order.
pub fn metric_cards(details: &VideoDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Views", format_number(details.views)),
        ("Comments", format_number(details.comment_count)),
        ("Likes", format_number(details.likes)),
        ("Published", format_iso8601_date(&details.published_at)),
        ("Duration", format_duration(details.duration_seconds)),
    ]
}

/// Rows of the summary table.
pub fn summary_rows(details: &VideoDetails) -> Vec<(&'static str, String)> {
    vec![
        ("Video title", details.title.clone()),
        ("Channel", details.channel_name.clone()),
        ("Published", format_iso8601_datetime(&details.published_at)),
        ("Views", format_number(details.views)),
        ("Comments", format_number(details.comment_count)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> VideoDetails {
        VideoDetails {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            channel_name: "Rick Astley".to_string(),
            published_at: "2009-10-25T06:57:33Z".to_string(),
            duration: "PT3M33S".to_string(),
            duration_seconds: 213,
            views: 1_500_000_000,
            likes: 17_000_000,
            comment_count: 2_300_000,
            ..Default::default()
        }
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(100_000), "100,000");
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_iso8601_date("2009-10-25T06:57:33Z"), "2009-10-25");
        assert_eq!(
            format_iso8601_datetime("2009-10-25T06:57:33Z"),
            "2009-10-25 06:57"
        );
        assert_eq!(format_iso8601_date("yesterday"), "yesterday");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(213), "03:33");
        assert_eq!(format_duration(3723), "01:02:03");
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(-5), "00:00");
    }

    #[test]
    fn metric_cards_show_zero_for_missing_views() {
        let details = VideoDetails {
            views: 0,
            ..details()
        };
        let cards = metric_cards(&details);
        assert_eq!(cards[0], ("Views", "0".to_string()));
        assert_eq!(cards[3], ("Published", "2009-10-25".to_string()));
    }

    #[test]
    fn summary_table_rows() {
        assert_eq!(
            summary_rows(&details()),
            vec![
                ("Video title", "Never Gonna Give You Up".to_string()),
                ("Channel", "Rick Astley".to_string()),
                ("Published", "2009-10-25 06:57".to_string()),
                ("Views", "1,500,000,000".to_string()),
                ("Comments", "2,300,000".to_string()),
            ]
        );
    }
}
