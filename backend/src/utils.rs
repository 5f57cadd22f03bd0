/// Pulls the video ID out of a YouTube link.
///
/// This is a plain substring match rather than a URL parse: `youtu.be/` links
/// yield everything after the last `/`, anything else containing `v=` yields
/// the text up to the next `&` (or a repeated `v=`).
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    let url = url.trim();

    let video_id = if url.contains("youtu.be/") {
        url.rsplit('/').next()
    } else if let Some((_, rest)) = url.split_once("v=") {
        rest.split("v=").next().and_then(|value| value.split('&').next())
    } else {
        None
    };

    video_id.filter(|id| !id.is_empty()).map(String::from)
}

/// Parse ISO8601 duration string (PT1H2M3S, P1DT2H) to total seconds
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> i64 {
    let Some(duration_part) = duration_str.strip_prefix('P') else {
        return 0;
    };

    let mut total_seconds = 0.0;
    let mut current_number = String::new();
    let mut in_time_part = false;

    for ch in duration_part.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            current_number.push(ch);
            continue;
        }
        if ch == 'T' {
            in_time_part = true;
        } else if let Ok(num) = current_number.parse::<f64>() {
            // Years and months have no fixed length and never occur for videos.
            let unit_seconds = match (ch, in_time_part) {
                ('W', false) => 604_800.0,
                ('D', false) => 86_400.0,
                ('H', true) => 3600.0,
                ('M', true) => 60.0,
                ('S', true) => 1.0,
                _ => 0.0,
            };
            total_seconds += num * unit_seconds;
        }
        current_number.clear();
    }

    total_seconds as i64
}

pub fn parse_count(count: Option<&str>) -> u64 {
    count.and_then(|c| c.trim().parse().ok()).unwrap_or(0)
}
