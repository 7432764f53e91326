use url::Url;

/// Check whether a hostname belongs to YouTube
pub fn is_youtube_host(host: &str) -> bool {
    let h = host.to_ascii_lowercase();
    h == "youtube.com"
        || h == "youtu.be"
        || h == "youtube-nocookie.com"
        || h.ends_with(".youtube.com")
        || h.ends_with(".youtube-nocookie.com")
}

/// Extract a YouTube video ID from a URL or a bare ID.
///
/// Accepts `youtube.com/watch?v=<id>`, `youtu.be/<id>`, `shorts/`, `embed/`,
/// `live/` and `v/` paths, as well as a bare 11-character video ID. Returns
/// `None` when no ID can be found; the provider remains the source of truth
/// for whether an extracted ID actually exists.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if input.len() == 11
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Some(input.to_string());
    }

    let parsed = Url::parse(input).ok()?;
    let host = parsed.host_str()?;
    if !is_youtube_host(host) {
        return None;
    }

    // youtu.be/<id>
    if host.eq_ignore_ascii_case("youtu.be") {
        let seg = parsed.path_segments()?.next()?.trim();
        if !seg.is_empty() {
            return Some(seg.to_string());
        }
        return None;
    }

    // youtube.com/watch?v=<id>
    if parsed.path().starts_with("/watch") {
        for (key, value) in parsed.query_pairs() {
            if key == "v" {
                let id = value.trim().to_string();
                if !id.is_empty() {
                    return Some(id);
                }
            }
        }
        return None;
    }

    // youtube.com/shorts/<id>, /embed/<id>, /live/<id>, /v/<id>
    let mut segments = parsed.path_segments()?;
    let first = segments.next().unwrap_or("");
    let second = segments.next().unwrap_or("").trim();
    if matches!(first, "shorts" | "embed" | "live" | "v") && !second.is_empty() {
        return Some(second.to_string());
    }

    None
}

/// Parse a comma-separated language preference list (e.g. "en,en-US")
pub fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect()
}
