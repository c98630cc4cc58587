//! Local file name for a fetched artifact.

/// Used when the URL has no usable last path segment.
pub const FALLBACK_NAME: &str = "artifact.bin";

/// Last non-empty path segment of `url`, made safe for a local filesystem.
///
/// `https://repo.example/org/foo/1.0/foo-1.0.jar?x=1` → `foo-1.0.jar`.
pub fn local_file_name(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()?
                .filter(|s| !s.is_empty())
                .last()
                .map(sanitize)
        })
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn sanitize(segment: &str) -> String {
    let replaced: String = segment
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    replaced.trim_matches(|c| c == ' ' || c == '.').to_string()
}
