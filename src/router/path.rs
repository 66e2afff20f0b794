/// Derive the routable path from a raw request target.
///
/// Strips the query string, removes the configured base path prefix and
/// trims surrounding slashes. The base path is a plain prefix, not a
/// pattern; it is normalized by [normalize_base] before use.
pub(crate) fn request_path(target: &str, base_path: &str) -> String {
    let path = match target.split_once('?') {
        Some((before, _)) => before,
        None => target,
    };
    let path = if base_path.is_empty() {
        path
    } else {
        path.strip_prefix(base_path).unwrap_or(path)
    };
    path.trim_matches('/').to_string()
}

/// Canonical form of a base path: empty, or `/`-prefixed with no trailing
/// slash, so it lines up with the start of any request target.
pub(crate) fn normalize_base(base_path: &str) -> String {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strips_query_string() {
        assert_eq!(request_path("/videos?foo=bar", ""), "videos");
        assert_eq!(request_path("/videos?", ""), "videos");
        assert_eq!(request_path("?foo=bar", ""), "");
    }

    #[test]
    fn trims_slashes() {
        assert_eq!(request_path("/videos/comedy/", ""), "videos/comedy");
        assert_eq!(request_path("videos/comedy", ""), "videos/comedy");
        assert_eq!(request_path("/", ""), "");
        assert_eq!(request_path("", ""), "");
    }

    #[test]
    fn strips_base_path() {
        assert_eq!(request_path("/tube/videos", "/tube"), "videos");
        assert_eq!(request_path("/tube/videos?p=1", "/tube"), "videos");
        assert_eq!(request_path("/tube", "/tube"), "");
        // Targets outside the base path pass through untouched.
        assert_eq!(request_path("/videos", "/tube"), "videos");
    }

    #[test]
    fn normalizes_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("tube"), "/tube");
        assert_eq!(normalize_base("/tube/"), "/tube");
    }
}
