//! Helpers for constructing URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/club` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/club` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Ask the image CDN for a `width`-pixel rendition of `url`.
///
/// Only the `w` query parameter is touched; URLs without a query string get
/// one appended.
#[must_use]
pub fn sized_image_url(url: &str, width: u32) -> String {
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    let mut params: Vec<String> = query
        .split('&')
        .filter(|p| !p.is_empty() && !p.starts_with("w="))
        .map(str::to_string)
        .collect();
    params.push(format!("w={width}"));
    format!("{base}?{}", params.join("&"))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, router_base, sized_image_url};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/styles.css"), "/static/styles.css");
        assert_eq!(asset_path("/static/styles.css"), "/static/styles.css");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("static/styles.css", "/club"),
            "/club/static/styles.css"
        );
        assert_eq!(
            super::asset_path_with_base("/static/styles.css", "/club/"),
            "/club/static/styles.css"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/club/"),
            Some(String::from("/club"))
        );
    }

    #[test]
    fn sized_image_url_replaces_width_only() {
        assert_eq!(
            sized_image_url("https://img.test/a.jpg?auto=format&fit=crop&w=800&q=80", 400),
            "https://img.test/a.jpg?auto=format&fit=crop&q=80&w=400"
        );
        assert_eq!(sized_image_url("https://img.test/a.jpg", 120), "https://img.test/a.jpg?w=120");
    }
}
