//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/portfolio` when served from
/// a subdirectory), root-anchored dataset paths are prefixed accordingly.
/// Absolute URLs (`https://…`) pass through untouched.
#[must_use]
pub fn asset_path(path: &str) -> String {
    asset_path_with_base(path, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/portfolio` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(path: &str, base: &str) -> String {
    if path.contains("://") || path.starts_with("data:") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = path.trim_start_matches('/');

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
    use super::{asset_path, router_base};

    #[test]
    fn dataset_paths_stay_root_anchored_without_base() {
        assert_eq!(
            asset_path("/img/personal/harbor_morning.webp"),
            "/img/personal/harbor_morning.webp"
        );
        assert_eq!(asset_path("video/fox_shrine.mp4"), "/video/fox_shrine.mp4");
    }

    #[test]
    fn dataset_paths_gain_public_base() {
        assert_eq!(
            super::asset_path_with_base("/img/others/process/full/fox.webp", "/portfolio/"),
            "/portfolio/img/others/process/full/fox.webp"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            super::asset_path_with_base("https://cdn.example.com/a.webp", "/portfolio"),
            "https://cdn.example.com/a.webp"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/portfolio/"),
            Some(String::from("/portfolio"))
        );
    }
}
