//! Configuration for the frontend application

/// Base URL the site is served from
/// - Local development (`trunk serve`): "/"
/// - GitHub Pages: "/eden/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/eden/";

/// Site name shown in the header, footer and share text.
pub const SITE_NAME: &str = "EDEN Newspaper";

/// Scroll offset after which the back-to-top button appears.
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 400.0;

/// Viewport width at or below which the mobile navigation is used.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
