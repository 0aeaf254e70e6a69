/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/portfolio/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/portfolio/";

/// Height of the fixed navigation bar in pixels.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll distance after which the navigation bar turns opaque.
pub const NAV_SCROLLED_AFTER: f64 = 50.0;

/// Scroll distance after which the back-to-top button appears.
pub const SCROLL_TOP_AFTER: f64 = 400.0;

/// Resolve a media URL from the content file.
///
/// Absolute URLs pass through; relative paths are served from `BASE_URL`.
pub fn media_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
