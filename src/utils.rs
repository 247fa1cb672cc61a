//! Utility functions for identifiers, log formatting, and file system checks.
//!
//! This module provides helper functions used throughout the crate:
//! - Article id derivation from post URLs
//! - String truncation for logging
//! - File system validation for output directories

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Derive a stable article id from a post URL.
///
/// The id is the last two path segments joined with a dot, which for blog
/// posts is the blog name and the post number. Strings that do not parse as
/// a URL are split on `/` directly.
///
/// # Examples
///
/// ```
/// use blog_review_extract::utils::article_id;
///
/// assert_eq!(article_id("https://blog.naver.com/cafe_lover/223344"), "cafe_lover.223344");
/// ```
pub fn article_id(url: &str) -> String {
    let parsed = Url::parse(url);
    let segments: Vec<&str> = match &parsed {
        Ok(parsed) => parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default(),
        Err(_) => url.split('/').filter(|s| !s.is_empty()).collect(),
    };

    let start = segments.len().saturating_sub(2);
    segments[start..].join(".")
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` characters with an ellipsis and a byte
/// count indicator appended. Cuts always land on a character boundary, so
/// Hangul and other multi-byte text is safe.
///
/// # Examples
///
/// ```
/// use blog_review_extract::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;

    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_from_blog_url() {
        assert_eq!(article_id("https://blog.naver.com/user01/223344556"), "user01.223344556");
    }

    #[test]
    fn test_article_id_ignores_query_and_trailing_slash() {
        assert_eq!(article_id("https://blog.naver.com/user01/223344556/?from=search"), "user01.223344556");
    }

    #[test]
    fn test_article_id_short_paths() {
        assert_eq!(article_id("https://blog.naver.com/user01"), "user01");
        assert_eq!(article_id("https://blog.naver.com/"), "");
    }

    #[test]
    fn test_article_id_unparseable() {
        assert_eq!(article_id("user01/223344"), "user01.223344");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let result = truncate_for_log("맛집 리뷰입니다", 2);
        assert!(result.starts_with("맛집…"));
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let dir = std::env::temp_dir().join(format!("blog_review_extract_probe_{}", std::process::id()));
        let path = dir.join("nested");
        let path = path.to_str().unwrap();

        ensure_writable_dir(path).await.unwrap();
        assert!(std::path::Path::new(path).is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
