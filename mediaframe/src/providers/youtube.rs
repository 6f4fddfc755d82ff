//! YouTube
//!
//! Accepts watch, short-link, shorts and embed URLs. Video identifiers are
//! always 11 characters from `[A-Za-z0-9_-]`.

use crate::provider::{Pattern, Provider};
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::embed(
            r"^(?:https?://)?(?:www\.|m\.)?youtube(?:-nocookie)?\.com/embed/([A-Za-z0-9_-]{11})",
        ),
        Pattern::page(
            r"^(?:https?://)?(?:www\.|m\.|music\.)?youtube\.com/watch\?(?:[^#]*&)?v=([A-Za-z0-9_-]{11})",
        ),
        Pattern::page(r"^(?:https?://)?(?:www\.|m\.)?youtube\.com/shorts/([A-Za-z0-9_-]{11})"),
        Pattern::page(r"^(?:https?://)?(?:www\.)?youtu\.be/([A-Za-z0-9_-]{11})"),
    ]
});

#[derive(Debug, Default, Clone, Copy)]
pub struct YouTubeProvider;

impl Provider for YouTubeProvider {
    fn name(&self) -> &str {
        "youtube"
    }

    fn description(&self) -> &str {
        "YouTube videos and shorts"
    }

    fn patterns(&self) -> &[Pattern] {
        PATTERNS.as_slice()
    }

    fn embed_template(&self, id: &str) -> String {
        format!("https://www.youtube.com/embed/{id}")
    }
}
