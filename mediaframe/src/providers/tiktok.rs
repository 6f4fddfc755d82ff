//! TikTok

use crate::provider::{Pattern, Provider};
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::embed(r"^(?:https?://)?(?:www\.)?tiktok\.com/embed/(?:v2/)?(\d+)"),
        Pattern::page(r"^(?:https?://)?(?:www\.|m\.)?tiktok\.com/@[\w.-]+/video/(\d+)"),
    ]
});

#[derive(Debug, Default, Clone, Copy)]
pub struct TikTokProvider;

impl Provider for TikTokProvider {
    fn name(&self) -> &str {
        "tiktok"
    }

    fn description(&self) -> &str {
        "TikTok videos"
    }

    fn patterns(&self) -> &[Pattern] {
        PATTERNS.as_slice()
    }

    fn embed_template(&self, id: &str) -> String {
        format!("https://www.tiktok.com/embed/{id}")
    }
}
