//! Dailymotion

use crate::provider::{Pattern, Provider};
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::embed(r"^(?:https?://)?(?:www\.)?dailymotion\.com/embed/video/([A-Za-z0-9]+)"),
        Pattern::page(r"^(?:https?://)?(?:www\.)?dailymotion\.com/video/([A-Za-z0-9]+)"),
        Pattern::page(r"^(?:https?://)?dai\.ly/([A-Za-z0-9]+)"),
    ]
});

#[derive(Debug, Default, Clone, Copy)]
pub struct DailymotionProvider;

impl Provider for DailymotionProvider {
    fn name(&self) -> &str {
        "dailymotion"
    }

    fn description(&self) -> &str {
        "Dailymotion videos"
    }

    fn patterns(&self) -> &[Pattern] {
        PATTERNS.as_slice()
    }

    fn embed_template(&self, id: &str) -> String {
        format!("https://www.dailymotion.com/embed/video/{id}")
    }
}
