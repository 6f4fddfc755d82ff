//! Vimeo

use crate::provider::{Pattern, Provider};
use once_cell::sync::Lazy;

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::embed(r"^(?:https?://)?player\.vimeo\.com/video/(\d+)"),
        Pattern::page(r"^(?:https?://)?(?:www\.)?vimeo\.com/(?:channels/[\w-]+/)?(\d+)"),
    ]
});

#[derive(Debug, Default, Clone, Copy)]
pub struct VimeoProvider;

impl Provider for VimeoProvider {
    fn name(&self) -> &str {
        "vimeo"
    }

    fn description(&self) -> &str {
        "Vimeo videos"
    }

    fn patterns(&self) -> &[Pattern] {
        PATTERNS.as_slice()
    }

    fn embed_template(&self, id: &str) -> String {
        format!("https://player.vimeo.com/video/{id}")
    }
}
