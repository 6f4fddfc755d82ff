//! Facebook
//!
//! Facebook's video plugin needs the full source URL rather than an identifier, so
//! this provider wraps the whole original URL, percent-encoded, in the plugin's
//! `href` parameter. The captured identifier only decides whether a URL matches.

use crate::provider::{Pattern, Provider, ProviderMatch};
use once_cell::sync::Lazy;
use url::form_urlencoded;

const PLUGIN_ENDPOINT: &str = "https://www.facebook.com/plugins/video.php?href=";

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::embed(
            r"^(?:https?://)?(?:www\.)?facebook\.com/plugins/video\.php\?(?:[^#]*&)?href=([^&#\s]+)",
        ),
        Pattern::page(r"^(?:https?://)?(?:www\.|m\.|web\.)?facebook\.com/(?:[^?#\s]*/)?videos/(?:[^/?#\s]+/)?(\d+)"),
        Pattern::page(r"^(?:https?://)?fb\.watch/([\w-]+)"),
    ]
});

#[derive(Debug, Default, Clone, Copy)]
pub struct FacebookProvider;

impl Provider for FacebookProvider {
    fn name(&self) -> &str {
        "facebook"
    }

    fn description(&self) -> &str {
        "Facebook videos (wrapped in the video plugin)"
    }

    fn patterns(&self) -> &[Pattern] {
        PATTERNS.as_slice()
    }

    fn embed_template(&self, id: &str) -> String {
        format!("{PLUGIN_ENDPOINT}{}", encode_href(id))
    }

    fn embed_url(&self, found: &ProviderMatch<'_>) -> String {
        if found.is_embed_form() {
            found.url.to_string()
        } else {
            self.embed_template(found.url)
        }
    }
}

fn encode_href(url: &str) -> String {
    form_urlencoded::byte_serialize(url.as_bytes()).collect()
}
