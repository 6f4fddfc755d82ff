//! Provider trait definition
//!
//! This module defines the core Provider trait that every media host implements.
//! A provider knows the URL shapes its media is shared under and how to build the
//! embeddable iframe source from an identifier captured out of one of them.

use regex::Regex;

/// Whether a pattern recognizes a share/page URL or an already-embeddable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlForm {
    /// Share, watch or page URL that must be rewritten
    Page,
    /// URL already in the provider's embeddable form
    Embed,
}

/// A single URL-shape matcher.
///
/// The regex must expose the media identifier as capture group 1.
#[derive(Debug)]
pub struct Pattern {
    pub regex: Regex,
    pub form: UrlForm,
}

impl Pattern {
    /// Pattern for a share/page URL
    pub fn page(regex: &str) -> Self {
        Self::compile(regex, UrlForm::Page)
    }

    /// Pattern for an already-embeddable URL
    pub fn embed(regex: &str) -> Self {
        Self::compile(regex, UrlForm::Embed)
    }

    fn compile(regex: &str, form: UrlForm) -> Self {
        let regex = Regex::new(regex).expect("Invalid provider regex pattern");
        Self { regex, form }
    }

    /// Try this pattern against a URL, requiring a non-empty identifier capture.
    pub fn captures<'u>(&self, url: &'u str) -> Option<ProviderMatch<'u>> {
        let caps = self.regex.captures(url)?;
        let id = caps.get(1)?.as_str();
        if id.is_empty() {
            return None;
        }
        let matched = caps.get(0)?.as_str();
        Some(ProviderMatch {
            url,
            matched,
            id,
            form: self.form,
        })
    }
}

/// A successful pattern match against a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderMatch<'u> {
    /// The full input URL
    pub url: &'u str,
    /// The part of the URL the pattern matched
    pub matched: &'u str,
    /// The captured media identifier
    pub id: &'u str,
    /// The form of the pattern that matched
    pub form: UrlForm,
}

impl ProviderMatch<'_> {
    /// True when the input was already in embeddable form
    pub fn is_embed_form(&self) -> bool {
        self.form == UrlForm::Embed
    }
}

/// Trait for media providers
///
/// Implementors list their URL patterns in priority order and build the canonical
/// embed URL for a match.
///
/// # Examples
///
/// ```ignore
/// struct MyProvider;
///
/// impl Provider for MyProvider {
///     fn name(&self) -> &str {
///         "my-provider"
///     }
///
///     fn patterns(&self) -> &[Pattern] {
///         &MY_PATTERNS
///     }
///
///     fn embed_template(&self, id: &str) -> String {
///         format!("https://media.example/embed/{id}")
///     }
/// }
/// ```
pub trait Provider: Send + Sync {
    /// The name of this provider (e.g., "youtube", "vimeo")
    fn name(&self) -> &str;

    /// Optional description of this provider
    fn description(&self) -> &str {
        ""
    }

    /// URL patterns, tried in order. Embed-form patterns should come first.
    fn patterns(&self) -> &[Pattern];

    /// The canonical embed URL for a bare identifier
    fn embed_template(&self, id: &str) -> String;

    /// Find the first pattern matching `url`
    fn find_match<'u>(&self, url: &'u str) -> Option<ProviderMatch<'u>> {
        self.patterns().iter().find_map(|pattern| pattern.captures(url))
    }

    /// Build the embed URL for a match.
    ///
    /// Already-embeddable input is returned verbatim so canonicalization is
    /// idempotent. Providers whose endpoint needs more than the identifier
    /// override this.
    fn embed_url(&self, found: &ProviderMatch<'_>) -> String {
        if found.is_embed_form() {
            found.url.to_string()
        } else {
            self.embed_template(found.id)
        }
    }
}
