//! Provider registry for URL canonicalization
//!
//! This module provides an ordered registry of media providers. Unlike a lookup
//! table, order matters here: providers are consulted in registration order and
//! the first matching pattern wins.

use crate::provider::Provider;
use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_REGISTRY: Lazy<ProviderRegistry> = Lazy::new(ProviderRegistry::with_defaults);

/// Registry of media providers
///
/// # Examples
///
/// ```ignore
/// let registry = ProviderRegistry::with_defaults();
/// assert_eq!(
///     registry.canonicalize("https://youtu.be/dQw4w9WgXcQ"),
///     "https://www.youtube.com/embed/dQw4w9WgXcQ"
/// );
/// ```
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ProviderRegistry {
            providers: Vec::new(),
        }
    }

    /// The shared, read-only registry holding the built-in providers
    pub fn global() -> &'static ProviderRegistry {
        &DEFAULT_REGISTRY
    }

    /// Register a provider
    ///
    /// A provider with the same name is replaced in place and keeps its priority;
    /// otherwise the new provider is consulted after all existing ones.
    pub fn register<P: Provider + 'static>(&mut self, provider: P) {
        let boxed: Box<dyn Provider> = Box::new(provider);
        match self
            .providers
            .iter()
            .position(|existing| existing.name() == boxed.name())
        {
            Some(index) => self.providers[index] = boxed,
            None => self.providers.push(boxed),
        }
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Check if a provider exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// List provider names in priority order
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Find the provider that recognizes `url`, if any
    pub fn detect(&self, url: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.find_match(url).is_some())
            .map(|p| p.as_ref())
    }

    /// Rewrite `url` into its canonical embeddable form.
    ///
    /// Never fails: URLs no provider recognizes are returned unchanged.
    pub fn canonicalize(&self, url: &str) -> String {
        for provider in &self.providers {
            if let Some(found) = provider.find_match(url) {
                let canonical = provider.embed_url(&found);
                debug!(
                    provider = provider.name(),
                    id = found.id,
                    embed_form = found.is_embed_form(),
                    "canonicalized embed url"
                );
                return canonical;
            }
        }
        url.to_string()
    }

    /// Create a registry with default providers, in priority order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::providers::YouTubeProvider);
        registry.register(crate::providers::VimeoProvider);
        registry.register(crate::providers::FacebookProvider);
        registry.register(crate::providers::TikTokProvider);
        registry.register(crate::providers::DailymotionProvider);

        registry
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
