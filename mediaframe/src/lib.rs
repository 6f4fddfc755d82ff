//! Responsive iframe embeds: URL canonicalization and attribute synchronization
//!
//!     This crate is the core behind embedding third-party media (YouTube, Vimeo, Facebook,
//!     TikTok, Dailymotion or any page) as responsive iframes. It has two halves:
//!         - The URL canonicalizer rewrites share/watch/page URLs into the provider's
//!           embeddable form, and passes anything it does not recognize through untouched.
//!         - The attribute synchronizer keeps one logical embed entity consistent with its
//!           markup, in both directions: entity to structure (render) and structure to entity
//!           (parse).
//!
//!     This is a pure lib, that is, it powers mediaframe-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!     Nothing here blocks and the only shared state is read-only (the default provider
//!     registry and compiled regexes).
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── provider.rs             # Provider trait, URL patterns
//!     ├── registry.rs             # Ordered ProviderRegistry, canonicalize()
//!     ├── providers               # One file per media host
//!     ├── entity.rs               # EmbedEntity, sizing, ratio, sanitizers
//!     ├── structure
//!     │   ├── node.rs             # Framework-agnostic ElementNode
//!     │   ├── recognize.rs        # Shape recognizer (wrapped / plain iframe)
//!     │   ├── parse.rs            # Structure → entity
//!     │   └── render.rs           # Entity → structure
//!     ├── sync.rs                 # Change notification, side effects, apply_update()
//!     ├── commands.rs             # insert / replace_source
//!     ├── formats
//!     │   └── html                # html5ever adapter over the structure model
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
//!
//! Core Algorithms
//!
//!     Canonicalization walks the providers in registration order; the first pattern whose
//!     identifier capture is non-empty wins. Every pattern is anchored at the start of the
//!     URL and a provider's embed-form patterns come before its page patterns, so feeding a
//!     canonical URL back in returns it verbatim.
//!
//!     Sizing has exactly one authority at a time: in auto mode the ratio drives a
//!     padding-bottom percentage on the outer wrapper, in fixed mode width and height go on
//!     the frame. Switching modes, or changing any sizing value, recomputes the whole sizing
//!     presentation and mirrors the value as data-iframe-* metadata in a single batch of
//!     side effects, applied all-or-nothing.
//!
//!     Numbers are never errors: dimensions outside (0, 9999] become 560×315, malformed ratios
//!     become 16:9, and this happens once where data enters (parse, insert, update).
//!     The only refusal is a source that does not look like a URL.

pub mod commands;
pub mod entity;
pub mod error;
pub mod formats;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod structure;
pub mod sync;

pub use commands::{insert, insert_with, replace_source, InsertOptions};
pub use entity::{
    is_valid_source, sanitize_dimension, EmbedEntity, FrameAttributeKey, FrameAttributes, Ratio,
    SizingMode,
};
pub use error::{EmbedError, Result};
pub use provider::{Pattern, Provider, ProviderMatch, UrlForm};
pub use registry::ProviderRegistry;
pub use structure::{
    derive_view, parse_node, parse_plain_frame, parse_structure, recognize, render_structure,
    ElementNode, Shape,
};
pub use sync::{
    apply_update, AttributeChange, AttributeKey, AttributeValue, ChangeObserver, EmbedUpdate,
    SideEffects, ViewEffect, ViewSynchronizer,
};

/// Rewrite `url` into its canonical embeddable form using the built-in providers.
///
/// Total: unrecognized input is returned unchanged.
pub fn canonicalize(url: &str) -> String {
    ProviderRegistry::global().canonicalize(url)
}
