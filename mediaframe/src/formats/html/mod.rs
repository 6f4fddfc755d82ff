//! HTML adapter for embed structures
//!
//! This module plays the host editor's part for plain HTML documents: it finds
//! embeds in a document (wrapped structures and bare iframes), parses them into
//! entities, and writes them back in the canonical wrapped structure.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing and serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Malformed HTML is handled the way a browser would, so an embed pasted into a
//! paragraph is found wherever the tree builder puts it.
//!
//! # Mapping
//!
//! | Markup                                            | Entity                                   |
//! |---------------------------------------------------|------------------------------------------|
//! | `div.nvck-iframe > div.nvck-iframe-inner > iframe` | metadata from `data-iframe-*`            |
//! | bare `iframe`                                      | auto mode, ratio from width/height       |
//!
//! Bare iframes are always written back wrapped. Iframes without a usable `src`
//! are left alone.
//!
//! # Lossy Conversions
//!
//! - Attributes on the frame other than `src` and the pass-through set are dropped
//!   when an embed is rewritten.
//! - Content before the body (such as `head` elements in a full document) is not
//!   part of the normalized output.

mod parser;
mod serializer;

pub use parser::{element_from_handle, extract_embeds, parse_html};
pub use serializer::{
    handle_from_element, normalize_embeds, normalize_embeds_with, render_embed_html,
    NormalizeOptions,
};
