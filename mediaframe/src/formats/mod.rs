//! Format adapters
//!
//! Each adapter maps a concrete markup language onto the structure model in
//! [`crate::structure`].

pub mod html;

pub use html::{extract_embeds, normalize_embeds, render_embed_html, NormalizeOptions};
