//! Entity ↔ structure tests

mod render_parse;
mod sanitize;
mod sync;
