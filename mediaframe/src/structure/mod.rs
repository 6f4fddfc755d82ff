//! Embed structures: the element tree an entity renders to and is parsed from
//!
//! The persisted shape is three nested elements:
//!
//! ```text
//! div.nvck-iframe[.nvck-iframe-responsive]   data-iframe-{width,height,type,ratio}, style padding-bottom (auto)
//! └── div.nvck-iframe-inner
//!     └── iframe.nvck-iframe-element          src, pass-through attributes, width/height (fixed)
//! ```
//!
//! A bare `iframe` is also accepted on the parse side and is always rendered back
//! in the wrapped shape.

pub mod node;
pub mod parse;
pub mod recognize;
pub mod render;

pub use node::{Attributes, ElementNode};
pub use parse::{parse_node, parse_plain_frame, parse_structure};
pub use recognize::{find_frame_mut, recognize, Shape};
pub use render::{derive_view, render_structure, DerivedView, OuterView};

/// Class names and attribute keys of the persisted structure
pub mod markers {
    pub const OUTER_CLASS: &str = "nvck-iframe";
    pub const INNER_CLASS: &str = "nvck-iframe-inner";
    pub const FRAME_CLASS: &str = "nvck-iframe-element";
    pub const RESPONSIVE_CLASS: &str = "nvck-iframe-responsive";

    pub const DATA_WIDTH: &str = "data-iframe-width";
    pub const DATA_HEIGHT: &str = "data-iframe-height";
    pub const DATA_TYPE: &str = "data-iframe-type";
    pub const DATA_RATIO: &str = "data-iframe-ratio";

    pub const PADDING_BOTTOM: &str = "padding-bottom";
}
