//! Structure → entity
//!
//! Both shapes follow the same rules for dimensions: each of width and height
//! falls back to its own default independently. Pass-through attributes present on
//! the frame win over configured defaults; absent ones take the default, if any.

use super::markers::{DATA_HEIGHT, DATA_RATIO, DATA_TYPE, DATA_WIDTH};
use super::node::{Attributes, ElementNode};
use super::recognize::{recognize, Shape};
use crate::entity::{
    is_valid_source, sanitize_dimension, EmbedEntity, FrameAttributes, Ratio, SizingMode,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use tracing::debug;

fn non_empty<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    attributes
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn entity_with_source(frame: &Attributes) -> Option<EmbedEntity> {
    let source = frame.get("src").map(String::as_str).unwrap_or_default();
    if !is_valid_source(source) {
        debug!(source, "embed structure ignored, frame has no usable src");
        return None;
    }
    EmbedEntity::new(source).ok()
}

/// Pass-through attributes written on the frame, before defaults are applied
fn explicit_frame_attributes(frame: &Attributes, allowfullscreen: Option<bool>) -> FrameAttributes {
    FrameAttributes {
        sandbox: non_empty(frame, "sandbox").map(str::to_string),
        allow: non_empty(frame, "allow").map(str::to_string),
        referrerpolicy: non_empty(frame, "referrerpolicy").map(str::to_string),
        allowfullscreen,
        frameborder: non_empty(frame, "frameborder").map(str::to_string),
    }
}

/// Build an entity from a wrapped structure's outer wrapper and frame attributes.
///
/// Returns `None` when the frame has no valid `src`.
pub fn parse_structure(
    outer: &Attributes,
    frame: &Attributes,
    defaults: &FrameAttributes,
) -> Option<EmbedEntity> {
    let entity = entity_with_source(frame)?;

    let width = sanitize_dimension(outer.get(DATA_WIDTH).map(String::as_str), DEFAULT_WIDTH);
    let height = sanitize_dimension(outer.get(DATA_HEIGHT).map(String::as_str), DEFAULT_HEIGHT);
    let mode = outer
        .get(DATA_TYPE)
        .map(|raw| SizingMode::parse_lenient(raw))
        .unwrap_or_default();
    let ratio = Ratio::parse_or_default(outer.get(DATA_RATIO).map(String::as_str));

    let allowfullscreen =
        non_empty(frame, "allowfullscreen").map(|value| value == "true" || value == "1");
    let explicit = explicit_frame_attributes(frame, allowfullscreen);

    Some(
        entity
            .with_sizing_mode(mode)
            .with_dimensions(i64::from(width), i64::from(height))
            .with_ratio(ratio)
            .with_frame(defaults.overlay(&explicit)),
    )
}

/// Build an entity from a bare iframe's attributes.
///
/// The mode is always auto and the ratio is derived from the frame's own
/// dimensions. Returns `None` when the frame has no valid `src`.
pub fn parse_plain_frame(frame: &Attributes, defaults: &FrameAttributes) -> Option<EmbedEntity> {
    let entity = entity_with_source(frame)?;

    let width = sanitize_dimension(frame.get("width").map(String::as_str), DEFAULT_WIDTH);
    let height = sanitize_dimension(frame.get("height").map(String::as_str), DEFAULT_HEIGHT);

    // boolean attribute: present means on, whatever its value
    let allowfullscreen = frame.contains_key("allowfullscreen").then_some(true);
    let explicit = explicit_frame_attributes(frame, allowfullscreen);

    Some(
        entity
            .with_sizing_mode(SizingMode::Auto)
            .with_dimensions(i64::from(width), i64::from(height))
            .with_ratio(Ratio::reduced(width, height))
            .with_frame(defaults.overlay(&explicit)),
    )
}

/// Recognize `node` and build the entity it describes
pub fn parse_node(node: &ElementNode, defaults: &FrameAttributes) -> Option<EmbedEntity> {
    match recognize(node)? {
        Shape::OuterWrapper { outer, frame, .. } => {
            parse_structure(&outer.attributes, &frame.attributes, defaults)
        }
        Shape::PlainFrame { frame } => parse_plain_frame(&frame.attributes, defaults),
    }
}
