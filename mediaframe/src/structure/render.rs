//! Entity → structure

use super::markers::{
    DATA_HEIGHT, DATA_RATIO, DATA_TYPE, DATA_WIDTH, FRAME_CLASS, INNER_CLASS, OUTER_CLASS,
    PADDING_BOTTOM, RESPONSIVE_CLASS,
};
use super::node::{Attributes, ElementNode};
use crate::entity::{EmbedEntity, SizingMode};
use std::collections::BTreeMap;

/// What the outer wrapper should carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuterView {
    pub classes: Vec<String>,
    pub attributes: Attributes,
    pub styles: BTreeMap<String, String>,
}

/// Presentation derived from an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    pub outer: OuterView,
    /// Attributes of the frame element, excluding its class
    pub frame: Attributes,
}

/// Compute the presentation of `entity`.
///
/// In fixed mode the frame gets `width` and `height`; in auto mode the outer
/// wrapper gets the responsive class and a `padding-bottom` matching the ratio.
/// The metadata attributes are mirrored in both modes.
pub fn derive_view(entity: &EmbedEntity) -> DerivedView {
    let mut outer = OuterView {
        classes: vec![OUTER_CLASS.to_string()],
        attributes: Attributes::new(),
        styles: BTreeMap::new(),
    };
    outer
        .attributes
        .insert(DATA_WIDTH.to_string(), entity.width().to_string());
    outer
        .attributes
        .insert(DATA_HEIGHT.to_string(), entity.height().to_string());
    outer
        .attributes
        .insert(DATA_TYPE.to_string(), entity.sizing_mode().to_string());
    outer
        .attributes
        .insert(DATA_RATIO.to_string(), entity.ratio().to_string());

    let mut frame = Attributes::new();
    frame.insert("src".to_string(), entity.source().to_string());
    for (name, value) in entity.frame().to_markup() {
        frame.insert(name.to_string(), value);
    }

    match entity.sizing_mode() {
        SizingMode::Fixed => {
            frame.insert("width".to_string(), entity.width().to_string());
            frame.insert("height".to_string(), entity.height().to_string());
        }
        SizingMode::Auto => {
            outer.classes.push(RESPONSIVE_CLASS.to_string());
            outer
                .styles
                .insert(PADDING_BOTTOM.to_string(), entity.ratio().padding_bottom());
        }
    }

    DerivedView { outer, frame }
}

/// Render `entity` as the wrapped three-element structure
pub fn render_structure(entity: &EmbedEntity) -> ElementNode {
    let view = derive_view(entity);

    let frame = ElementNode {
        name: "iframe".to_string(),
        classes: vec![FRAME_CLASS.to_string()],
        attributes: view.frame,
        ..Default::default()
    };
    let inner = ElementNode::new("div")
        .with_class(INNER_CLASS)
        .with_child(frame);

    ElementNode {
        name: "div".to_string(),
        classes: view.outer.classes,
        attributes: view.outer.attributes,
        styles: view.outer.styles,
        children: vec![inner],
    }
}
