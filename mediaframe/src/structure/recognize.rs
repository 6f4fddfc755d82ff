//! Shape recognition
//!
//! Decides whether an element is an embed and, if so, which of the two accepted
//! shapes it has. Anything else is not an embed and is left to other handlers.

use super::markers::{FRAME_CLASS, INNER_CLASS, OUTER_CLASS};
use super::node::ElementNode;

/// A recognized embed structure, borrowing the relevant elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `div.nvck-iframe > div.nvck-iframe-inner > iframe.nvck-iframe-element`,
    /// each a direct child of the previous
    OuterWrapper {
        outer: &'a ElementNode,
        inner: &'a ElementNode,
        frame: &'a ElementNode,
    },
    /// A bare `iframe`, for example pasted from a provider's share dialog
    PlainFrame { frame: &'a ElementNode },
}

impl<'a> Shape<'a> {
    /// The frame element of either shape
    pub fn frame(&self) -> &'a ElementNode {
        match *self {
            Shape::OuterWrapper { frame, .. } => frame,
            Shape::PlainFrame { frame } => frame,
        }
    }
}

/// Recognize the embed shape of `node`, if it has one
pub fn recognize(node: &ElementNode) -> Option<Shape<'_>> {
    if node.is("iframe") {
        return Some(Shape::PlainFrame { frame: node });
    }

    if !node.is("div") || !node.has_class(OUTER_CLASS) {
        return None;
    }

    let inner = node.child_with_class("div", INNER_CLASS)?;
    let frame = inner.child_with_class("iframe", FRAME_CLASS)?;
    Some(Shape::OuterWrapper {
        outer: node,
        inner,
        frame,
    })
}

/// The frame element inside a wrapped structure, for writing side effects
pub fn find_frame_mut(outer: &mut ElementNode) -> Option<&mut ElementNode> {
    outer
        .child_with_class_mut("div", INNER_CLASS)?
        .child_with_class_mut("iframe", FRAME_CLASS)
}
