//! HTML import: finding embeds in a document

use crate::entity::{EmbedEntity, FrameAttributes};
use crate::structure::markers::OUTER_CLASS;
use crate::structure::{parse_node, ElementNode};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

/// Parse an HTML document or fragment
pub fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Convert an element handle and its element descendants to an [`ElementNode`].
///
/// Text, comments and other non-element children are not carried over.
pub fn element_from_handle(handle: &Handle) -> Option<ElementNode> {
    let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = handle.data
    else {
        return None;
    };

    let mut node = ElementNode::new(name.local.as_ref());
    for attr in attrs.borrow().iter() {
        match attr.name.local.as_ref() {
            "class" => node.set_class_attribute(&attr.value),
            "style" => node.set_style_attribute(&attr.value),
            other => node.set_attribute(other, attr.value.to_string()),
        }
    }
    node.children = handle
        .children
        .borrow()
        .iter()
        .filter_map(element_from_handle)
        .collect();
    Some(node)
}

/// Whether the handle could be the root of an embed, checked before the
/// subtree is converted
fn is_candidate(handle: &Handle) -> bool {
    let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = handle.data
    else {
        return false;
    };

    match name.local.as_ref() {
        "iframe" => true,
        "div" => attrs.borrow().iter().any(|attr| {
            attr.name.local.as_ref() == "class"
                && attr.value.split_whitespace().any(|c| c == OUTER_CLASS)
        }),
        _ => false,
    }
}

/// Walk the tree in document order, collecting every recognized embed.
///
/// Recognized embeds are not descended into, so the frame inside a wrapped
/// structure is not reported a second time.
pub(crate) fn collect_embeds(
    handle: &Handle,
    defaults: &FrameAttributes,
    found: &mut Vec<(Handle, EmbedEntity)>,
) {
    if is_candidate(handle) {
        if let Some(entity) = element_from_handle(handle).and_then(|n| parse_node(&n, defaults)) {
            debug!(source = entity.source(), "embed recognized");
            found.push((handle.clone(), entity));
            return;
        }
    }

    for child in handle.children.borrow().iter() {
        collect_embeds(child, defaults, found);
    }
}

/// Every embed in `html`, in document order
pub fn extract_embeds(html: &str, defaults: &FrameAttributes) -> Vec<EmbedEntity> {
    let dom = parse_html(html);
    let mut found = Vec::new();
    collect_embeds(&dom.document, defaults, &mut found);
    found.into_iter().map(|(_, entity)| entity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SizingMode;

    const WRAPPED: &str = r#"<div class="nvck-iframe" data-iframe-width="640" data-iframe-height="480" data-iframe-type="fixed" data-iframe-ratio="4:3"><div class="nvck-iframe-inner"><iframe class="nvck-iframe-element" src="https://player.vimeo.com/video/76979871" width="640" height="480"></iframe></div></div>"#;

    #[test]
    fn test_element_from_handle() {
        let dom = parse_html(WRAPPED);
        let mut found = Vec::new();
        collect_embeds(&dom.document, &FrameAttributes::default(), &mut found);
        let node = element_from_handle(&found[0].0).unwrap();

        assert_eq!(node.name, "div");
        assert!(node.has_class("nvck-iframe"));
        assert_eq!(node.attribute("data-iframe-ratio"), Some("4:3"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].children[0].name, "iframe");
    }

    #[test]
    fn test_extract_wrapped_once() {
        let entities = extract_embeds(WRAPPED, &FrameAttributes::default());
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].sizing_mode(), SizingMode::Fixed);
        assert_eq!(entities[0].ratio().to_string(), "4:3");
    }

    #[test]
    fn test_extract_in_document_order() {
        let html = format!(
            r#"<p>intro</p><iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" width="1920" height="1080" allowfullscreen></iframe><section>{WRAPPED}</section>"#
        );
        let entities = extract_embeds(&html, &FrameAttributes::default());

        assert_eq!(entities.len(), 2);
        assert_eq!(
            entities[0].source(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(entities[0].frame().allowfullscreen, Some(true));
        assert_eq!(entities[1].source(), "https://player.vimeo.com/video/76979871");
    }

    #[test]
    fn test_extract_skips_frames_without_source() {
        let html = r#"<iframe></iframe><iframe src="not a url"></iframe><div class="other"></div>"#;
        assert!(extract_embeds(html, &FrameAttributes::default()).is_empty());
    }
}
