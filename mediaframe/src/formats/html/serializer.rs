//! HTML export: rendering embeds and rewriting documents
//!
//! Pipeline: entity → ElementNode → RcDom handle → HTML string

use super::parser::{collect_embeds, parse_html};
use crate::entity::{EmbedEntity, FrameAttributes};
use crate::error::{EmbedError, Result};
use crate::registry::ProviderRegistry;
use crate::structure::{render_structure, ElementNode};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;
use tracing::debug;

/// Options for [`normalize_embeds`]
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Rewrite each embed's source into its canonical embeddable form
    pub canonicalize: bool,
    /// Pass-through attributes for embeds that do not set them
    pub defaults: FrameAttributes,
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Build a detached DOM subtree from an [`ElementNode`]
pub fn handle_from_element(node: &ElementNode) -> Handle {
    let attributes = node.markup_attributes();
    let handle = create_element(
        &node.name,
        attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect(),
    );

    for child in &node.children {
        let child_handle = handle_from_element(child);
        child_handle.parent.set(Some(Rc::downgrade(&handle)));
        handle.children.borrow_mut().push(child_handle);
    }
    handle
}

fn serialize_handle(handle: &Handle, traversal_scope: TraversalScope) -> Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| EmbedError::Serialization(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| EmbedError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Render one entity as the wrapped embed markup
pub fn render_embed_html(entity: &EmbedEntity) -> Result<String> {
    let handle = handle_from_element(&render_structure(entity));
    serialize_handle(&handle, TraversalScope::IncludeNode)
}

/// Swap `old` for `new` in its parent's children
fn replace_in_parent(old: &Handle, new: Handle) -> Result<()> {
    let parent = old
        .parent
        .take()
        .and_then(|weak| weak.upgrade())
        .ok_or_else(|| EmbedError::Serialization("Embed element has no parent".to_string()))?;

    let mut children = parent.children.borrow_mut();
    let index = children
        .iter()
        .position(|child| Rc::ptr_eq(child, old))
        .ok_or_else(|| EmbedError::Serialization("Embed element not found in parent".to_string()))?;

    new.parent.set(Some(Rc::downgrade(&parent)));
    children[index] = new;
    Ok(())
}

/// Find the `body` element of a parsed document
fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = handle.data {
        if name.local.as_ref() == "body" {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(find_body)
}

/// Rewrite every recognized embed in `html` into the canonical wrapped structure.
///
/// Markup that is not an embed is left as it is. Returns the body's inner HTML.
pub fn normalize_embeds(html: &str, options: &NormalizeOptions) -> Result<String> {
    normalize_embeds_with(ProviderRegistry::global(), html, options)
}

/// [`normalize_embeds`] with an explicit provider registry
pub fn normalize_embeds_with(
    registry: &ProviderRegistry,
    html: &str,
    options: &NormalizeOptions,
) -> Result<String> {
    let dom = parse_html(html);
    let mut found = Vec::new();
    collect_embeds(&dom.document, &options.defaults, &mut found);
    debug!(count = found.len(), "normalizing embeds");

    for (handle, mut entity) in found {
        if options.canonicalize {
            let canonical = registry.canonicalize(entity.source());
            entity.set_source(canonical);
        }
        replace_in_parent(&handle, handle_from_element(&render_structure(&entity)))?;
    }

    let body = find_body(&dom.document)
        .ok_or_else(|| EmbedError::Serialization("Document has no body".to_string()))?;
    serialize_handle(&body, TraversalScope::ChildrenOnly(None))
}
