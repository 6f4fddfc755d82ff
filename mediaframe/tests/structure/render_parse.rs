//! Rendering an entity and parsing the structure back

use insta::assert_debug_snapshot;
use mediaframe::{
    derive_view, insert, parse_node, recognize, render_structure, ElementNode, FrameAttributes,
    InsertOptions, Ratio, Shape, SizingMode,
};

fn inserted(src: &str) -> mediaframe::EmbedEntity {
    insert(InsertOptions::new(src), &FrameAttributes::default()).unwrap()
}

#[test]
fn test_mode_exclusivity() {
    let auto = inserted("https://vimeo.com/76979871");
    let view = derive_view(&auto);
    assert!(view.outer.styles.contains_key("padding-bottom"));
    assert!(!view.frame.contains_key("width"));

    let fixed = auto.with_sizing_mode(SizingMode::Fixed);
    let view = derive_view(&fixed);
    assert!(!view.outer.styles.contains_key("padding-bottom"));
    assert!(!view
        .outer
        .classes
        .iter()
        .any(|c| c == "nvck-iframe-responsive"));
    assert_eq!(view.frame.get("width").map(String::as_str), Some("560"));
}

#[test]
fn test_rendered_structure_is_recognized() {
    let node = render_structure(&inserted("https://youtu.be/dQw4w9WgXcQ"));
    match recognize(&node) {
        Some(Shape::OuterWrapper { frame, .. }) => assert_eq!(
            frame.attribute("src"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        ),
        other => panic!("Expected OuterWrapper, got {other:?}"),
    }
}

#[test]
fn test_round_trip_preserves_entity() {
    let entity = insert(
        InsertOptions {
            width: Some(1280),
            height: Some(720),
            sizing_mode: Some(SizingMode::Fixed),
            ratio: Ratio::new(21, 9),
            frame: FrameAttributes {
                sandbox: Some("allow-scripts allow-same-origin".to_string()),
                referrerpolicy: Some("strict-origin".to_string()),
                allowfullscreen: Some(true),
                ..Default::default()
            },
            ..InsertOptions::new("https://www.dailymotion.com/video/x7tgad0")
        },
        &FrameAttributes::default(),
    )
    .unwrap();

    let parsed = parse_node(&render_structure(&entity), &FrameAttributes::default()).unwrap();
    assert_eq!(parsed, entity);
}

#[test]
fn test_unrecognized_structures() {
    let defaults = FrameAttributes::default();
    assert!(parse_node(&ElementNode::new("p"), &defaults).is_none());
    assert!(parse_node(&ElementNode::new("div").with_class("nvck-iframe"), &defaults).is_none());
    // wrapped but the frame has no source
    let node = ElementNode::new("div").with_class("nvck-iframe").with_child(
        ElementNode::new("div")
            .with_class("nvck-iframe-inner")
            .with_child(ElementNode::new("iframe").with_class("nvck-iframe-element")),
    );
    assert!(recognize(&node).is_some());
    assert!(parse_node(&node, &defaults).is_none());
}

#[test]
fn test_view_snapshot() {
    let entity = inserted("https://www.tiktok.com/@scout2015/video/6718335390845095173")
        .with_ratio(Ratio::new(9, 16).unwrap());
    assert_debug_snapshot!(derive_view(&entity), @r#"
    DerivedView {
        outer: OuterView {
            classes: [
                "nvck-iframe",
                "nvck-iframe-responsive",
            ],
            attributes: {
                "data-iframe-height": "315",
                "data-iframe-ratio": "9:16",
                "data-iframe-type": "auto",
                "data-iframe-width": "560",
            },
            styles: {
                "padding-bottom": "177.78%",
            },
        },
        frame: {
            "src": "https://www.tiktok.com/embed/6718335390845095173",
        },
    }
    "#);
}
