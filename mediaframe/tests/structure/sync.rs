//! Batched updates keep a rendered structure in line with the entity

use mediaframe::entity::FrameAttributeKey;
use mediaframe::{
    apply_update, insert, render_structure, replace_source, AttributeChange, AttributeKey,
    ChangeObserver, EmbedEntity, EmbedError, EmbedUpdate, FrameAttributes, InsertOptions,
    SideEffects, SizingMode, ViewEffect, ViewSynchronizer,
};
use std::cell::RefCell;

fn entity() -> EmbedEntity {
    insert(
        InsertOptions::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        &FrameAttributes::default(),
    )
    .unwrap()
}

/// Forwards to the synchronizer and keeps every change it sees
#[derive(Default)]
struct Logged {
    changes: RefCell<Vec<AttributeChange>>,
}

impl ChangeObserver for Logged {
    fn on_change(&self, change: &AttributeChange, entity: &EmbedEntity) -> SideEffects {
        self.changes.borrow_mut().push(change.clone());
        ViewSynchronizer.on_change(change, entity)
    }
}

#[test]
fn test_every_update_matches_fresh_render() {
    let mut entity = entity();
    let mut node = render_structure(&entity);

    let updates = [
        EmbedUpdate {
            sizing_mode: Some(SizingMode::Fixed),
            width: Some(800),
            height: Some(450),
            ..Default::default()
        },
        EmbedUpdate::default().with_ratio_text("4:3"),
        EmbedUpdate {
            sizing_mode: Some(SizingMode::Auto),
            ..Default::default()
        },
        EmbedUpdate {
            frame: Some(FrameAttributes {
                allow: Some("autoplay; encrypted-media".to_string()),
                allowfullscreen: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        },
        EmbedUpdate {
            source: Some("/videos/intro".to_string()),
            width: Some(-5),
            ..Default::default()
        },
    ];

    for update in updates {
        apply_update(&mut entity, update, &ViewSynchronizer)
            .unwrap()
            .apply(&mut node)
            .unwrap();
        assert_eq!(node, render_structure(&entity));
    }
}

#[test]
fn test_change_values_are_sanitized() {
    let mut entity = entity();
    let logged = Logged::default();
    let update = EmbedUpdate {
        width: Some(20000),
        height: Some(240),
        ..Default::default()
    };
    apply_update(&mut entity, update, &logged).unwrap();

    let changes = logged.changes.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].key, AttributeKey::Height);
    assert_eq!(entity.width(), 560);
}

#[test]
fn test_allowfullscreen_off_is_written() {
    let mut entity = entity().with_frame(FrameAttributes {
        allowfullscreen: Some(true),
        ..Default::default()
    });
    let logged = Logged::default();
    let update = EmbedUpdate {
        frame: Some(FrameAttributes {
            allowfullscreen: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    };
    let effects = apply_update(&mut entity, update, &logged).unwrap();

    assert_eq!(
        logged.changes.borrow()[0].key,
        AttributeKey::Frame(FrameAttributeKey::AllowFullscreen)
    );
    assert_eq!(
        effects.effects(),
        &[ViewEffect::SetFrameAttribute {
            name: "allowfullscreen".to_string(),
            value: "false".to_string(),
        }]
    );
}

#[test]
fn test_replace_source_refuses_invalid() {
    let mut entity = entity();
    let before = entity.clone();
    for source in ["", "not a url"] {
        let result = replace_source(&mut entity, source, &ViewSynchronizer);
        assert_eq!(result, Err(EmbedError::InvalidSource(source.to_string())));
        assert_eq!(entity, before);
    }
}

#[test]
fn test_missing_frame_is_reported() {
    let mut entity = entity();
    let effects = apply_update(
        &mut entity,
        EmbedUpdate {
            sizing_mode: Some(SizingMode::Fixed),
            ..Default::default()
        },
        &ViewSynchronizer,
    )
    .unwrap();

    let mut node = render_structure(&entity);
    node.children[0].children.clear();
    let before = node.clone();
    assert_eq!(effects.apply(&mut node), Err(EmbedError::MissingFrame));
    assert_eq!(node, before);
}
