//! Attribute synchronization
//!
//! Entities change only through [`apply_update`], which writes a whole batch of
//! attributes and reports each actual change to a [`ChangeObserver`]. The observer
//! answers with [`SideEffects`]: the edits that bring an already-rendered structure
//! in line with the new entity state. [`ViewSynchronizer`] is the observer that
//! knows the persisted structure.
//!
//! Side effects are plain data. They can be inspected, merged and applied later,
//! and [`SideEffects::apply`] either applies all of them or none.

use crate::entity::{
    is_valid_source, valid_dimension, EmbedEntity, FrameAttributeKey, FrameAttributes, Ratio,
    SizingMode, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::error::{EmbedError, Result};
use crate::structure::markers::{
    DATA_HEIGHT, DATA_RATIO, DATA_TYPE, DATA_WIDTH, PADDING_BOTTOM, RESPONSIVE_CLASS,
};
use crate::structure::{find_frame_mut, ElementNode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A logical attribute of an embed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Source,
    SizingMode,
    Width,
    Height,
    Ratio,
    Frame(FrameAttributeKey),
}

impl AttributeKey {
    /// Whether changing this attribute affects how the embed is sized
    pub fn is_sizing(&self) -> bool {
        matches!(
            self,
            AttributeKey::SizingMode | AttributeKey::Width | AttributeKey::Height | AttributeKey::Ratio
        )
    }

    /// The outer wrapper attribute mirroring this key, for sizing keys
    pub fn metadata_attribute(&self) -> Option<&'static str> {
        match self {
            AttributeKey::SizingMode => Some(DATA_TYPE),
            AttributeKey::Width => Some(DATA_WIDTH),
            AttributeKey::Height => Some(DATA_HEIGHT),
            AttributeKey::Ratio => Some(DATA_RATIO),
            _ => None,
        }
    }

    /// The frame attribute carrying this key, for non-sizing keys
    pub fn frame_attribute(&self) -> Option<&'static str> {
        match self {
            AttributeKey::Source => Some("src"),
            AttributeKey::Frame(key) => Some(key.attribute_name()),
            _ => None,
        }
    }
}

/// The value of a logical attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Integer(u32),
    Ratio(Ratio),
    Mode(SizingMode),
    Flag(bool),
}

impl AttributeValue {
    /// How the value is written to markup
    pub fn to_markup(&self) -> Option<String> {
        match self {
            AttributeValue::Text(text) => Some(text.clone()),
            AttributeValue::Integer(value) => Some(value.to_string()),
            AttributeValue::Ratio(ratio) => Some(ratio.to_string()),
            AttributeValue::Mode(mode) => Some(mode.to_string()),
            AttributeValue::Flag(on) => Some(on.to_string()),
        }
    }
}

/// One attribute write, as seen by a [`ChangeObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    pub key: AttributeKey,
    pub old: Option<AttributeValue>,
    pub new: Option<AttributeValue>,
}

/// A single edit to a rendered embed structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    SetFrameAttribute { name: String, value: String },
    RemoveFrameAttribute { name: String },
    AddOuterClass(String),
    RemoveOuterClass(String),
    SetOuterStyle { property: String, value: String },
    RemoveOuterStyle(String),
    SetOuterAttribute { name: String, value: String },
}

impl ViewEffect {
    fn targets_frame(&self) -> bool {
        matches!(
            self,
            ViewEffect::SetFrameAttribute { .. } | ViewEffect::RemoveFrameAttribute { .. }
        )
    }

    fn apply_to(self, node: &mut ElementNode) {
        match self {
            ViewEffect::SetFrameAttribute { name, value }
            | ViewEffect::SetOuterAttribute { name, value } => node.set_attribute(name, value),
            ViewEffect::RemoveFrameAttribute { name } => node.remove_attribute(&name),
            ViewEffect::AddOuterClass(class) => node.add_class(class),
            ViewEffect::RemoveOuterClass(class) => node.remove_class(&class),
            ViewEffect::SetOuterStyle { property, value } => node.set_style(property, value),
            ViewEffect::RemoveOuterStyle(property) => node.remove_style(&property),
        }
    }
}

/// An ordered batch of edits, produced together and applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    effects: Vec<ViewEffect>,
}

impl SideEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: ViewEffect) {
        self.effects.push(effect);
    }

    pub fn extend(&mut self, other: SideEffects) {
        self.effects.extend(other.effects);
    }

    pub fn effects(&self) -> &[ViewEffect] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Apply every edit to a wrapped structure rooted at `outer`.
    ///
    /// The frame is located before anything is written; if it cannot be found the
    /// structure is left exactly as it was.
    pub fn apply(self, outer: &mut ElementNode) -> Result<()> {
        let frame = find_frame_mut(outer).ok_or(EmbedError::MissingFrame)?;

        let (frame_effects, outer_effects): (Vec<ViewEffect>, Vec<ViewEffect>) =
            self.effects.into_iter().partition(ViewEffect::targets_frame);

        for effect in frame_effects {
            effect.apply_to(frame);
        }
        for effect in outer_effects {
            effect.apply_to(outer);
        }
        Ok(())
    }
}

/// Receives every attribute change applied to an entity
pub trait ChangeObserver {
    /// React to `change`; `entity` already holds the new value
    fn on_change(&self, change: &AttributeChange, entity: &EmbedEntity) -> SideEffects;
}

/// Keeps the persisted structure in line with entity changes
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewSynchronizer;

impl ViewSynchronizer {
    /// The complete sizing presentation for the entity's current mode
    fn sizing_effects(entity: &EmbedEntity) -> SideEffects {
        let mut effects = SideEffects::new();
        match entity.sizing_mode() {
            SizingMode::Fixed => {
                effects.push(ViewEffect::RemoveOuterClass(RESPONSIVE_CLASS.to_string()));
                effects.push(ViewEffect::RemoveOuterStyle(PADDING_BOTTOM.to_string()));
                effects.push(ViewEffect::SetFrameAttribute {
                    name: "width".to_string(),
                    value: entity.width().to_string(),
                });
                effects.push(ViewEffect::SetFrameAttribute {
                    name: "height".to_string(),
                    value: entity.height().to_string(),
                });
            }
            SizingMode::Auto => {
                effects.push(ViewEffect::AddOuterClass(RESPONSIVE_CLASS.to_string()));
                effects.push(ViewEffect::SetOuterStyle {
                    property: PADDING_BOTTOM.to_string(),
                    value: entity.ratio().padding_bottom(),
                });
                effects.push(ViewEffect::RemoveFrameAttribute {
                    name: "width".to_string(),
                });
                effects.push(ViewEffect::RemoveFrameAttribute {
                    name: "height".to_string(),
                });
            }
        }
        effects
    }

    fn metadata_value(key: AttributeKey, entity: &EmbedEntity) -> String {
        match key {
            AttributeKey::SizingMode => entity.sizing_mode().to_string(),
            AttributeKey::Width => entity.width().to_string(),
            AttributeKey::Height => entity.height().to_string(),
            _ => entity.ratio().to_string(),
        }
    }
}

impl ChangeObserver for ViewSynchronizer {
    fn on_change(&self, change: &AttributeChange, entity: &EmbedEntity) -> SideEffects {
        if change.key.is_sizing() {
            let mut effects = Self::sizing_effects(entity);
            if let Some(name) = change.key.metadata_attribute() {
                effects.push(ViewEffect::SetOuterAttribute {
                    name: name.to_string(),
                    value: Self::metadata_value(change.key, entity),
                });
            }
            return effects;
        }

        let mut effects = SideEffects::new();
        if let Some(name) = change.key.frame_attribute() {
            let value = change.new.as_ref().and_then(AttributeValue::to_markup);
            effects.push(match value {
                Some(value) => ViewEffect::SetFrameAttribute {
                    name: name.to_string(),
                    value,
                },
                None => ViewEffect::RemoveFrameAttribute {
                    name: name.to_string(),
                },
            });
        }
        effects
    }
}

/// A batch of attribute writes; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedUpdate {
    pub source: Option<String>,
    pub sizing_mode: Option<SizingMode>,
    /// Out-of-range values become the default width
    pub width: Option<i64>,
    /// Out-of-range values become the default height
    pub height: Option<i64>,
    pub ratio: Option<Ratio>,
    /// Replaces the whole pass-through set
    pub frame: Option<FrameAttributes>,
}

impl EmbedUpdate {
    /// Set the ratio from text, falling back to 16:9 when it is malformed
    pub fn with_ratio_text(mut self, raw: &str) -> Self {
        self.ratio = Some(Ratio::parse_or_default(Some(raw)));
        self
    }
}

fn frame_value(frame: &FrameAttributes, key: FrameAttributeKey) -> Option<AttributeValue> {
    match key {
        FrameAttributeKey::AllowFullscreen => frame.allowfullscreen.map(AttributeValue::Flag),
        _ => frame.markup_value(key).map(AttributeValue::Text),
    }
}

/// Collects changes while an update is applied
struct Notifier<'o> {
    observer: &'o dyn ChangeObserver,
    effects: SideEffects,
}

impl Notifier<'_> {
    fn notify(
        &mut self,
        entity: &EmbedEntity,
        key: AttributeKey,
        old: Option<AttributeValue>,
        new: Option<AttributeValue>,
    ) {
        if old == new {
            return;
        }
        debug!(?key, ?old, ?new, "embed attribute changed");
        let change = AttributeChange { key, old, new };
        self.effects.extend(self.observer.on_change(&change, entity));
    }
}

/// Apply `update` to `entity` and collect the side effects `observer` asks for.
///
/// An update with an invalid source is refused and leaves the entity untouched.
/// Dimensions are sanitized here. A sizing-mode change is applied and notified
/// first, so its effects come before those of the other writes in the batch.
pub fn apply_update(
    entity: &mut EmbedEntity,
    update: EmbedUpdate,
    observer: &dyn ChangeObserver,
) -> Result<SideEffects> {
    if let Some(source) = &update.source {
        if !is_valid_source(source) {
            warn!(source = source.as_str(), "update refused, invalid source");
            return Err(EmbedError::InvalidSource(source.clone()));
        }
    }

    let mut notifier = Notifier {
        observer,
        effects: SideEffects::new(),
    };

    if let Some(mode) = update.sizing_mode {
        let old = entity.sizing_mode();
        entity.set_sizing_mode(mode);
        notifier.notify(
            entity,
            AttributeKey::SizingMode,
            Some(AttributeValue::Mode(old)),
            Some(AttributeValue::Mode(mode)),
        );
    }

    if let Some(source) = update.source {
        let old = entity.source().to_string();
        entity.set_source(source.clone());
        notifier.notify(
            entity,
            AttributeKey::Source,
            Some(AttributeValue::Text(old)),
            Some(AttributeValue::Text(source)),
        );
    }

    if let Some(raw) = update.width {
        let old = entity.width();
        let width = valid_dimension(raw).unwrap_or(DEFAULT_WIDTH);
        entity.set_width(width);
        notifier.notify(
            entity,
            AttributeKey::Width,
            Some(AttributeValue::Integer(old)),
            Some(AttributeValue::Integer(width)),
        );
    }

    if let Some(raw) = update.height {
        let old = entity.height();
        let height = valid_dimension(raw).unwrap_or(DEFAULT_HEIGHT);
        entity.set_height(height);
        notifier.notify(
            entity,
            AttributeKey::Height,
            Some(AttributeValue::Integer(old)),
            Some(AttributeValue::Integer(height)),
        );
    }

    if let Some(ratio) = update.ratio {
        let old = entity.ratio();
        entity.set_ratio(ratio);
        notifier.notify(
            entity,
            AttributeKey::Ratio,
            Some(AttributeValue::Ratio(old)),
            Some(AttributeValue::Ratio(ratio)),
        );
    }

    if let Some(frame) = update.frame {
        let previous = std::mem::replace(entity.frame_mut(), frame);
        for key in FrameAttributeKey::ALL {
            let old = frame_value(&previous, key);
            let new = frame_value(entity.frame(), key);
            notifier.notify(entity, AttributeKey::Frame(key), old, new);
        }
    }

    Ok(notifier.effects)
}
