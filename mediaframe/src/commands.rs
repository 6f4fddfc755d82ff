//! Insert and replace-source commands

use crate::entity::{
    is_valid_source, EmbedEntity, FrameAttributes, Ratio, SizingMode, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
use crate::error::{EmbedError, Result};
use crate::registry::ProviderRegistry;
use crate::sync::{apply_update, ChangeObserver, EmbedUpdate, SideEffects};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What the author asked to insert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertOptions {
    pub src: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub sizing_mode: Option<SizingMode>,
    pub ratio: Option<Ratio>,
    /// Pass-through attributes given for this embed only
    pub frame: FrameAttributes,
}

impl InsertOptions {
    pub fn new(src: impl Into<String>) -> Self {
        InsertOptions {
            src: src.into(),
            ..Default::default()
        }
    }
}

/// Create a new embed entity.
///
/// The source is trimmed, validated and canonicalized; dimensions are sanitized;
/// configured pass-through `defaults` apply wherever `options` leaves a key unset.
pub fn insert(options: InsertOptions, defaults: &FrameAttributes) -> Result<EmbedEntity> {
    insert_with(ProviderRegistry::global(), options, defaults)
}

/// [`insert`] with an explicit provider registry
pub fn insert_with(
    registry: &ProviderRegistry,
    options: InsertOptions,
    defaults: &FrameAttributes,
) -> Result<EmbedEntity> {
    let src = options.src.trim();
    if !is_valid_source(src) {
        warn!(src, "iframe source is not a valid URL, nothing inserted");
        return Err(EmbedError::InvalidSource(src.to_string()));
    }

    let source = registry.canonicalize(src);
    debug!(source = source.as_str(), "inserting embed");

    let entity = EmbedEntity::new(source)?
        .with_sizing_mode(options.sizing_mode.unwrap_or_default())
        .with_dimensions(
            options.width.unwrap_or(i64::from(DEFAULT_WIDTH)),
            options.height.unwrap_or(i64::from(DEFAULT_HEIGHT)),
        )
        .with_ratio(options.ratio.unwrap_or_default())
        .with_frame(defaults.overlay(&options.frame));
    Ok(entity)
}

/// Point an existing embed at a new source.
///
/// The source is written as given, without canonicalization.
pub fn replace_source(
    entity: &mut EmbedEntity,
    source: impl Into<String>,
    observer: &dyn ChangeObserver,
) -> Result<SideEffects> {
    let update = EmbedUpdate {
        source: Some(source.into()),
        ..Default::default()
    };
    apply_update(entity, update, observer)
}
