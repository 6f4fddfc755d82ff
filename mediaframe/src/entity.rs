//! The logical embed entity and its sanitizers
//!
//! An [`EmbedEntity`] is the record behind one embedded iframe: its source URL,
//! sizing mode, fixed dimensions, aspect ratio and pass-through frame attributes.
//!
//! All numeric input is corrected where it enters: parse, insert and update go
//! through [`sanitize_dimension`], [`Ratio::parse_or_default`] and
//! [`Ratio::reduced`], so a stored entity never holds an out-of-range value and
//! readers never have to re-check.

use crate::error::{EmbedError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Width used when none (or an invalid one) is given
pub const DEFAULT_WIDTH: u32 = 560;
/// Height used when none (or an invalid one) is given
pub const DEFAULT_HEIGHT: u32 = 315;
/// Largest accepted width or height, inclusive
pub const MAX_DIMENSION: u32 = 9999;
/// Largest component of a ratio derived from pixel dimensions
pub const MAX_RATIO_COMPONENT: u32 = 99;

static RATIO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d+)$").expect("Invalid RATIO_RE regex pattern"));

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+").expect("Invalid HTTP_URL_RE regex pattern"));

/// How the embed is sized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Responsive: scales with the container, driven by the aspect ratio
    #[default]
    Auto,
    /// Explicit pixel box, driven by width and height
    Fixed,
}

impl SizingMode {
    /// Get the mode as it appears in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            SizingMode::Auto => "auto",
            SizingMode::Fixed => "fixed",
        }
    }

    /// Parse a mode, treating anything unrecognized as [`SizingMode::Auto`]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "fixed" => SizingMode::Fixed,
            _ => SizingMode::Auto,
        }
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect ratio with both components at least 1
///
/// Serialized as `"w:h"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ratio {
    width: u32,
    height: u32,
}

impl Ratio {
    /// The 16:9 ratio used whenever no valid ratio is available
    pub const DEFAULT: Ratio = Ratio {
        width: 16,
        height: 9,
    };

    /// Create a ratio, rejecting zero components
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Ratio { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Strictly parse `"x:y"` where both parts are positive integers
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = RATIO_RE.captures(raw)?;
        let width = caps[1].parse::<u32>().ok()?;
        let height = caps[2].parse::<u32>().ok()?;
        Ratio::new(width, height)
    }

    /// Parse `"x:y"`, falling back to 16:9 on any failure
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.and_then(Ratio::parse) {
            Some(ratio) => ratio,
            None => {
                trace!(raw, "ratio replaced by default");
                Ratio::DEFAULT
            }
        }
    }

    /// Derive a small, human-readable ratio from pixel dimensions.
    ///
    /// The dimensions are reduced by their greatest common divisor; if the larger
    /// component still exceeds 99 both are scaled down proportionally, rounded and
    /// clamped to at least 1. 1920×1080 gives 16:9, 9999×1 gives 99:1.
    pub fn reduced(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Ratio::DEFAULT;
        }

        let divisor = gcd(width, height);
        let mut x = width / divisor;
        let mut y = height / divisor;

        let largest = x.max(y);
        if largest > MAX_RATIO_COMPONENT {
            let scale = f64::from(MAX_RATIO_COMPONENT) / f64::from(largest);
            x = ((f64::from(x) * scale).round() as u32).max(1);
            y = ((f64::from(y) * scale).round() as u32).max(1);
        }

        Ratio {
            width: x,
            height: y,
        }
    }

    /// The `padding-bottom` percentage that gives a box this aspect ratio,
    /// formatted with two decimals (16:9 → `"56.25%"`)
    pub fn padding_bottom(&self) -> String {
        let percent = f64::from(self.height) / f64::from(self.width) * 100.0;
        format!("{percent:.2}%")
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::DEFAULT
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl From<Ratio> for String {
    fn from(ratio: Ratio) -> Self {
        ratio.to_string()
    }
}

impl TryFrom<String> for Ratio {
    type Error = String;

    fn try_from(raw: String) -> std::result::Result<Self, Self::Error> {
        Ratio::parse(&raw).ok_or_else(|| format!("invalid ratio {raw:?}, expected \"x:y\""))
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Leniently read a leading integer: leading whitespace, an optional sign and
/// digits; anything after the digits (such as a `px` suffix) is ignored.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Saturate absurdly long digit runs; they are out of range either way.
    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Accept a dimension in `(0, 9999]`
pub fn valid_dimension(value: i64) -> Option<u32> {
    if value > 0 && value <= i64::from(MAX_DIMENSION) {
        u32::try_from(value).ok()
    } else {
        None
    }
}

/// Read a width or height from markup, replacing missing, non-numeric and
/// out-of-range values with `default`
pub fn sanitize_dimension(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(parse_leading_int).and_then(valid_dimension) {
        Some(value) => value,
        None => {
            trace!(raw, default, "dimension replaced by default");
            default
        }
    }
}

/// Whether a source looks like a URL an iframe can load: an internal path
/// starting with `/`, or an `http(s)://` URL
pub fn is_valid_source(url: &str) -> bool {
    url.starts_with('/') || HTTP_URL_RE.is_match(url)
}

/// The pass-through attributes an embed can carry on its frame element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameAttributeKey {
    Sandbox,
    Allow,
    ReferrerPolicy,
    AllowFullscreen,
    FrameBorder,
}

impl FrameAttributeKey {
    /// Every pass-through key, in markup order
    pub const ALL: [FrameAttributeKey; 5] = [
        FrameAttributeKey::Sandbox,
        FrameAttributeKey::Allow,
        FrameAttributeKey::ReferrerPolicy,
        FrameAttributeKey::AllowFullscreen,
        FrameAttributeKey::FrameBorder,
    ];

    /// The attribute name on the frame element
    pub fn attribute_name(&self) -> &'static str {
        match self {
            FrameAttributeKey::Sandbox => "sandbox",
            FrameAttributeKey::Allow => "allow",
            FrameAttributeKey::ReferrerPolicy => "referrerpolicy",
            FrameAttributeKey::AllowFullscreen => "allowfullscreen",
            FrameAttributeKey::FrameBorder => "frameborder",
        }
    }
}

/// Pass-through frame attributes
///
/// Every field is optional; an absent field is never written to markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrerpolicy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowfullscreen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameborder: Option<String>,
}

impl FrameAttributes {
    /// Build a new set where every field present in `overrides` wins over `self`
    pub fn overlay(&self, overrides: &FrameAttributes) -> FrameAttributes {
        FrameAttributes {
            sandbox: overrides.sandbox.clone().or_else(|| self.sandbox.clone()),
            allow: overrides.allow.clone().or_else(|| self.allow.clone()),
            referrerpolicy: overrides
                .referrerpolicy
                .clone()
                .or_else(|| self.referrerpolicy.clone()),
            allowfullscreen: overrides.allowfullscreen.or(self.allowfullscreen),
            frameborder: overrides
                .frameborder
                .clone()
                .or_else(|| self.frameborder.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FrameAttributes::default()
    }

    /// The markup value of one attribute, if it should be written.
    ///
    /// `allowfullscreen` is written as `"true"` or `"false"` so that an explicit
    /// opt-out survives a later overlay of configured defaults.
    pub fn markup_value(&self, key: FrameAttributeKey) -> Option<String> {
        match key {
            FrameAttributeKey::Sandbox => self.sandbox.clone(),
            FrameAttributeKey::Allow => self.allow.clone(),
            FrameAttributeKey::ReferrerPolicy => self.referrerpolicy.clone(),
            FrameAttributeKey::AllowFullscreen => {
                self.allowfullscreen.map(|on| on.to_string())
            }
            FrameAttributeKey::FrameBorder => self.frameborder.clone(),
        }
    }

    /// Attribute name/value pairs to write on the frame element
    pub fn to_markup(&self) -> Vec<(&'static str, String)> {
        FrameAttributeKey::ALL
            .iter()
            .filter_map(|key| self.markup_value(*key).map(|v| (key.attribute_name(), v)))
            .collect()
    }
}

/// One embedded iframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEmbedEntity")]
pub struct EmbedEntity {
    source: String,
    sizing_mode: SizingMode,
    width: u32,
    height: u32,
    ratio: Ratio,
    #[serde(default, skip_serializing_if = "FrameAttributes::is_empty")]
    frame: FrameAttributes,
}

/// Serialized shape of [`EmbedEntity`], validated on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmbedEntity {
    source: String,
    #[serde(default)]
    sizing_mode: SizingMode,
    #[serde(default = "default_width")]
    width: i64,
    #[serde(default = "default_height")]
    height: i64,
    #[serde(default = "default_ratio")]
    ratio: Ratio,
    #[serde(default)]
    frame: FrameAttributes,
}

fn default_width() -> i64 {
    DEFAULT_WIDTH.into()
}

fn default_height() -> i64 {
    DEFAULT_HEIGHT.into()
}

fn default_ratio() -> Ratio {
    Ratio::DEFAULT
}

impl TryFrom<RawEmbedEntity> for EmbedEntity {
    type Error = EmbedError;

    fn try_from(raw: RawEmbedEntity) -> Result<Self> {
        Ok(EmbedEntity::new(raw.source)?
            .with_sizing_mode(raw.sizing_mode)
            .with_dimensions(raw.width, raw.height)
            .with_ratio(raw.ratio)
            .with_frame(raw.frame))
    }
}

impl EmbedEntity {
    /// Create an entity with default sizing, refusing sources that do not look
    /// like a URL
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if !is_valid_source(&source) {
            return Err(EmbedError::InvalidSource(source));
        }
        Ok(EmbedEntity {
            source,
            sizing_mode: SizingMode::Auto,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ratio: Ratio::DEFAULT,
            frame: FrameAttributes::default(),
        })
    }

    /// Set the sizing mode
    pub fn with_sizing_mode(mut self, mode: SizingMode) -> Self {
        self.sizing_mode = mode;
        self
    }

    /// Set width and height, each replaced by its default when out of range
    pub fn with_dimensions(mut self, width: i64, height: i64) -> Self {
        self.width = valid_dimension(width).unwrap_or(DEFAULT_WIDTH);
        self.height = valid_dimension(height).unwrap_or(DEFAULT_HEIGHT);
        self
    }

    /// Set the aspect ratio
    pub fn with_ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the pass-through frame attributes
    pub fn with_frame(mut self, frame: FrameAttributes) -> Self {
        self.frame = frame;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sizing_mode(&self) -> SizingMode {
        self.sizing_mode
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub fn frame(&self) -> &FrameAttributes {
        &self.frame
    }

    pub(crate) fn set_source(&mut self, source: String) {
        self.source = source;
    }

    pub(crate) fn set_sizing_mode(&mut self, mode: SizingMode) {
        self.sizing_mode = mode;
    }

    pub(crate) fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub(crate) fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub(crate) fn set_ratio(&mut self, ratio: Ratio) {
        self.ratio = ratio;
    }

    pub(crate) fn frame_mut(&mut self) -> &mut FrameAttributes {
        &mut self.frame
    }
}
