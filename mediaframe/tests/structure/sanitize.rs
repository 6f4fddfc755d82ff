//! Out-of-range input is corrected where it enters, never refused

use mediaframe::entity::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_RATIO_COMPONENT};
use mediaframe::{sanitize_dimension, FrameAttributes, Ratio};
use mediaframe::{parse_structure, structure::Attributes};
use proptest::prelude::*;

fn outer(width: &str, height: &str, ratio: &str) -> Attributes {
    [
        ("data-iframe-width", width),
        ("data-iframe-height", height),
        ("data-iframe-type", "fixed"),
        ("data-iframe-ratio", ratio),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn frame() -> Attributes {
    Attributes::from([("src".to_string(), "https://example.com/page".to_string())])
}

#[test]
fn test_dimensions_clamped_on_parse() {
    let entity =
        parse_structure(&outer("0", "20000", "16:9"), &frame(), &FrameAttributes::default())
            .unwrap();
    assert_eq!(entity.width(), 560);
    assert_eq!(entity.height(), 315);
}

#[test]
fn test_ratio_defaulted_on_parse() {
    let parse = |ratio: &str| {
        parse_structure(&outer("1", "1", ratio), &frame(), &FrameAttributes::default())
            .unwrap()
            .ratio()
            .to_string()
    };
    assert_eq!(parse("abc"), "16:9");
    assert_eq!(parse("0:9"), "16:9");
    assert_eq!(parse("4:3"), "4:3");
}

#[test]
fn test_reduced_ratios() {
    assert_eq!(Ratio::reduced(1920, 1080).to_string(), "16:9");
    assert_eq!(Ratio::reduced(9999, 1).to_string(), "99:1");
}

#[test]
fn test_padding_for_default_ratio() {
    assert_eq!(Ratio::parse_or_default(Some("16:9")).padding_bottom(), "56.25%");
}

proptest! {
    #[test]
    fn test_sanitized_dimension_in_range(raw in "\\PC{0,12}") {
        let value = sanitize_dimension(Some(raw.as_str()), DEFAULT_WIDTH);
        prop_assert!(value > 0 && value <= 9999);
    }

    #[test]
    fn test_sanitized_integer_dimension(value in -100_000i64..100_000) {
        let sanitized = sanitize_dimension(Some(value.to_string().as_str()), DEFAULT_HEIGHT);
        if value > 0 && value <= 9999 {
            prop_assert_eq!(i64::from(sanitized), value);
        } else {
            prop_assert_eq!(sanitized, DEFAULT_HEIGHT);
        }
    }

    #[test]
    fn test_reduced_ratio_bounds(width in 1u32..=9999, height in 1u32..=9999) {
        let ratio = Ratio::reduced(width, height);
        prop_assert!(ratio.width() >= 1 && ratio.height() >= 1);
        prop_assert!(ratio.width() <= MAX_RATIO_COMPONENT);
        prop_assert!(ratio.height() <= MAX_RATIO_COMPONENT);
    }

    #[test]
    fn test_parsed_ratio_components_positive(raw in "[0-9]{0,4}:[0-9]{0,4}") {
        let ratio = Ratio::parse_or_default(Some(raw.as_str()));
        prop_assert!(ratio.width() >= 1 && ratio.height() >= 1);
    }
}
