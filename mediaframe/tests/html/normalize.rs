//! Normalizing embeds in HTML documents

use mediaframe::formats::html::{extract_embeds, normalize_embeds, NormalizeOptions};
use mediaframe::{FrameAttributes, SizingMode};

const ARTICLE: &str = r#"<h1>Trip</h1>
<p>Highlights below.</p>
<iframe src="https://www.youtube.com/watch?v=dQw4w9WgXcQ" width="1920" height="1080" allowfullscreen="" title="Highlights"></iframe>
<div class="nvck-iframe" data-iframe-width="640" data-iframe-height="360" data-iframe-type="fixed" data-iframe-ratio="16:9"><div class="nvck-iframe-inner"><iframe class="nvck-iframe-element" src="https://vimeo.com/76979871" width="640" height="360"></iframe></div></div>
<iframe></iframe>
"#;

fn options(canonicalize: bool) -> NormalizeOptions {
    NormalizeOptions {
        canonicalize,
        defaults: FrameAttributes {
            frameborder: Some("0".to_string()),
            ..Default::default()
        },
    }
}

#[test]
fn test_extract_article() {
    let entities = extract_embeds(ARTICLE, &FrameAttributes::default());
    assert_eq!(entities.len(), 2);

    assert_eq!(entities[0].sizing_mode(), SizingMode::Auto);
    assert_eq!(entities[0].ratio().to_string(), "16:9");
    assert_eq!(entities[0].frame().allowfullscreen, Some(true));

    assert_eq!(entities[1].sizing_mode(), SizingMode::Fixed);
    assert_eq!((entities[1].width(), entities[1].height()), (640, 360));
}

#[test]
fn test_normalize_article() {
    let output = normalize_embeds(ARTICLE, &options(true)).unwrap();

    assert!(output.starts_with("<h1>Trip</h1>"));
    assert!(output.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
    assert!(output.contains("src=\"https://player.vimeo.com/video/76979871\""));
    assert_eq!(output.matches("class=\"nvck-iframe-element\"").count(), 2);
    assert_eq!(output.matches("frameborder=\"0\"").count(), 2);
    // the frame without a source is left alone
    assert!(output.contains("<iframe></iframe>"));
    // attributes outside the pass-through set are not carried
    assert!(!output.contains("title="));
}

#[test]
fn test_normalize_twice_is_stable() {
    let once = normalize_embeds(ARTICLE, &options(true)).unwrap();
    let twice = normalize_embeds(&once, &options(true)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_normalize_then_extract_matches() {
    let before = extract_embeds(ARTICLE, &options(false).defaults);
    let output = normalize_embeds(ARTICLE, &options(false)).unwrap();
    let after = extract_embeds(&output, &FrameAttributes::default());
    assert_eq!(before, after);
}
