//! Every accepted URL shape of a provider converges on one embed URL

use mediaframe::{canonicalize, ProviderRegistry};

fn assert_converges(inputs: &[&str], expected: &str) {
    for input in inputs {
        assert_eq!(canonicalize(input), expected, "input: {input}");
    }
}

#[test]
fn test_youtube_forms_converge() {
    assert_converges(
        &[
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ],
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
    );
}

#[test]
fn test_vimeo_forms_converge() {
    assert_converges(
        &[
            "https://vimeo.com/76979871",
            "https://www.vimeo.com/76979871",
            "https://vimeo.com/channels/staffpicks/76979871",
        ],
        "https://player.vimeo.com/video/76979871",
    );
}

#[test]
fn test_tiktok_forms_converge() {
    assert_converges(
        &[
            "https://www.tiktok.com/@scout2015/video/6718335390845095173",
            "https://tiktok.com/@scout2015/video/6718335390845095173?lang=en",
        ],
        "https://www.tiktok.com/embed/6718335390845095173",
    );
}

#[test]
fn test_dailymotion_forms_converge() {
    assert_converges(
        &[
            "https://www.dailymotion.com/video/x7tgad0",
            "https://dai.ly/x7tgad0",
        ],
        "https://www.dailymotion.com/embed/video/x7tgad0",
    );
}

#[test]
fn test_facebook_wraps_whole_url() {
    // The embed endpoint takes the original page URL, not the video id, so two
    // page URLs for the same video stay distinct.
    let page = "https://www.facebook.com/facebook/videos/10153231379946729/";
    assert_eq!(
        canonicalize(page),
        "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com%2Ffacebook%2Fvideos%2F10153231379946729%2F"
    );

    let short = "https://fb.watch/abc-123/";
    assert_eq!(
        canonicalize(short),
        "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Ffb.watch%2Fabc-123%2F"
    );
}

#[test]
fn test_embed_forms_are_fixed_points() {
    for url in [
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?start=10",
        "https://player.vimeo.com/video/76979871",
        "https://www.tiktok.com/embed/v2/6718335390845095173",
        "https://www.dailymotion.com/embed/video/x7tgad0",
        "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com%2Fx%2Fvideos%2F1%2F&show_text=0",
    ] {
        assert_eq!(canonicalize(url), url);
    }
}

#[test]
fn test_unknown_urls_pass_through() {
    for url in [
        "https://example.com/page",
        "/internal/page",
        "",
        "not a url",
        "https://www.youtube.com/watch?v=short",
        "https://www.youtube.com/channel/UC123",
        "https://vimeo.com/about",
        "https://example.com/?u=https://youtu.be/dQw4w9WgXcQ",
    ] {
        assert_eq!(canonicalize(url), url);
    }
}

#[test]
fn test_default_registry_lists_providers_in_priority_order() {
    assert_eq!(
        ProviderRegistry::global().list_providers(),
        vec!["youtube", "vimeo", "facebook", "tiktok", "dailymotion"]
    );
}
