//! canonicalize(canonicalize(u)) == canonicalize(u)

use mediaframe::canonicalize;
use proptest::prelude::*;

fn known_shapes() -> impl Strategy<Value = String> {
    let youtube_id = "[A-Za-z0-9_-]{11}";
    prop_oneof![
        youtube_id.prop_map(|id| format!("https://www.youtube.com/watch?v={id}")),
        youtube_id.prop_map(|id| format!("https://youtu.be/{id}")),
        youtube_id.prop_map(|id| format!("https://www.youtube.com/shorts/{id}")),
        "[0-9]{1,12}".prop_map(|id| format!("https://vimeo.com/{id}")),
        "[0-9]{1,19}".prop_map(|id| format!("https://www.tiktok.com/@user/video/{id}")),
        "[a-z0-9]{1,10}".prop_map(|id| format!("https://dai.ly/{id}")),
        ("[a-z.]{1,12}", "[0-9]{1,16}")
            .prop_map(|(page, id)| format!("https://www.facebook.com/{page}/videos/{id}/")),
        "[A-Za-z0-9_-]{1,12}".prop_map(|token| format!("https://fb.watch/{token}/")),
    ]
}

proptest! {
    #[test]
    fn test_known_shapes_idempotent(url in known_shapes()) {
        let once = canonicalize(&url);
        prop_assert_ne!(&once, &url);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn test_arbitrary_input_idempotent(url in "\\PC{0,80}") {
        let once = canonicalize(&url);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn test_arbitrary_https_idempotent(path in "[a-z0-9./?=&_-]{0,40}") {
        let url = format!("https://{path}");
        let once = canonicalize(&url);
        prop_assert_eq!(canonicalize(&once), once);
    }
}
