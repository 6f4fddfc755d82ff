//! Provider implementations
//!
//! One module per media host. Each provider owns its URL patterns and embed
//! template; the registry decides the order they are consulted in.

pub mod dailymotion;
pub mod facebook;
pub mod tiktok;
pub mod vimeo;
pub mod youtube;

pub use dailymotion::DailymotionProvider;
pub use facebook::FacebookProvider;
pub use tiktok::TikTokProvider;
pub use vimeo::VimeoProvider;
pub use youtube::YouTubeProvider;
