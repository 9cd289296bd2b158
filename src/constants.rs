// DOM hooks provided by index.html.
pub const HEARTS_LAYER_ID: &str = "hearts";
pub const COUNTER_ID: &str = "heart-count";
pub const LAST_ADDED_ID: &str = "last-added";
pub const SEND_LOVE_ID: &str = "send-love";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";

// Element class applied to every heart; the keyframes live in index.html.
pub const HEART_CLASS: &str = "heart";
pub const TRAIL_HEART_CLASS: &str = "heart-trail";
pub const BURST_HEART_CLASS: &str = "heart-burst";

// Trail hearts use a plain glyph tinted by CSS.
pub const TRAIL_GLYPH: &str = "\u{2665}";

// Burst emoji font sizing (px)
pub const EMOJI_BASE_PX: f32 = 20.0;
pub const EMOJI_MIN_PX: f32 = 14.0;
