// Particle lifecycle and playback tuning constants.
//
// Size, lifetime and opacity ranges are inclusive and sampled uniformly.
use std::time::Duration;

// Scheduling cadences
pub const TRAIL_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(5);

// Trail hearts
pub const MAX_TRAIL_PARTICLES: usize = 200;
pub const TRAIL_SIZE_MIN: f32 = 0.8;
pub const TRAIL_SIZE_MAX: f32 = 2.0;
pub const TRAIL_LIFETIME_MIN_SEC: f32 = 1.5;
pub const TRAIL_LIFETIME_MAX_SEC: f32 = 3.0;
pub const TRAIL_OPACITY: f32 = 0.8;

// Burst hearts
pub const BURST_COUNT_MIN: u32 = 2; // inclusive
pub const BURST_COUNT_MAX: u32 = 8; // inclusive
pub const BURST_Y_PERCENT: f32 = 95.0; // just above the bottom edge
pub const BURST_SIZE_MIN: f32 = 0.6;
pub const BURST_SIZE_MAX: f32 = 2.1;
pub const BURST_LIFETIME_MIN_SEC: f32 = 8.0;
pub const BURST_LIFETIME_MAX_SEC: f32 = 12.0;
pub const BURST_OPACITY_MIN: f32 = 0.7;
pub const BURST_OPACITY_MAX: f32 = 1.0;

// Extra time granted to an exit animation before a sweep may drop it
pub const EXPIRY_GRACE: Duration = Duration::from_millis(500);

// Music
pub const MUSIC_SOURCE: &str = "/sexyback.mp3";
pub const MUSIC_VOLUME: f32 = 0.7;
