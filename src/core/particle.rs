//! Heart particle records.
//!
//! A particle is created once by a producer and never mutated afterwards:
//! every field is private and only exposed through getters. On-screen motion
//! is the renderer's job (CSS keyframes over [`Particle::lifetime`]).

use crate::core::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// Unique, monotonically increasing particle identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// Emoji palette used by burst hearts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeartGlyph {
    Red,
    Sparkling,
    Growing,
    Beating,
    Two,
    Revolving,
    Arrow,
    Ribbon,
}

impl HeartGlyph {
    pub const ALL: [HeartGlyph; 8] = [
        HeartGlyph::Red,
        HeartGlyph::Sparkling,
        HeartGlyph::Growing,
        HeartGlyph::Beating,
        HeartGlyph::Two,
        HeartGlyph::Revolving,
        HeartGlyph::Arrow,
        HeartGlyph::Ribbon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeartGlyph::Red => "\u{2764}\u{fe0f}",
            HeartGlyph::Sparkling => "\u{1f496}",
            HeartGlyph::Growing => "\u{1f497}",
            HeartGlyph::Beating => "\u{1f493}",
            HeartGlyph::Two => "\u{1f495}",
            HeartGlyph::Revolving => "\u{1f49e}",
            HeartGlyph::Arrow => "\u{1f498}",
            HeartGlyph::Ribbon => "\u{1f49d}",
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&HeartGlyph::Red)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartKind {
    /// Short-lived heart that follows the pointer.
    Trail,
    /// Long-lived emoji heart from a "send more love" burst.
    Burst(HeartGlyph),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    created_at: Duration,
    position: Vec2,
    size: f32,
    lifetime: Duration,
    opacity: f32,
    kind: HeartKind,
}

impl Particle {
    /// Trail heart at `position` (viewport percent).
    pub fn trail<R: Rng>(
        id: ParticleId,
        created_at: Duration,
        position: Vec2,
        rng: &mut R,
    ) -> Self {
        Self {
            id,
            created_at,
            position,
            size: rng.gen_range(TRAIL_SIZE_MIN..=TRAIL_SIZE_MAX),
            lifetime: Duration::from_secs_f32(
                rng.gen_range(TRAIL_LIFETIME_MIN_SEC..=TRAIL_LIFETIME_MAX_SEC),
            ),
            opacity: TRAIL_OPACITY,
            kind: HeartKind::Trail,
        }
    }

    /// Burst heart at a random spot along the bottom edge.
    pub fn burst<R: Rng>(id: ParticleId, created_at: Duration, rng: &mut R) -> Self {
        Self {
            id,
            created_at,
            position: Vec2::new(rng.gen_range(0.0..100.0), BURST_Y_PERCENT),
            size: rng.gen_range(BURST_SIZE_MIN..=BURST_SIZE_MAX),
            lifetime: Duration::from_secs_f32(
                rng.gen_range(BURST_LIFETIME_MIN_SEC..=BURST_LIFETIME_MAX_SEC),
            ),
            opacity: rng.gen_range(BURST_OPACITY_MIN..=BURST_OPACITY_MAX),
            kind: HeartKind::Burst(HeartGlyph::random(rng)),
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn created_at(&self) -> Duration {
        self.created_at
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn kind(&self) -> HeartKind {
        self.kind
    }

    #[inline]
    pub fn is_trail(&self) -> bool {
        matches!(self.kind, HeartKind::Trail)
    }

    #[inline]
    pub fn is_burst(&self) -> bool {
        matches!(self.kind, HeartKind::Burst(_))
    }

    /// True once `now` is at least `lifetime + grace` past creation.
    #[inline]
    pub fn is_expired(&self, now: Duration, grace: Duration) -> bool {
        now.saturating_sub(self.created_at) >= self.lifetime + grace
    }
}
