//! Particle lifecycle: trail sampling, love bursts, expiry sweeps and the
//! love counter.
//!
//! All operations take the current scene time explicitly so that the web
//! front-end can drive them from browser timers and tests can drive them
//! from a fake clock.

use crate::core::constants::*;
use crate::core::particle::{Particle, ParticleId};
use crate::core::pointer::PointerTracker;
use crate::core::store::ParticleStore;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// What the expiry sweep does with burst hearts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BurstRetention {
    /// Burst hearts stay in the store for the whole session.
    #[default]
    Keep,
    /// Burst hearts are swept like trail hearts once lifetime + grace passed.
    ExpireAfterLifetime,
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub max_trail_particles: usize,
    pub expiry_grace: Duration,
    pub burst_retention: BurstRetention,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            max_trail_particles: MAX_TRAIL_PARTICLES,
            expiry_grace: EXPIRY_GRACE,
            burst_retention: BurstRetention::Keep,
        }
    }
}

pub type BurstBatch = SmallVec<[Particle; BURST_COUNT_MAX as usize]>;

pub struct HeartScene {
    pub params: SceneParams,
    store: ParticleStore,
    pointer: PointerTracker,
    love_count: u64,
    last_added: u32,
    next_id: u64,
    rng: StdRng,
}

impl HeartScene {
    pub fn new(params: SceneParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: SceneParams, rng: StdRng) -> Self {
        Self {
            params,
            store: ParticleStore::new(),
            pointer: PointerTracker::default(),
            love_count: 0,
            last_added: 0,
            next_id: 0,
            rng,
        }
    }

    fn alloc_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn pointer_moved(&mut self, x_px: f32, y_px: f32, viewport_w: f32, viewport_h: f32) {
        self.pointer.moved(x_px, y_px, viewport_w, viewport_h);
    }

    /// One trail sampler tick. Returns the new particle's id, or `None` while
    /// the pointer has never moved.
    pub fn sample_trail(&mut self, now: Duration) -> Option<ParticleId> {
        let position = self.pointer.position()?;
        let id = self.alloc_id();
        let heart = Particle::trail(id, now, position, &mut self.rng);
        self.store.add([heart]);
        self.cap_trail();
        Some(id)
    }

    // Oldest trail hearts go first; non-trail hearts are kept in front.
    fn cap_trail(&mut self) {
        let max = self.params.max_trail_particles;
        if self.store.trail_count() <= max {
            return;
        }
        let (trail, mut rest): (Vec<_>, Vec<_>) =
            self.store.take().into_iter().partition(Particle::is_trail);
        let drop = trail.len() - max;
        rest.extend(trail.into_iter().skip(drop));
        self.store.replace(rest);
    }

    /// Spawns a random-sized love burst and returns its size.
    pub fn send_love(&mut self, now: Duration) -> u32 {
        let count = self.rng.gen_range(BURST_COUNT_MIN..=BURST_COUNT_MAX);
        self.send_love_batch(count, now)
    }

    /// Spawns exactly `count` burst hearts as one store update and adds them
    /// to the love counter. [`send_love`](Self::send_love) draws `count`;
    /// this entry point lets tests pin the batch size.
    pub fn send_love_batch(&mut self, count: u32, now: Duration) -> u32 {
        let mut batch = BurstBatch::new();
        for _ in 0..count {
            let id = self.alloc_id();
            batch.push(Particle::burst(id, now, &mut self.rng));
        }
        self.store.add(batch);
        self.love_count += u64::from(count);
        self.last_added = count;
        count
    }

    /// Expiry sweep. Returns how many particles were removed.
    pub fn sweep(&mut self, now: Duration) -> usize {
        let grace = self.params.expiry_grace;
        let sweep_bursts = self.params.burst_retention == BurstRetention::ExpireAfterLifetime;
        self.store.remove_where(|p| {
            (p.is_trail() || (sweep_bursts && p.is_burst())) && p.is_expired(now, grace)
        })
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.all()
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn love_count(&self) -> u64 {
        self.love_count
    }

    /// Size of the most recent burst, for "+N" feedback.
    pub fn last_added(&self) -> u32 {
        self.last_added
    }
}
