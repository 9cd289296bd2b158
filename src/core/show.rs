use crate::core::particle::ParticleId;
use crate::core::playback::{AudioResource, PendingPlay, PlayKind, PlaybackController, PlaybackError};
use crate::core::scene::HeartScene;
use std::time::Duration;

/// Result of one "send more love" press.
pub struct LoveSent {
    pub added: u32,
    /// Playback retry started as a side effect, to be driven by the caller.
    pub resume: Option<PendingPlay>,
}

/// The single owner of all page state: hearts, counter and music.
pub struct HeartShow<A: AudioResource> {
    scene: HeartScene,
    player: PlaybackController<A>,
}

impl<A: AudioResource> HeartShow<A> {
    pub fn new(scene: HeartScene, player: PlaybackController<A>) -> Self {
        Self { scene, player }
    }

    pub fn pointer_moved(&mut self, x_px: f32, y_px: f32, viewport_w: f32, viewport_h: f32) {
        self.scene.pointer_moved(x_px, y_px, viewport_w, viewport_h);
    }

    pub fn tick_trail(&mut self, now: Duration) -> Option<ParticleId> {
        self.scene.sample_trail(now)
    }

    pub fn sweep(&mut self, now: Duration) -> usize {
        self.scene.sweep(now)
    }

    pub fn send_love(&mut self, now: Duration) -> LoveSent {
        let resume = self.player.resume_on_interaction();
        let added = self.scene.send_love(now);
        LoveSent { added, resume }
    }

    /// Same as [`send_love`](Self::send_love) with a fixed batch size, so
    /// tests can pin the batch size.
    pub fn send_love_batch(&mut self, count: u32, now: Duration) -> LoveSent {
        let resume = self.player.resume_on_interaction();
        let added = self.scene.send_love_batch(count, now);
        LoveSent { added, resume }
    }

    pub fn start_music(&mut self) -> Option<PendingPlay> {
        self.player.start_autoplay()
    }

    pub fn toggle_music(&mut self) -> Option<PendingPlay> {
        self.player.toggle()
    }

    pub fn settle_music(&mut self, kind: PlayKind, attempt: u64, result: Result<(), PlaybackError>) {
        self.player.settle(kind, attempt, result);
    }

    pub fn teardown(&mut self) {
        self.player.release();
    }

    pub fn scene(&self) -> &HeartScene {
        &self.scene
    }

    pub fn player(&self) -> &PlaybackController<A> {
        &self.player
    }
}
