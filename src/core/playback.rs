//! Background music state machine.
//!
//! `Idle -> AttemptingAutoplay -> {Playing | Blocked}`, `Playing <-> Paused`
//! by the manual toggle, `Blocked -> Playing` by the toggle or by a love
//! burst, and anything `-> Released` on teardown.
//!
//! Starting playback is asynchronous in the browser. The controller calls
//! [`AudioResource::play`] and hands the resulting future back to the caller
//! inside a [`PendingPlay`]; whoever drives the future reports the outcome
//! through [`PlaybackController::settle`]. Nothing ever awaits it inline.

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host rejected `play()`, typically the autoplay policy.
    #[error("playback blocked: {0}")]
    Blocked(String),
    /// The media resource could not be created or started.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}

pub type PlayFuture = Pin<Box<dyn Future<Output = Result<(), PlaybackError>>>>;

/// Media primitive the controller drives.
pub trait AudioResource {
    fn load(&mut self, source: &str);
    fn set_loop(&mut self, looping: bool);
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self) -> PlayFuture;
    fn pause(&mut self);
    fn dispose(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    AttemptingAutoplay,
    Playing,
    Blocked,
    Paused,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayKind {
    Autoplay,
    Manual,
    Resume,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub autoplay_attempted: bool,
    pub is_playing: bool,
}

/// A started `play()` whose outcome has not been reported yet.
pub struct PendingPlay {
    pub kind: PlayKind,
    pub attempt: u64,
    pub outcome: PlayFuture,
}

pub struct PlaybackController<A: AudioResource> {
    audio: A,
    state: PlayerState,
    flags: PlaybackState,
    attempt: u64,
    // Set by the first play that actually succeeded.
    started_once: bool,
}

impl<A: AudioResource> PlaybackController<A> {
    /// Loads `source` once, looping at `volume`. Playback is not started.
    pub fn new(mut audio: A, source: &str, volume: f32) -> Self {
        audio.load(source);
        audio.set_loop(true);
        audio.set_volume(volume.clamp(0.0, 1.0));
        Self {
            audio,
            state: PlayerState::Idle,
            flags: PlaybackState::default(),
            attempt: 0,
            started_once: false,
        }
    }

    fn begin(&mut self, kind: PlayKind) -> PendingPlay {
        self.attempt += 1;
        PendingPlay {
            kind,
            attempt: self.attempt,
            outcome: self.audio.play(),
        }
    }

    /// Startup autoplay attempt. Only the first call does anything.
    pub fn start_autoplay(&mut self) -> Option<PendingPlay> {
        if self.state != PlayerState::Idle {
            return None;
        }
        self.state = PlayerState::AttemptingAutoplay;
        Some(self.begin(PlayKind::Autoplay))
    }

    /// Manual play/pause button.
    pub fn toggle(&mut self) -> Option<PendingPlay> {
        if self.state == PlayerState::Released {
            return None;
        }
        if self.flags.is_playing {
            // Supersedes any play still in flight.
            self.attempt += 1;
            self.audio.pause();
            self.flags.is_playing = false;
            self.state = PlayerState::Paused;
            log::info!("[audio] paused");
            None
        } else {
            self.flags.is_playing = true;
            self.state = PlayerState::Playing;
            Some(self.begin(PlayKind::Manual))
        }
    }

    /// Retry after a blocked autoplay, triggered by a user action. Only
    /// while music has never successfully started.
    pub fn resume_on_interaction(&mut self) -> Option<PendingPlay> {
        if self.state != PlayerState::Blocked
            || !self.flags.autoplay_attempted
            || self.started_once
            || self.flags.is_playing
        {
            return None;
        }
        self.flags.is_playing = true;
        self.state = PlayerState::Playing;
        Some(self.begin(PlayKind::Resume))
    }

    /// Records the outcome of a pending play. Outcomes of superseded
    /// attempts are ignored.
    pub fn settle(&mut self, kind: PlayKind, attempt: u64, result: Result<(), PlaybackError>) {
        if kind == PlayKind::Autoplay {
            self.flags.autoplay_attempted = true;
        }
        if attempt != self.attempt || self.state == PlayerState::Released {
            log::debug!("[audio] ignoring stale {:?} outcome", kind);
            return;
        }
        match (kind, result) {
            (PlayKind::Autoplay, Ok(())) => {
                self.started_once = true;
                self.flags.is_playing = true;
                self.state = PlayerState::Playing;
                log::info!("[audio] autoplay successful");
            }
            (PlayKind::Autoplay, Err(e)) => {
                self.flags.is_playing = false;
                self.state = PlayerState::Blocked;
                log::info!("[audio] autoplay prevented by browser: {}", e);
            }
            (_, Ok(())) => {
                self.started_once = true;
                log::info!("[audio] {:?} playback started", kind);
            }
            (_, Err(e)) => {
                self.flags.is_playing = false;
                self.state = PlayerState::Blocked;
                log::warn!("[audio] {:?} playback failed: {}", kind, e);
            }
        }
    }

    /// Pauses and releases the media resource. Further calls are no-ops.
    pub fn release(&mut self) {
        if self.state == PlayerState::Released {
            return;
        }
        self.attempt += 1;
        self.audio.pause();
        self.audio.dispose();
        self.flags.is_playing = false;
        self.state = PlayerState::Released;
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn flags(&self) -> PlaybackState {
        self.flags
    }

    pub fn has_started(&self) -> bool {
        self.started_once
    }

    pub fn is_playing(&self) -> bool {
        self.flags.is_playing
    }

    /// Whether the manual music button should be visible.
    pub fn show_manual_control(&self) -> bool {
        self.flags.autoplay_attempted && !self.flags.is_playing
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
