// Host-side tests for the music controller and its interplay with bursts.
// Play futures resolve immediately and are driven with pollster.

use heart_rain::core::{
    AudioResource, HeartScene, HeartShow, PendingPlay, PlayFuture, PlayKind, PlaybackController,
    PlaybackError, PlayerState, SceneParams,
};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Default)]
struct MockAudio {
    source: Option<String>,
    looping: bool,
    volume: f32,
    plays: usize,
    pauses: usize,
    disposed: bool,
    outcomes: VecDeque<Result<(), PlaybackError>>,
}

impl MockAudio {
    fn with_outcomes(outcomes: Vec<Result<(), PlaybackError>>) -> Self {
        Self {
            outcomes: outcomes.into(),
            ..Self::default()
        }
    }
}

impl AudioResource for MockAudio {
    fn load(&mut self, source: &str) {
        self.source = Some(source.to_string());
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn play(&mut self) -> PlayFuture {
        self.plays += 1;
        let outcome = self.outcomes.pop_front().unwrap_or(Ok(()));
        Box::pin(std::future::ready(outcome))
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.source = None;
    }
}

fn blocked() -> Result<(), PlaybackError> {
    Err(PlaybackError::Blocked("NotAllowedError".into()))
}

fn controller(outcomes: Vec<Result<(), PlaybackError>>) -> PlaybackController<MockAudio> {
    PlaybackController::new(MockAudio::with_outcomes(outcomes), "/music.mp3", 0.7)
}

fn finish(player: &mut PlaybackController<MockAudio>, pending: Option<PendingPlay>) {
    let pending = pending.expect("a play attempt");
    let result = pollster::block_on(pending.outcome);
    player.settle(pending.kind, pending.attempt, result);
}

fn show(outcomes: Vec<Result<(), PlaybackError>>) -> HeartShow<MockAudio> {
    HeartShow::new(HeartScene::new(SceneParams::default(), 3), controller(outcomes))
}

fn finish_show(show: &mut HeartShow<MockAudio>, pending: Option<PendingPlay>) {
    let pending = pending.expect("a play attempt");
    let result = pollster::block_on(pending.outcome);
    show.settle_music(pending.kind, pending.attempt, result);
}

#[test]
fn new_configures_resource_without_playing() {
    let player = controller(vec![]);
    let audio = player.audio();
    assert_eq!(audio.source.as_deref(), Some("/music.mp3"));
    assert!(audio.looping);
    assert!((audio.volume - 0.7).abs() < 1e-6);
    assert_eq!(audio.plays, 0);
    assert_eq!(player.state(), PlayerState::Idle);
    assert!(!player.show_manual_control());
}

#[test]
fn autoplay_success_hides_manual_control() {
    let mut player = controller(vec![Ok(())]);
    let pending = player.start_autoplay();
    assert_eq!(player.state(), PlayerState::AttemptingAutoplay);
    finish(&mut player, pending);
    assert_eq!(player.state(), PlayerState::Playing);
    let flags = player.flags();
    assert!(flags.autoplay_attempted && flags.is_playing);
    assert!(!player.show_manual_control());
}

#[test]
fn autoplay_is_attempted_once() {
    let mut player = controller(vec![blocked()]);
    let pending = player.start_autoplay();
    assert!(player.start_autoplay().is_none());
    finish(&mut player, pending);
    assert!(player.start_autoplay().is_none());
    assert_eq!(player.audio().plays, 1);
}

#[test]
fn autoplay_rejected_shows_manual_control() {
    let mut player = controller(vec![blocked()]);
    let pending = player.start_autoplay();
    finish(&mut player, pending);
    assert_eq!(player.state(), PlayerState::Blocked);
    let flags = player.flags();
    assert!(flags.autoplay_attempted);
    assert!(!flags.is_playing);
    assert!(player.show_manual_control());
}

#[test]
fn burst_after_blocked_autoplay_retries_once() {
    let mut show = show(vec![blocked(), Ok(())]);
    let pending = show.start_music();
    finish_show(&mut show, pending);

    let sent = show.send_love(Duration::ZERO);
    assert!(sent.added >= 2);
    assert_eq!(show.player().audio().plays, 2);
    finish_show(&mut show, sent.resume);
    assert!(show.player().flags().autoplay_attempted);
    assert!(show.player().is_playing());

    let again = show.send_love(Duration::from_millis(10));
    assert!(again.resume.is_none());
    assert_eq!(show.player().audio().plays, 2);
}

#[test]
fn failed_resume_keeps_autoplay_flag_and_hearts() {
    let mut show = show(vec![blocked(), blocked()]);
    let pending = show.start_music();
    finish_show(&mut show, pending);

    let sent = show.send_love_batch(4, Duration::ZERO);
    assert_eq!(show.player().audio().plays, 2);
    finish_show(&mut show, sent.resume);

    let flags = show.player().flags();
    assert!(flags.autoplay_attempted);
    assert!(!flags.is_playing);
    assert!(show.player().show_manual_control());
    assert_eq!(show.scene().love_count(), 4);
    assert_eq!(show.scene().store().burst_count(), 4);
}

#[test]
fn burst_before_autoplay_settles_does_not_retry() {
    let mut show = show(vec![blocked()]);
    let _pending = show.start_music();
    let sent = show.send_love(Duration::ZERO);
    assert!(sent.resume.is_none());
    assert_eq!(show.player().audio().plays, 1);
}

#[test]
fn toggle_while_playing_pauses() {
    let mut player = controller(vec![Ok(())]);
    let pending = player.start_autoplay();
    finish(&mut player, pending);

    assert!(player.toggle().is_none());
    assert!(!player.is_playing());
    assert_eq!(player.audio().pauses, 1);
    assert_eq!(player.state(), PlayerState::Paused);
}

#[test]
fn toggle_from_blocked_plays_optimistically() {
    let mut player = controller(vec![blocked(), Ok(())]);
    let pending = player.start_autoplay();
    finish(&mut player, pending);

    let pending = player.toggle();
    assert!(player.is_playing());
    assert_eq!(player.state(), PlayerState::Playing);
    assert!(!player.show_manual_control());
    finish(&mut player, pending);
    assert!(player.is_playing());

    // And back to paused.
    assert!(player.toggle().is_none());
    assert_eq!(player.state(), PlayerState::Paused);
}

#[test]
fn paused_music_is_not_resumed_by_bursts() {
    let mut show = show(vec![Ok(())]);
    let pending = show.start_music();
    finish_show(&mut show, pending);
    assert!(show.toggle_music().is_none());

    let sent = show.send_love(Duration::ZERO);
    assert!(sent.resume.is_none());
    assert!(!show.player().is_playing());
}

#[test]
fn stale_outcome_is_ignored() {
    let mut player = controller(vec![blocked(), blocked()]);
    let autoplay = player.start_autoplay();
    finish(&mut player, autoplay);

    let manual = player.toggle().expect("manual play");
    // User pauses again before the play promise settles.
    assert!(player.toggle().is_none());
    let result = pollster::block_on(manual.outcome);
    player.settle(manual.kind, manual.attempt, result);
    assert_eq!(player.state(), PlayerState::Paused);
    assert_eq!(manual.kind, PlayKind::Manual);
}

#[test]
fn release_pauses_and_disposes() {
    let mut show = show(vec![Ok(())]);
    let pending = show.start_music();
    finish_show(&mut show, pending);

    show.teardown();
    let audio = show.player().audio();
    assert!(audio.disposed);
    assert!(audio.source.is_none());
    assert_eq!(audio.pauses, 1);
    assert_eq!(show.player().state(), PlayerState::Released);
    assert!(!show.player().is_playing());

    // Idempotent, and nothing restarts the music afterwards.
    show.teardown();
    assert_eq!(show.player().audio().pauses, 1);
    assert!(show.toggle_music().is_none());
}

#[test]
fn burst_does_not_retry_after_music_has_played() {
    let mut show = show(vec![Ok(()), blocked()]);
    let pending = show.start_music();
    finish_show(&mut show, pending);
    assert!(show.player().has_started());

    // Pause, then a manual play that the browser rejects.
    assert!(show.toggle_music().is_none());
    let manual = show.toggle_music();
    finish_show(&mut show, manual);
    assert_eq!(show.player().state(), PlayerState::Blocked);
    assert_eq!(show.player().audio().plays, 2);

    let sent = show.send_love(Duration::ZERO);
    assert!(sent.resume.is_none());
    assert_eq!(show.player().audio().plays, 2);
    assert!(!show.player().is_playing());
}

#[test]
fn burst_retries_only_until_music_first_starts() {
    let mut show = show(vec![blocked(), blocked(), Ok(())]);
    let pending = show.start_music();
    finish_show(&mut show, pending);

    // A failed retry keeps the door open for the next burst.
    let first = show.send_love(Duration::ZERO);
    finish_show(&mut show, first.resume);
    assert!(!show.player().has_started());

    let second = show.send_love(Duration::from_millis(10));
    finish_show(&mut show, second.resume);
    assert!(show.player().has_started());
    assert_eq!(show.player().audio().plays, 3);
}
