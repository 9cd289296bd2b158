use crate::audio::HtmlAudio;
use crate::core::{HeartShow, PendingPlay};
use crate::overlay;
use crate::render::DomRenderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub show: HeartShow<HtmlAudio>,
    pub renderer: DomRenderer,
    pub document: web::Document,
    pub started: Instant,
}

impl FrameContext {
    /// Scene clock: time since the page started.
    pub fn now(&self) -> Duration {
        Instant::now() - self.started
    }

    pub fn trail_tick(&mut self) {
        let now = self.now();
        self.show.tick_trail(now);
        self.render(now);
    }

    pub fn sweep_tick(&mut self) {
        let now = self.now();
        let removed = self.show.sweep(now);
        if removed > 0 {
            log::debug!(
                "[sweep] removed={} live={}",
                removed,
                self.show.scene().store().len()
            );
        }
        self.render(now);
    }

    pub fn render(&mut self, now: Duration) {
        self.renderer.render(self.show.scene().particles(), now);
    }

    pub fn refresh_ui(&self) {
        let scene = self.show.scene();
        overlay::update_counter(&self.document, scene.love_count(), scene.last_added());
        overlay::update_music_button(&self.document, self.show.player().show_manual_control());
    }
}

/// Drives a started `play()` to completion without blocking the caller and
/// reports the outcome back to the controller.
pub fn drive_play(ctx: &Rc<RefCell<FrameContext>>, pending: Option<PendingPlay>) {
    let Some(PendingPlay {
        kind,
        attempt,
        outcome,
    }) = pending
    else {
        return;
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        let result = outcome.await;
        let mut c = ctx.borrow_mut();
        c.show.settle_music(kind, attempt, result);
        c.refresh_ui();
    });
}
