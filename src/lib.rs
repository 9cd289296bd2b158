//! Floating hearts, a love counter and background music for the web.
//!
//! `core` is plain Rust and builds on any target; everything that touches the
//! browser is compiled for `wasm32` only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use web_app::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use crate::audio::HtmlAudio;
    use crate::constants::HEARTS_LAYER_ID;
    use crate::core::constants::{
        MUSIC_SOURCE, MUSIC_VOLUME, SWEEP_INTERVAL, TRAIL_SAMPLE_INTERVAL,
    };
    use crate::core::{HeartScene, HeartShow, PageExit, PlaybackController, SceneParams};
    use crate::dom::Listener;
    use crate::events;
    use crate::frame::{self, FrameContext};
    use crate::render::DomRenderer;
    use crate::timers::Interval;
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    /// Everything that must be released on teardown.
    struct App {
        ctx: Rc<RefCell<FrameContext>>,
        _intervals: Vec<Interval>,
        _listeners: Vec<Listener>,
    }

    impl Drop for App {
        fn drop(&mut self) {
            let mut c = self.ctx.borrow_mut();
            c.show.teardown();
            c.renderer.clear();
            log::info!("[app] stopped");
        }
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("heart-rain starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    /// Cancels the timers, detaches listeners and releases the music.
    #[wasm_bindgen]
    pub fn stop() {
        // Dropped outside the borrow so listener closures are not torn down
        // while APP is still borrowed.
        let app = APP.with(|slot| slot.borrow_mut().take());
        drop(app);
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let layer = document
            .get_element_by_id(HEARTS_LAYER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", HEARTS_LAYER_ID))?;

        let player = PlaybackController::new(HtmlAudio::new(), MUSIC_SOURCE, MUSIC_VOLUME);
        let scene = HeartScene::with_rng(SceneParams::default(), StdRng::from_entropy());
        let ctx = Rc::new(RefCell::new(FrameContext {
            show: HeartShow::new(scene, player),
            renderer: DomRenderer::new(document.clone(), layer),
            document: document.clone(),
            started: Instant::now(),
        }));

        let trail_ctx = ctx.clone();
        let sweep_ctx = ctx.clone();
        let intervals = vec![
            Interval::new(TRAIL_SAMPLE_INTERVAL, move || trail_ctx.borrow_mut().trail_tick())
                .map_err(|e| anyhow::anyhow!("trail interval: {:?}", e))?,
            Interval::new(SWEEP_INTERVAL, move || sweep_ctx.borrow_mut().sweep_tick())
                .map_err(|e| anyhow::anyhow!("sweep interval: {:?}", e))?,
        ];

        let mut listeners = vec![events::wire_pointermove(&window, ctx.clone())];
        listeners.extend(events::wire_send_love(&document, ctx.clone()));
        listeners.extend(events::wire_music_toggle(&document, ctx.clone()));
        listeners.push(Listener::new(&window, "pagehide", |ev: web::Event| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .map_or(false, |e| e.persisted());
            let exit = PageExit::from_persisted(persisted);
            if !exit.releases_resources() {
                log::info!("[app] page cached, keeping state");
                return;
            }
            // Defer: this listener is owned by the app being dropped.
            spawn_local(async { stop() });
        }));

        let pending = {
            let mut c = ctx.borrow_mut();
            let pending = c.show.start_music();
            c.refresh_ui();
            pending
        };
        frame::drive_play(&ctx, pending);

        APP.with(|slot| {
            *slot.borrow_mut() = Some(App {
                ctx,
                _intervals: intervals,
                _listeners: listeners,
            })
        });
        Ok(())
    }
}
