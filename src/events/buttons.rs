use crate::constants::{MUSIC_TOGGLE_ID, SEND_LOVE_ID};
use crate::dom::{self, Listener};
use crate::frame::{self, FrameContext};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// "SEND MORE LOVE": spawns a burst, bumps the counter and, after a blocked
/// autoplay, retries the music.
pub fn wire_send_love(document: &web::Document, ctx: Rc<RefCell<FrameContext>>) -> Option<Listener> {
    dom::add_click_listener(document, SEND_LOVE_ID, move || {
        let pending = {
            let mut c = ctx.borrow_mut();
            let now = c.now();
            let sent = c.show.send_love(now);
            log::info!(
                "[hearts] +{} total={}",
                sent.added,
                c.show.scene().love_count()
            );
            c.render(now);
            c.refresh_ui();
            sent.resume
        };
        frame::drive_play(&ctx, pending);
    })
}

pub fn wire_music_toggle(
    document: &web::Document,
    ctx: Rc<RefCell<FrameContext>>,
) -> Option<Listener> {
    dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
        let pending = {
            let mut c = ctx.borrow_mut();
            let pending = c.show.toggle_music();
            c.refresh_ui();
            pending
        };
        frame::drive_play(&ctx, pending);
    })
}
