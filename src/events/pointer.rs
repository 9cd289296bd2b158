use crate::dom::Listener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tracks the mouse over the whole window; the trail sampler reads the
/// latest position on its own cadence.
pub fn wire_pointermove(window: &web::Window, ctx: Rc<RefCell<FrameContext>>) -> Listener {
    let wnd = window.clone();
    Listener::new(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (Some(w), Some(h)) = (viewport_dim(wnd.inner_width()), viewport_dim(wnd.inner_height()))
        else {
            return;
        };
        ctx.borrow_mut()
            .show
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32, w, h);
    })
}

#[inline]
fn viewport_dim(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Option<f32> {
    v.ok().and_then(|v| v.as_f64()).map(|v| v as f32)
}
