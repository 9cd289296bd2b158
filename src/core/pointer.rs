use glam::Vec2;

/// Latest pointer position in viewport percent.
///
/// Written by the pointer event handler and read by the trail sampler on the
/// same thread; the last write always wins. `None` until the first move.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    /// Records a move reported in device pixels. Degenerate viewports are ignored.
    pub fn moved(&mut self, x_px: f32, y_px: f32, viewport_w: f32, viewport_h: f32) {
        if let Some(pos) = viewport_percent(x_px, y_px, viewport_w, viewport_h) {
            self.last = Some(pos);
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.last
    }
}

#[inline]
pub fn viewport_percent(x_px: f32, y_px: f32, viewport_w: f32, viewport_h: f32) -> Option<Vec2> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(viewport_w) || !valid(viewport_h) || !x_px.is_finite() || !y_px.is_finite() {
        return None;
    }
    Some(Vec2::new(
        x_px / viewport_w * 100.0,
        y_px / viewport_h * 100.0,
    ))
}
