//! DOM renderer for the particle store.
//!
//! Each live particle owns one absolutely positioned element keyed by its
//! id. Motion and fading are CSS keyframes running over the particle's
//! lifetime; this module only creates and removes elements. A burst heart's
//! element is dropped once its animation has run out, independently of the
//! store, which may keep the particle.

use crate::constants::*;
use crate::core::{HeartKind, Particle, ParticleId};
use fnv::{FnvHashMap, FnvHashSet};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomRenderer {
    document: web::Document,
    layer: web::Element,
    elements: FnvHashMap<ParticleId, web::HtmlElement>,
    // Burst hearts whose element already finished its animation.
    retired: FnvHashSet<ParticleId>,
}

impl DomRenderer {
    pub fn new(document: web::Document, layer: web::Element) -> Self {
        Self {
            document,
            layer,
            elements: FnvHashMap::default(),
            retired: FnvHashSet::default(),
        }
    }

    pub fn render(&mut self, particles: &[Particle], now: Duration) {
        let mut live: FnvHashSet<ParticleId> = FnvHashSet::default();
        for p in particles {
            let id = p.id();
            live.insert(id);
            if self.retired.contains(&id) {
                continue;
            }
            if p.is_burst() && now >= p.created_at() + p.lifetime() {
                if let Some(el) = self.elements.remove(&id) {
                    el.remove();
                }
                self.retired.insert(id);
                continue;
            }
            if !self.elements.contains_key(&id) {
                if let Some(el) = self.create_heart(p) {
                    self.elements.insert(id, el);
                }
            }
        }
        self.elements.retain(|id, el| {
            let keep = live.contains(id);
            if !keep {
                el.remove();
            }
            keep
        });
        self.retired.retain(|id| live.contains(id));
    }

    fn create_heart(&self, p: &Particle) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let lifetime = p.lifetime().as_secs_f32();
        let (class, glyph, animation) = match p.kind() {
            HeartKind::Trail => (
                TRAIL_HEART_CLASS,
                TRAIL_GLYPH,
                format!("trail-heart {:.3}s forwards ease-out", lifetime),
            ),
            HeartKind::Burst(g) => (
                BURST_HEART_CLASS,
                g.as_str(),
                format!("button-float {:.3}s forwards linear", lifetime),
            ),
        };
        _ = el.class_list().add_2(HEART_CLASS, class);
        el.set_text_content(Some(glyph));

        let pos = p.position();
        let style = el.style();
        _ = style.set_property("left", &format!("{:.3}%", pos.x));
        _ = style.set_property("top", &format!("{:.3}%", pos.y));
        _ = style.set_property("opacity", &format!("{:.3}", p.opacity()));
        _ = style.set_property("--heart-scale", &format!("{:.3}", p.size()));
        _ = style.set_property("--heart-opacity", &format!("{:.3}", p.opacity()));
        _ = style.set_property("animation", &animation);
        if p.is_burst() {
            let px = (EMOJI_BASE_PX * p.size()).max(EMOJI_MIN_PX);
            _ = style.set_property("font-size", &format!("{:.1}px", px));
        }

        self.layer.append_child(&el).ok()?;
        Some(el)
    }

    /// Removes every heart element, e.g. on teardown.
    pub fn clear(&mut self) {
        for (_, el) in self.elements.drain() {
            el.remove();
        }
        self.retired.clear();
    }
}
