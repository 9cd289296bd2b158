use crate::constants::{COUNTER_ID, LAST_ADDED_ID, MUSIC_TOGGLE_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn counter_text(count: u64) -> String {
    format!("{} Hearts", count)
}

/// Refresh the love counter and the "+N" badge.
pub fn update_counter(document: &web::Document, count: u64, last_added: u32) {
    dom::set_text(document, COUNTER_ID, &counter_text(count));
    if last_added > 0 {
        dom::set_text(document, LAST_ADDED_ID, &format!("+{}", last_added));
        show(document, LAST_ADDED_ID);
    }
}

/// The music button is only offered while autoplay failed and nothing plays.
pub fn update_music_button(document: &web::Document, visible: bool) {
    if visible {
        show(document, MUSIC_TOGGLE_ID);
    } else {
        hide(document, MUSIC_TOGGLE_ID);
    }
}
