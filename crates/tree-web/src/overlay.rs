//! DOM overlay: start screen, greeting, card state, mode label, gesture
//! status, hint and perf monitor.

use tree_core::{FpsBand, Formation, FrameReport, Pose, SceneConfig};
use web_sys as web;

use crate::constants::{
    AUTOPLAY_BADGE_HTML, AUTOPLAY_BADGE_ID, CARD_ID, CARD_MESSAGE_ID, GESTURE_STATUS_ID,
    GREETING_FROM_ID, GREETING_TO_ID, HINT_SELECTOR, MODE_LABEL_ID, PERF_ID, START_OVERLAY_ID,
};

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Fill in the recipient, sender and message. Sender and message lines are
/// hidden when the link leaves them out.
pub fn show_greeting(document: &web::Document, config: &SceneConfig) {
    if let Some(el) = document.get_element_by_id(GREETING_TO_ID) {
        el.set_text_content(Some(&config.salutation()));
    }
    if let Some(el) = document.get_element_by_id(GREETING_FROM_ID) {
        let sender = config.sender_line();
        el.set_text_content(sender.as_deref());
        set_visible(&el, sender.is_some());
    }
    if let Some(el) = document.get_element_by_id(CARD_MESSAGE_ID) {
        el.set_text_content(Some(&config.message));
        set_visible(&el, !config.message.is_empty());
    }
}

/// Live pose feedback while the card is open under hand control; the
/// autoplay badge replaces it once the camera has failed.
pub fn sync_status(document: &web::Document, pose: Pose, card_open: bool, autoplay: bool) {
    if let Some(el) = document.get_element_by_id(GESTURE_STATUS_ID) {
        el.set_text_content(Some(pose.status_text()));
        let _ = el.set_attribute("data-pose", &format!("{:?}", pose).to_lowercase());
        set_visible(&el, card_open && !autoplay);
    }
    if let Some(el) = document.get_element_by_id(AUTOPLAY_BADGE_ID) {
        if autoplay && el.child_element_count() == 0 {
            el.set_inner_html(AUTOPLAY_BADGE_HTML);
        }
        set_visible(&el, autoplay);
    }
}

/// Reflect the card state and the formation label. The label is only shown
/// while the card is open.
pub fn sync_mode(document: &web::Document, card_open: bool, formation: Formation) {
    if let Some(card) = document.get_element_by_id(CARD_ID) {
        let _ = card.set_attribute("data-open", if card_open { "1" } else { "0" });
    }
    if let Some(label) = document.get_element_by_id(MODE_LABEL_ID) {
        label.set_text_content(Some(formation.label()));
        set_visible(&label, card_open);
    }
}

pub fn toggle_hint(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(HINT_SELECTOR) {
        toggle(&el);
    }
}

pub fn toggle_perf(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PERF_ID) {
        toggle(&el);
    }
}

pub fn show_perf(document: &web::Document, show: bool) {
    if let Some(el) = document.get_element_by_id(PERF_ID) {
        set_visible(&el, show);
    }
}

/// Write a stats report into the perf monitor. The FPS band lands in a
/// `data-band` attribute for styling.
pub fn update_perf(document: &web::Document, report: &FrameReport) {
    let Some(el) = document.get_element_by_id(PERF_ID) else {
        return;
    };
    let band = match report.band() {
        FpsBand::Good => "good",
        FpsBand::Fair => "fair",
        FpsBand::Poor => "poor",
    };
    let _ = el.set_attribute("data-band", band);
    el.set_text_content(Some(&format!(
        "FPS: {} | Frame: {:.2}ms | Particles: {}",
        report.fps, report.frame_time_ms, report.particle_count
    )));
}

fn is_visible(el: &web::Element) -> bool {
    el.get_attribute("data-visible").as_deref() == Some("1")
}

fn set_visible(el: &web::Element, show: bool) {
    let _ = el.set_attribute("data-visible", if show { "1" } else { "0" });
    let _ = el.set_attribute("style", if show { "" } else { "display:none" });
}

fn toggle(el: &web::Element) {
    set_visible(el, !is_visible(el));
}
