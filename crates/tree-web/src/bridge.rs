//! JS-facing entry points for the hand tracker and the page lifecycle.
//!
//! The tracker runs at its own cadence and calls in with one frame of
//! landmarks at a time. Classifier and mode state live in a thread-local since
//! the page is single-threaded; the render loop only sees the formation
//! through a [`FormationReader`].

use instant::Instant;
use std::cell::RefCell;
use tree_core::{
    Formation, FormationReader, GestureClassifier, GestureOutput, HandLandmarks, ModeChange,
    ModeController,
};
use wasm_bindgen::prelude::*;

use crate::dom::{self, window_document};
use crate::{frame, overlay};

#[derive(Default)]
struct Controls {
    classifier: GestureClassifier,
    mode: ModeController,
}

thread_local! {
    static CONTROLS: RefCell<Controls> = RefCell::new(Controls::default());
}

pub fn formation_reader() -> FormationReader {
    CONTROLS.with(|cell| cell.borrow().mode.reader())
}

/// Feed a gesture-equivalent input (keyboard) through the mode controller.
pub fn apply(out: GestureOutput) {
    let change = CONTROLS.with(|cell| cell.borrow_mut().mode.apply(out));
    publish(change);
}

/// Keyboard formation request; honoured only while the card is open.
pub fn request_formation(formation: Formation) {
    let change = CONTROLS.with(|cell| cell.borrow_mut().mode.request_formation(formation));
    publish(change);
}

/// Advance autoplay; called once per rendered frame.
pub fn tick(now: Instant) {
    let change = CONTROLS.with(|cell| cell.borrow_mut().mode.tick(now));
    publish(change);
}

/// Push the current mode to the overlay, now or after a change.
pub fn sync_overlay() {
    let (card_open, formation, pose, autoplay) = CONTROLS.with(|cell| {
        let c = cell.borrow();
        (
            c.mode.card_open(),
            c.mode.formation(),
            c.mode.last_pose(),
            c.mode.autoplay(),
        )
    });
    if let Some(doc) = window_document() {
        overlay::sync_mode(&doc, card_open, formation);
        overlay::sync_status(&doc, pose, card_open, autoplay);
    }
}

fn publish(change: ModeChange) {
    if change != ModeChange::default() {
        sync_overlay();
    }
}

fn process(hand: Option<&HandLandmarks>) {
    let now = Instant::now();
    let change = CONTROLS.with(|cell| {
        let mut c = cell.borrow_mut();
        let mode = c.mode.detection_mode();
        let out = c.classifier.process(hand, mode, now);
        if out.swipe {
            log::debug!("[gesture] swipe in {:?} mode", mode);
        }
        c.mode.apply(out)
    });
    publish(change);
}

/// One tracker frame with a hand: 21 landmarks as flat `x, y[, z]` floats in
/// normalized image coordinates. A malformed buffer counts as no hand.
#[wasm_bindgen]
pub fn push_hand_landmarks(data: &[f32]) {
    match HandLandmarks::from_flat(data) {
        Ok(hand) => process(Some(&hand)),
        Err(e) => {
            log::warn!("[gesture] {}", e);
            process(None);
        }
    }
}

/// One tracker frame without a hand.
#[wasm_bindgen]
pub fn push_no_hand() {
    process(None);
}

/// The camera or tracker could not start; fall back to the timed demo.
#[wasm_bindgen]
pub fn report_camera_error() {
    CONTROLS.with(|cell| cell.borrow_mut().mode.camera_failed());
    sync_overlay();
}

/// The user dismissed the start screen.
#[wasm_bindgen]
pub fn start_experience() {
    let fresh = CONTROLS.with(|cell| cell.borrow_mut().mode.start(Instant::now()));
    if !fresh {
        log::warn!("[bridge] start already triggered; ignoring");
        return;
    }
    if let Some(doc) = window_document() {
        overlay::hide_start(&doc);
    }
    log::info!("[bridge] experience started");
}

/// Stop rendering, detach every page listener and return the controls to
/// their pre-start state.
#[wasm_bindgen]
pub fn shutdown() {
    frame::stop_loop();
    dom::remove_listeners();
    CONTROLS.with(|cell| {
        let mut c = cell.borrow_mut();
        c.classifier.reset();
        c.mode.shutdown();
    });
    log::info!("[bridge] shut down");
}
