use tree_core::{Formation, GestureOutput};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::keys::{command_for_key, suppresses_default, KeyCommand};
use crate::{bridge, dom, overlay};

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    if ev.repeat() {
        return;
    }
    let Some(cmd) = command_for_key(&ev.key()) else {
        return;
    };
    if suppresses_default(cmd) {
        ev.prevent_default();
    }
    match cmd {
        KeyCommand::Tree => bridge::request_formation(Formation::Tree),
        KeyCommand::Scatter => bridge::request_formation(Formation::Scatter),
        KeyCommand::ToggleCard => bridge::apply(GestureOutput {
            pose: None,
            swipe: true,
        }),
        KeyCommand::TogglePerf => overlay::toggle_perf(document),
        KeyCommand::ToggleHint => overlay::toggle_hint(document),
    }
}

pub fn wire_global_keydown(document: web::Document) {
    if let Some(window) = web::window() {
        dom::listen(&window, "keydown", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
                handle_global_keydown(ev, &document);
            }
        });
    }
}
