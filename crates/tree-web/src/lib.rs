#![cfg(target_arch = "wasm32")]
//! Browser front-end: Canvas 2D painter, animation loop, image loading and
//! the hand-tracker bridge around `tree-core`.

pub mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod images;
mod keys;
mod overlay;
mod render;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tree_core::{FrameStats, ImageSlots, ParticleStore, Scene, SceneConfig, STATS_WINDOW_MS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CANVAS_ID, START_OVERLAY_ID};
use crate::frame::FrameContext;
use crate::images::SharedImages;
use crate::render::Painter;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::wire_resize(&canvas);

    let location = window.location();
    let config = SceneConfig::from_location(
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );
    log::info!(
        "[config] {} particles, {} photos, seed {}",
        config.particle_count,
        config.images.len(),
        config.seed
    );

    let images: SharedImages = Rc::new(RefCell::new(ImageSlots::new(config.images.clone())));
    images::spawn_loads(&images);
    let store = ParticleStore::new(config.particle_count, config.images.len(), config.seed)?;

    overlay::show_greeting(&document, &config);
    overlay::show_perf(&document, config.show_perf);
    bridge::sync_overlay();
    events::wire_global_keydown(document.clone());
    dom::add_click_listener(&document, START_OVERLAY_ID, bridge::start_experience);

    let frame_ctx = FrameContext {
        canvas,
        document,
        painter: Painter::new(ctx),
        scene: Scene::new(store),
        formation: bridge::formation_reader(),
        images,
        stats: FrameStats::starting_at(Duration::from_millis(STATS_WINDOW_MS), Instant::now()),
        particle_count: config.particle_count,
        seed: config.seed,
    };
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    {
        let frame_ctx = frame_ctx.clone();
        dom::wire_hashchange(move |hash| {
            if let Err(e) = frame_ctx.borrow_mut().reload_images(hash) {
                log::error!("[config] photo reload failed: {:?}", e);
            }
        });
    }
    frame::start_loop(frame_ctx);
    Ok(())
}
