use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tree_core::config::parse_photos;
use tree_core::{FormationReader, FrameStats, ImageSlots, Scene, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::images::{self, SharedImages};
use crate::render::Painter;
use crate::{bridge, overlay};

static RUNNING: AtomicBool = AtomicBool::new(false);

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The running loop: its self-scheduling closure and the pending frame id.
struct Loop {
    tick: Tick,
    handle: Rc<Cell<i32>>,
}

thread_local! {
    static LOOP: RefCell<Option<Loop>> = const { RefCell::new(None) };
}

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub painter: Painter,
    pub scene: Scene,
    pub formation: FormationReader,
    pub images: SharedImages,
    pub stats: FrameStats,
    pub particle_count: usize,
    pub seed: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        bridge::tick(now);

        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
            .unwrap_or_default();
        // Loaded once: the whole particle pass sees a single formation.
        let formation = self.formation.load();
        let sprites = self.scene.frame(formation, viewport);
        self.painter.paint(sprites, &self.images.borrow(), viewport);

        if let Some(report) = self.stats.record(now, self.scene.store().len()) {
            log::debug!("[frame] {} fps, {:.2} ms", report.fps, report.frame_time_ms);
            overlay::update_perf(&self.document, &report);
        }
    }

    /// A new `#photos=` fragment: swap in fresh slots and rebuild the scene
    /// so every ornament points at one of them. No-op if the list is
    /// unchanged.
    pub fn reload_images(&mut self, hash: &str) -> anyhow::Result<()> {
        let urls = parse_photos(hash);
        if urls.as_slice() == self.images.borrow().urls() {
            return Ok(());
        }
        let slots = ImageSlots::new(urls);
        self.scene
            .rebuild_for_images(&slots, self.particle_count, self.seed)?;
        log::info!("[frame] photo list changed, {} images", slots.len());
        *self.images.borrow_mut() = slots;
        images::spawn_loads(&self.images);
        Ok(())
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if RUNNING.swap(true, Ordering::SeqCst) {
        log::warn!("[frame] loop already running");
        return;
    }
    let tick: Tick = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(0));
    let (tick_clone, handle_clone) = (tick.clone(), handle.clone());
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !RUNNING.load(Ordering::SeqCst) {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    LOOP.with(|l| *l.borrow_mut() = Some(Loop { tick, handle }));
}

/// Cancel the pending frame and drop the loop closure. Must not be called
/// from inside a frame.
pub fn stop_loop() {
    RUNNING.store(false, Ordering::SeqCst);
    let Some(running) = LOOP.with(|l| l.borrow_mut().take()) else {
        return;
    };
    if let Some(w) = web::window() {
        let _ = w.cancel_animation_frame(running.handle.get());
    }
    // the closure holds the other handle to `tick`; taking it breaks the cycle
    drop(running.tick.borrow_mut().take());
    log::info!("[frame] loop stopped");
}

fn request_frame(tick: &Tick, handle: &Cell<i32>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(id),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}
