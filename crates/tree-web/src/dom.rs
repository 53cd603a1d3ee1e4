use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

thread_local! {
    // Every listener the app attaches, so a shutdown can take them all off.
    static LISTENERS: RefCell<Vec<(web::EventTarget, &'static str, Handler)>> =
        RefCell::new(Vec::new());
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` and keep the closure alive until [`remove_listeners`].
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
        return;
    }
    LISTENERS.with(|l| l.borrow_mut().push((target.clone(), event, closure)));
}

/// Detach and drop every listener registered through [`listen`].
pub fn remove_listeners() {
    let listeners = LISTENERS.with(|l| std::mem::take(&mut *l.borrow_mut()));
    let count = listeners.len();
    for (target, event, closure) in listeners {
        let _ = target
            .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    log::debug!("[dom] removed {} listeners", count);
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", move |_| handler());
    }
}

/// Viewport size in CSS pixels, or zero when the window is unavailable.
pub fn inner_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Match the canvas backing store to the window.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let (width, height) = inner_size(&w);
        if canvas.width() != width || canvas.height() != height {
            canvas.set_width(width);
            canvas.set_height(height);
            log::debug!("[dom] canvas resized to {}x{}", width, height);
        }
    }
}

/// Keep the canvas sized to the window. The frame loop reads the size back
/// each frame, so a resize lands between frames.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_size(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    listen(&window, "resize", move |_| sync_canvas_size(&canvas));
}

/// Call `handler` with the new fragment whenever the URL hash changes.
pub fn wire_hashchange(mut handler: impl FnMut(&str) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let location = window.location();
    listen(&window, "hashchange", move |_| {
        handler(&location.hash().unwrap_or_default());
    });
}
