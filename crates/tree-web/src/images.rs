use std::cell::RefCell;
use std::rc::Rc;
use tree_core::ImageSlots;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedImages = Rc<RefCell<ImageSlots<web::HtmlImageElement>>>;

/// Start fetching every distinct URL. Loads complete out of band and flip the
/// matching slots; the painter polls the slots each frame.
pub fn spawn_loads(slots: &SharedImages) {
    let urls: Vec<String> = slots.borrow().unique_urls().map(str::to_owned).collect();
    for url in urls {
        if let Err(e) = load_one(slots, url) {
            log::error!("[images] {:?}", e);
        }
    }
}

fn load_one(slots: &SharedImages, url: String) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));

    let on_load = {
        let slots = slots.clone();
        let url = url.clone();
        let img = img.clone();
        Closure::<dyn FnMut()>::once(move || {
            slots.borrow_mut().mark_loaded(&url, img);
        })
    };
    let on_error = {
        let slots = slots.clone();
        let url = url.clone();
        Closure::<dyn FnMut()>::once(move || {
            slots.borrow_mut().mark_failed(&url);
        })
    };
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_load.forget();
    on_error.forget();

    img.set_src(&url);
    Ok(())
}
