use crate::constants::MAX_PIXEL_RATIO;
use anyhow::anyhow;
use backdrop_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach `handler` to `event` on `target` for the lifetime of the page.
/// Events that are not an `E` are ignored.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, handler: impl FnMut(web::MouseEvent) + 'static) {
    listen(el, "click", handler);
}

/// First element matching `selector`; missing elements are a setup error.
pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    query_optional(document, selector)?.ok_or_else(|| anyhow!("missing {selector}"))
}

pub fn query_optional(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Option<web::Element>> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {selector}: {e:?}"))
}

pub fn query_all(document: &web::Document, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("bad selector {selector}: {e:?}"))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

pub fn html_element(el: web::Element, what: &str) -> anyhow::Result<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{what} is not an HTML element"))
}

#[inline]
pub fn set_px_position(el: &web::HtmlElement, x: f32, y: f32) {
    let style = el.style();
    _ = style.set_property("left", &format!("{x}px"));
    _ = style.set_property("top", &format!("{y}px"));
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
