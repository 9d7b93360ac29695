use crate::dom;
use backdrop_core::{InputState, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub input: Rc<RefCell<InputState>>,
    pub scene: Rc<RefCell<Box<dyn Scene>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let input = w.input.clone();
    dom::listen(&w.document, "mousemove", move |ev: web::MouseEvent| {
        input
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
    });
}

fn wire_scroll(w: &InputWiring) {
    let input = w.input.clone();
    let window = w.window.clone();
    dom::listen(&w.window, "scroll", move |_: web::Event| {
        if let Ok(y) = window.scroll_y() {
            input.borrow_mut().scrolled(y as f32);
        }
    });
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    dom::sync_canvas_backing_size(&w.canvas);
    let window = w.window.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let viewport = dom::viewport_size(&w.window);
        if !w.input.borrow_mut().resized(viewport) {
            return;
        }
        w.scene.borrow_mut().resize(viewport);
        dom::sync_canvas_backing_size(&w.canvas);
        log::debug!("[resize] {}x{}", viewport.width, viewport.height);
    });
}
