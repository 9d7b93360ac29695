#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::frame::AnimationLoop;
use backdrop_core::{build_scene, FrameClock, InputState, SceneKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let ready_doc = document.clone();
    when_dom_ready(&ready_doc, move || {
        let ring_loop = match ui::wire_ui(&document) {
            Ok(l) => Some(l),
            Err(e) => {
                log::error!("ui init error: {:?}", e);
                None
            }
        };
        spawn_local(async move {
            let scene_loop = match init_scene(&window, &document).await {
                Ok(l) => Some(l),
                Err(e) => {
                    log::error!("scene init error: {:?}", e);
                    None
                }
            };
            stop_on_pagehide(&window, [scene_loop, ring_loop].into_iter().flatten().collect());
        });
    });
    Ok(())
}

fn when_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    dom::listen(document, "DOMContentLoaded", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

/// Pages kept in the back/forward cache resume where they left off.
fn stop_on_pagehide(window: &web::Window, loops: Vec<AnimationLoop>) {
    if loops.is_empty() {
        return;
    }
    dom::listen(window, "pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        for l in &loops {
            l.stop();
        }
        log::info!("[loop] stopped {} loops on pagehide", loops.len());
    });
}

async fn init_scene(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<AnimationLoop> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"))?;

    let kind = match canvas.get_attribute(SCENE_ATTR) {
        Some(v) => v.parse::<SceneKind>()?,
        None => SceneKind::default(),
    };
    let seed = match canvas.get_attribute(SEED_ATTR) {
        Some(v) => v.trim().parse::<u64>().unwrap_or_else(|_| {
            log::warn!("ignoring {SEED_ATTR}={v:?}");
            rand::random()
        }),
        None => rand::random(),
    };

    let viewport = dom::viewport_size(window);
    let scene = build_scene(kind, seed, viewport)?;
    let capacity = scene.instance_count();
    let scene = Rc::new(RefCell::new(scene));
    let input = Rc::new(RefCell::new(InputState::new(viewport)));

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        input: input.clone(),
        scene: scene.clone(),
    });

    let gpu = frame::init_gpu(&canvas, capacity).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        input,
        canvas,
        gpu,
        clock: FrameClock::start(),
        instances: Vec::with_capacity(capacity),
    }));
    let scene_loop = AnimationLoop::new();
    scene_loop.start(move || frame_ctx.borrow_mut().frame());
    Ok(scene_loop)
}
