use crate::render;
use backdrop_core::{FrameClock, InputState, InstanceRaw, Scene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Box<dyn Scene>>>,
    pub input: Rc<RefCell<InputState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub clock: FrameClock,
    pub instances: Vec<InstanceRaw>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time = self.clock.elapsed_secs();
        let input = *self.input.borrow();
        self.scene.borrow_mut().update(&input, time);

        let Some(g) = &mut self.gpu else {
            return;
        };
        self.instances.clear();
        let scene = self.scene.borrow();
        scene.write_instances(&mut self.instances);
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(&**scene, &self.instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Recursive `requestAnimationFrame` driver that can be stopped.
///
/// The frame closure keeps a handle to its own slot so it can reschedule
/// itself; [`AnimationLoop::stop`] breaks that cycle.
#[derive(Clone, Default)]
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    in_frame: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `step` once per display refresh until stopped.
    pub fn start(&self, mut step: impl FnMut() + 'static) {
        if self.running.get() || self.in_frame.get() {
            log::warn!("[loop] already running");
            return;
        }
        self.running.set(true);

        let tick = self.tick.clone();
        let pending = self.pending.clone();
        let running = self.running.clone();
        let in_frame = self.in_frame.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if !running.get() {
                return;
            }
            in_frame.set(true);
            step();
            in_frame.set(false);
            if running.get() {
                schedule(&tick, &pending);
            }
        }) as Box<dyn FnMut()>));
        schedule(&self.tick, &self.pending);
    }

    /// Cancel the pending frame and release the frame closure.
    ///
    /// Safe to call from inside `step`; the closure is then released by the
    /// next `stop` or `start` outside a frame.
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if !self.in_frame.get() {
            self.tick.borrow_mut().take();
        }
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, pending: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
