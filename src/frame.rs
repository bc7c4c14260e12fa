use crate::core::{AnimationDriver, FrameSample, InputState, Scene};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the frame loop reads or mutates. Pointer input is shared with
/// the pointer handler, which is its only writer.
pub struct FrameContext {
    pub scene: Scene,
    pub driver: AnimationDriver,
    pub input: Rc<RefCell<InputState>>,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub clock_origin: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let sample = FrameSample {
            time_sec: self.clock_origin.elapsed().as_secs_f64(),
            scroll_y: dom::scroll_y(),
            pointer: self.input.borrow().pointer,
        };
        if let Err(e) = self.driver.tick(&mut self.scene, &sample, &mut self.gpu) {
            log::error!("render error: {:?}", e);
        }
    }

    /// Match canvas, camera aspect and surface size to the window. Idempotent.
    pub fn resize(&mut self) {
        let size = dom::sync_canvas_to_viewport(&self.canvas);
        self.scene
            .environment
            .camera
            .set_viewport(size.css_width, size.css_height);
        self.gpu
            .resize_if_needed(size.backing_width, size.backing_height);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
