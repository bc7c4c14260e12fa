//! Procedural TARS mascot rendered behind the page with WebGPU, plus the
//! scroll-triggered reveal/typewriter sequencer for the page content.
//!
//! `core` and `constants` are platform independent and tested on the host;
//! everything touching the DOM or the GPU only builds for wasm32.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod observer;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::CANVAS_ID;
    use crate::core::{AnimationDriver, Environment, InputState, Mascot, MascotLayout, Scene};
    use crate::{dom, events, frame, observer, render};
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_resize(frame_ctx: Rc<RefCell<frame::FrameContext>>) {
        let resize_closure = Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().resize();
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("tars-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Page content does not depend on the 3D background.
        observer::wire_reveal(&document)?;
        events::wire_download_button(&document);
        events::wire_anchor_scrolling(&document);

        let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
            log::info!("[scene] no #{} canvas, background disabled", CANVAS_ID);
            return Ok(());
        };
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let size = dom::sync_canvas_to_viewport(&canvas);

        let mut rng = StdRng::from_entropy();
        let layout = MascotLayout::default();
        let mut scene = Scene::new(Mascot::compose(layout), Environment::new(&mut rng));
        scene
            .environment
            .camera
            .set_viewport(size.css_width, size.css_height);
        log::info!(
            "[scene] center_width={:.2} side_offset=±{:.2} stars={} drawables={}",
            layout.center_width(),
            layout.side_offset(),
            scene.environment.stars.len(),
            scene.drawable_count()
        );

        let gpu = match render::GpuState::new(&canvas, &scene).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                return Ok(());
            }
        };

        let input = Rc::new(RefCell::new(InputState::default()));
        events::wire_pointermove(input.clone());

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            scene,
            driver: AnimationDriver::default(),
            input,
            gpu,
            canvas: canvas.clone(),
            clock_origin: Instant::now(),
        }));
        wire_resize(frame_ctx.clone());
        frame::start_loop(frame_ctx);

        dom::set_style(&canvas, "opacity", "1");
        Ok(())
    }
}
