use crate::core::InputState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `input.pointer` in sync with the pointer, normalized against the
/// current window size. This handler is the only writer of `input`.
pub fn wire_pointermove(input: Rc<RefCell<InputState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (width, height) = dom::viewport_size();
        input
            .borrow_mut()
            .set_pointer_px(ev.client_x() as f32, ev.client_y() as f32, width, height);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
