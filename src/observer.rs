use crate::constants::{
    ACTIVE_CLASS, HEADING_TAG, REVEAL_CLASS, REVEAL_SELECTOR, TEXT_PAYLOAD_ATTR,
};
use crate::core::constants::{REVEAL_THRESHOLD, TYPEWRITER_STEP_MS};
use crate::core::typewriter::resolve_source;
use crate::core::{RevealAction, RevealConfig, RevealSequencer, Typewriter, TypewriterStep};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observed elements and their reveal bookkeeping. Elements are keyed by
/// their index in `elements`; the sequencer is only written from the
/// observer callback.
struct RevealContext {
    elements: Vec<web::Element>,
    sequencer: RevealSequencer<usize>,
    observer: Option<web::IntersectionObserver>,
}

impl RevealContext {
    fn index_of(&self, target: &web::Element) -> Option<usize> {
        self.elements
            .iter()
            .position(|el| el.is_same_node(Some(target.as_ref())))
    }

    fn on_entry(&mut self, entry: &web::IntersectionObserverEntry) {
        let target = entry.target();
        let Some(i) = self.index_of(&target) else {
            return;
        };
        let action =
            self.sequencer
                .observe(&i, entry.is_intersecting(), entry.intersection_ratio());
        if action == RevealAction::None {
            return;
        }
        let el = &self.elements[i];
        _ = el.class_list().add_1(ACTIVE_CLASS);
        // revealed is terminal; nothing more to learn from this element
        if let Some(obs) = &self.observer {
            obs.unobserve(el);
        }
        log::debug!("[reveal] element {} active", i);
        if action == RevealAction::ActivateAndType {
            start_typewriter(el);
        }
    }
}

pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        log::info!("[reveal] nothing to observe");
        return Ok(());
    }

    let mut sequencer = RevealSequencer::new(RevealConfig::default());
    for (i, el) in elements.iter().enumerate() {
        _ = el.class_list().add_1(REVEAL_CLASS);
        sequencer.register(i);
    }
    if let Some(i) = elements
        .iter()
        .position(|el| el.tag_name().eq_ignore_ascii_case(HEADING_TAG))
    {
        sequencer.set_heading(i);
    }
    log::info!("[reveal] observing {} elements", elements.len());

    let ctx = Rc::new(RefCell::new(RevealContext {
        elements,
        sequencer,
        observer: None,
    }));
    let ctx_cb = ctx.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    ctx_cb.borrow_mut().on_entry(&entry);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    {
        let mut c = ctx.borrow_mut();
        for el in &c.elements {
            observer.observe(el);
        }
        c.observer = Some(observer);
    }
    callback.forget();
    Ok(())
}

/// Clear the element and type its text back one character per interval tick.
fn start_typewriter(el: &web::Element) {
    let Some(html) = el.dyn_ref::<web::HtmlElement>().cloned() else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let payload = el.get_attribute(TEXT_PAYLOAD_ATTR);
    let text = resolve_source(payload.as_deref(), &html.inner_text());
    html.set_inner_text("");
    dom::set_style(&html, "opacity", "1");

    let mut writer = Typewriter::new(&text);
    log::info!("[typewriter] revealing {} chars", writer.len());

    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_cb = handle.clone();
    let tick = Closure::wrap(Box::new(move || {
        let finished = match writer.step() {
            TypewriterStep::Emitted { finished } => {
                html.set_text_content(Some(writer.shown()));
                finished
            }
            TypewriterStep::Done => true,
        };
        if finished {
            if let (Some(w), Some(id)) = (web::window(), handle_cb.take()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TYPEWRITER_STEP_MS,
    ) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::warn!("[typewriter] interval error: {:?}", e),
    }
    tick.forget();
}
