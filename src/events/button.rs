use crate::constants::BUTTON_SELECTOR;
use crate::core::button::{LabelStep, HIGHLIGHT_BORDER, HIGHLIGHT_SHADOW, LABEL_SEQUENCE};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_download_button(document: &web::Document) {
    let Some(button) = document
        .query_selector(BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[button] no {} on page", BUTTON_SELECTOR);
        return;
    };
    let target = button.clone();
    dom::add_click_listener(&button, move |_| play_label_sequence(&target));
}

fn play_label_sequence(button: &web::HtmlElement) {
    // one run per page: further clicks never reach the button
    dom::set_style(button, "pointer-events", "none");
    for &step in LABEL_SEQUENCE.iter() {
        let b = button.clone();
        if step.at_ms <= 0 {
            apply_label(&b, step);
        } else {
            dom::set_timeout(move || apply_label(&b, step), step.at_ms);
        }
    }
}

fn apply_label(button: &web::HtmlElement, step: LabelStep) {
    button.set_text_content(Some(step.label));
    if step.highlight {
        dom::set_style(button, "border-color", HIGHLIGHT_BORDER);
        dom::set_style(button, "box-shadow", HIGHLIGHT_SHADOW);
    }
}
