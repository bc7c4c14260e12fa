use crate::constants::ANCHOR_SELECTOR;
use crate::dom;
use web_sys as web;

/// In-page links scroll smoothly instead of jumping. Links whose target is
/// missing (or not a valid selector, like a bare `#`) do nothing.
pub fn wire_anchor_scrolling(document: &web::Document) {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR);
    log::debug!("[anchors] {} in-page links", anchors.len());
    for anchor in anchors {
        let link = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(doc) = dom::window_document() else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
