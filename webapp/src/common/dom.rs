// thin wrappers over web_sys
//
// every lookup is fallible, and a missing window or element just disables
// whatever feature asked for it
use gloo_console::error as console_error;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use storefront::scroll::SectionBounds;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

// offsetTop/offsetHeight of every section[id], in document order
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };

    let nodes = match document.query_selector_all("section[id]") {
        Ok(nodes) => nodes,
        Err(err) => {
            console_error!(format!("Failed to query page sections: {err:?}"));
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

pub fn navigate(url: &str) {
    let Some(window) = window() else {
        debug!("no window, not navigating");
        return;
    };

    if let Err(err) = window.location().set_href(url) {
        console_error!(format!("Failed to open {url}: {err:?}"));
    }
}
