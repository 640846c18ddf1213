use shared::presentation::wheel_size;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn current_wheel_size() -> u32 {
    wheel_size(viewport_width())
}

// iOS Safari jumps around with 100vh, so the page height is driven by --vh instead
pub fn apply_viewport_height() {
    let Some(window) = window() else { return };
    let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };

    let root = window
        .document()
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(root) = root {
        if root
            .style()
            .set_property("--vh", &format!("{}px", height * 0.01))
            .is_err()
        {
            log::warn!("could not set --vh on the document root");
        }
    }
}
