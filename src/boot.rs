//! Loading overlay shipped in `index.html`, updated while the app mounts.

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use web_sys::Element;

#[cfg(target_arch = "wasm32")]
const OVERLAY_ID: &str = "boot-overlay";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn with_overlay<F: FnOnce(&Element)>(action: F) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(overlay) = document.get_element_by_id(OVERLAY_ID) else {
        return;
    };
    action(&overlay);
}

#[cfg(target_arch = "wasm32")]
fn set_slot(overlay: &Element, selector: &str, text: &str) {
    if let Ok(Some(slot)) = overlay.query_selector(selector) {
        slot.set_text_content(Some(text));
    }
}

pub(crate) fn set_phase(label: &str, detail: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        with_overlay(|overlay| {
            let _ = overlay.set_attribute("data-phase", label);
            set_slot(overlay, ".boot-phase", label);
            set_slot(overlay, ".boot-detail", detail);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (label, detail);
}

pub(crate) fn fail(code: &str, message: &str, hint: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("boot failed", code, message);
        with_overlay(|overlay| {
            let _ = overlay.set_attribute("data-state", "failed");
            let _ = overlay.set_attribute("data-code", code);
            set_slot(overlay, ".boot-phase", message);
            set_slot(overlay, ".boot-detail", hint);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (code, message, hint);
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        let already_sent = READY_SENT.with(|flag| flag.replace(true));
        if already_sent {
            return;
        }
        with_overlay(|overlay| overlay.remove());
    }
}
