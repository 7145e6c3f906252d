use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, thiserror::Error)]
pub(crate) enum SurfaceError {
    #[error("window unavailable")]
    NoWindow,
    #[error("canvas not mounted")]
    NotMounted,
    #[error("2d context unavailable")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(js_message(&value))
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")?
        .ok_or(SurfaceError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::NoContext)
}

pub(crate) fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .unwrap_or(1.0)
}

/// Layout size of the canvas in CSS pixels.
pub(crate) fn logical_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width().max(0.0), rect.height().max(0.0))
}

pub(crate) fn viewport_size() -> Result<(f64, f64), SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0), height.max(0.0)))
}

pub(crate) fn backing_size(width: f64, height: f64, ratio: f64) -> (u32, u32) {
    let scale = |value: f64| (value * ratio).round().max(1.0) as u32;
    (scale(width), scale(height))
}

/// Sizes the backing store for `ratio` and maps drawing to logical units.
pub(crate) fn fit_backing_store(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    ratio: f64,
) -> Result<(), SurfaceError> {
    let (backing_w, backing_h) = backing_size(width, height, ratio);
    if canvas.width() != backing_w {
        canvas.set_width(backing_w);
    }
    if canvas.height() != backing_h {
        canvas.set_height(backing_h);
    }
    // resizing resets the context state; set the transform absolutely either way
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_store_scales_with_ratio() {
        assert_eq!(backing_size(800.0, 128.0, 1.0), (800, 128));
        assert_eq!(backing_size(800.0, 128.0, 2.0), (1600, 256));
        assert_eq!(backing_size(333.3, 100.0, 1.5), (500, 150));
        assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_canvas() -> HtmlCanvasElement {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("canvas element")
    }

    #[wasm_bindgen_test]
    fn fit_sets_backing_store() {
        let canvas = make_canvas();
        let ctx = context_2d(&canvas).expect("2d context");
        fit_backing_store(&canvas, &ctx, 300.0, 120.0, 2.0).expect("fit");
        assert_eq!(canvas.width(), 600);
        assert_eq!(canvas.height(), 240);
    }

    #[wasm_bindgen_test]
    fn claimed_canvas_has_no_2d_context() {
        let canvas = make_canvas();
        canvas
            .get_context("bitmaprenderer")
            .expect("claim canvas")
            .expect("bitmaprenderer context");
        assert!(matches!(context_2d(&canvas), Err(SurfaceError::NoContext)));
    }
}
