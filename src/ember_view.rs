use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use roaring_flame_core::{ParticleField, ParticleSettings};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::surface::{self, SurfaceError};

#[derive(Properties, PartialEq)]
pub(crate) struct EmberProps {
    pub(crate) settings: ParticleSettings,
    pub(crate) seed: u64,
}

/// Full-viewport ember animation drawn behind the page.
#[function_component(EmberBackground)]
pub(crate) fn ember_background(props: &EmberProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        let settings = props.settings;
        let seed = props.seed;
        use_effect_with((), move |_| {
            let layer = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or(SurfaceError::NotMounted)
                .and_then(|canvas| EmberLayer::mount(canvas, &settings, seed));
            let layer = match layer {
                Ok(layer) => Some(layer),
                Err(err) => {
                    gloo::console::warn!("embers disabled", err.to_string());
                    None
                }
            };
            move || drop(layer)
        });
    }
    html! {
        <canvas ref={canvas_ref} class="ember-field" aria-hidden="true" />
    }
}

struct EmberSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    fills: Vec<String>,
    frame_handle: Option<AnimationFrame>,
}

impl EmberSurface {
    fn fit_viewport(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = surface::viewport_size()?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.resize(width, height);
        Ok(())
    }

    fn advance(&mut self) -> Result<(), SurfaceError> {
        self.field.step();
        self.paint()
    }

    fn paint(&self) -> Result<(), SurfaceError> {
        let (width, height) = self.field.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        for (particle, fill) in self.field.particles().iter().zip(&self.fills) {
            self.ctx.set_fill_style_str(fill);
            self.ctx.begin_path();
            self.ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }
}

fn queue_frame(state: &Rc<RefCell<EmberSurface>>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |_timestamp| {
        let result = {
            let mut surface = next.borrow_mut();
            surface.frame_handle.take();
            surface.advance()
        };
        if let Err(err) = result {
            gloo::console::warn!("embers frame failed", err.to_string());
        }
        queue_frame(&next);
    });
    state.borrow_mut().frame_handle = Some(handle);
}

/// Running ember animation. Dropping it cancels the queued frame and detaches
/// the resize listener.
pub(crate) struct EmberLayer {
    state: Rc<RefCell<EmberSurface>>,
    _resize: EventListener,
}

impl EmberLayer {
    fn mount(
        canvas: HtmlCanvasElement,
        settings: &ParticleSettings,
        seed: u64,
    ) -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let ctx = surface::context_2d(&canvas)?;
        let (width, height) = surface::viewport_size()?;
        let field = ParticleField::new(settings, width, height, seed);
        // colors never change per particle, so format them once
        let fills = field
            .particles()
            .iter()
            .map(|particle| particle.color.to_css())
            .collect();
        let mut surface = EmberSurface {
            canvas,
            ctx,
            field,
            fills,
            frame_handle: None,
        };
        surface.fit_viewport()?;
        surface.paint()?;
        let state = Rc::new(RefCell::new(surface));

        let state_for_resize = state.clone();
        let resize = EventListener::new(&window, "resize", move |_event| {
            if let Err(err) = state_for_resize.borrow_mut().fit_viewport() {
                gloo::console::warn!("embers resize failed", err.to_string());
            }
        });

        queue_frame(&state);
        gloo::console::log!("embers started", settings.count as u32);
        Ok(Self {
            state,
            _resize: resize,
        })
    }
}

impl Drop for EmberLayer {
    fn drop(&mut self) {
        // the queued callback holds the state; dropping its handle breaks the cycle
        self.state.borrow_mut().frame_handle.take();
        gloo::console::log!("embers stopped");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
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

    #[wasm_bindgen_test(async)]
    async fn layer_animates_until_dropped() {
        let canvas = make_canvas();
        let settings = ParticleSettings::default();
        let layer = EmberLayer::mount(canvas.clone(), &settings, 7).expect("mount embers");
        let start: Vec<f64> = layer.state.borrow().field.particles().iter().map(|p| p.y).collect();
        TimeoutFuture::new(100).await;
        let (width, _) = surface::viewport_size().expect("viewport");
        assert_eq!(canvas.width(), width as u32);
        {
            let surface = layer.state.borrow();
            assert!(surface.frame_handle.is_some(), "no frame queued");
            let moved = surface
                .field
                .particles()
                .iter()
                .zip(&start)
                .any(|(particle, y)| particle.y != *y);
            assert!(moved, "no frames ran");
        }

        let state = layer.state.clone();
        drop(layer);
        assert!(state.borrow().frame_handle.is_none());
        let stopped: Vec<f64> = state.borrow().field.particles().iter().map(|p| p.y).collect();
        TimeoutFuture::new(100).await;
        let after: Vec<f64> = state.borrow().field.particles().iter().map(|p| p.y).collect();
        assert_eq!(after, stopped);
        assert_eq!(Rc::strong_count(&state), 1, "frame callback still holds the state");
    }

    #[wasm_bindgen_test]
    fn mount_fails_without_2d_context() {
        let canvas = make_canvas();
        canvas
            .get_context("bitmaprenderer")
            .expect("claim canvas")
            .expect("bitmaprenderer context");
        let settings = ParticleSettings::default();
        let result = EmberLayer::mount(canvas, &settings, 7);
        assert!(matches!(result, Err(SurfaceError::NoContext)));
    }
}
