use std::f64::consts::TAU;

use gloo::events::EventListener;
use roaring_flame_core::timeline::{AXIS_COLOR, GLOW_ALPHA, NODE_STROKE};
use roaring_flame_core::{node_paint, SceneId, SceneStore, TimelineLayout, TimelineStyle};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::surface::{self, SurfaceError};

#[derive(Properties, PartialEq)]
pub(crate) struct TimelineProps {
    pub(crate) store: SceneStore,
    pub(crate) active: SceneId,
    pub(crate) style: TimelineStyle,
    pub(crate) on_select: Callback<SceneId>,
}

/// Clickable chapter axis. Redraws on selection change and resize only.
#[function_component(TimelineCanvas)]
pub(crate) fn timeline_canvas(props: &TimelineProps) -> Html {
    let canvas_ref = use_node_ref();
    let size = use_state_eq(|| None::<(f64, f64)>);
    let hovered = use_state_eq(|| None::<usize>);
    let failed = use_state_eq(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let size = size.clone();
        use_effect_with((), move |_| {
            let measure = move || {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    size.set(Some(surface::logical_size(&canvas)));
                }
            };
            measure();
            let listener = web_sys::window().map(|window| {
                let measure = measure.clone();
                EventListener::new(&window, "resize", move |_event| measure())
            });
            move || drop(listener)
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let failed = failed.clone();
        let store = props.store;
        use_effect_with(
            (props.active, *size, props.style),
            move |(active, size, style)| {
                if let (Some((width, height)), Some(canvas)) =
                    (*size, canvas_ref.cast::<HtmlCanvasElement>())
                {
                    if let Err(err) = paint_timeline(&canvas, width, height, store, *active, style) {
                        gloo::console::warn!("timeline disabled", err.to_string());
                        failed.set(true);
                    }
                }
                || ()
            },
        );
    }

    let onclick = {
        let store = props.store;
        let style = props.style;
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(index) = node_under_pointer(&event, store, &style) {
                on_select.emit(store.all()[index].id);
            }
        })
    };
    let onmousemove = {
        let store = props.store;
        let style = props.style;
        let hovered = hovered.clone();
        Callback::from(move |event: MouseEvent| {
            hovered.set(node_under_pointer(&event, store, &style));
        })
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_event: MouseEvent| hovered.set(None))
    };

    let body = if *failed {
        html! { <p class="timeline-fallback">{ "Timeline unavailable" }</p> }
    } else {
        html! {
            <canvas
                ref={canvas_ref}
                class={classes!("timeline-canvas", hovered.is_some().then_some("is-hovering"))}
                {onclick}
                {onmousemove}
                {onmouseleave}
            />
        }
    };
    html! {
        <div class="timeline">
            {body}
        </div>
    }
}

fn node_under_pointer(event: &MouseEvent, store: SceneStore, style: &TimelineStyle) -> Option<usize> {
    let target = event.current_target()?.dyn_into::<Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();
    let layout = TimelineLayout::new(rect.width(), rect.height(), style.padding, store.len());
    layout.hit_test(x, y, style.hit_radius)
}

pub(crate) fn paint_timeline(
    canvas: &HtmlCanvasElement,
    width: f64,
    height: f64,
    store: SceneStore,
    active: SceneId,
    style: &TimelineStyle,
) -> Result<(), SurfaceError> {
    let ctx = surface::context_2d(canvas)?;
    surface::fit_backing_store(canvas, &ctx, width, height, surface::device_pixel_ratio())?;
    ctx.clear_rect(0.0, 0.0, width, height);

    let layout = TimelineLayout::new(width, height, style.padding, store.len());
    if let Some((start, end)) = layout.axis() {
        let y = layout.center_y();
        ctx.begin_path();
        ctx.move_to(start, y);
        ctx.line_to(end, y);
        ctx.set_stroke_style_str(&AXIS_COLOR.to_hex());
        ctx.set_line_width(style.line_width);
        ctx.stroke();
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    for (scene, (x, y)) in store.all().iter().zip(layout.nodes()) {
        let paint = node_paint(scene.id == active, scene.accent, style);
        if let Some(glow_radius) = paint.glow_radius {
            ctx.begin_path();
            ctx.arc(x, y, glow_radius, 0.0, TAU)?;
            ctx.set_fill_style_str(&scene.accent.to_rgba(GLOW_ALPHA));
            ctx.fill();
        }

        ctx.begin_path();
        ctx.arc(x, y, paint.radius, 0.0, TAU)?;
        ctx.set_fill_style_str(&paint.fill.to_hex());
        ctx.fill();
        ctx.set_line_width(style.stroke_width);
        ctx.set_stroke_style_str(&NODE_STROKE.to_hex());
        ctx.stroke();

        ctx.set_fill_style_str(&paint.label_color.to_hex());
        ctx.set_font(paint.label_font);
        ctx.fill_text(scene.label, x, y - style.label_offset)?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn paints_builtin_scenes() {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("canvas element");
        let style = TimelineStyle::default();
        paint_timeline(&canvas, 1000.0, 128.0, SceneStore::builtin(), SceneId::new(3), &style)
            .expect("paint timeline");
        let ratio = surface::device_pixel_ratio();
        assert_eq!(canvas.width(), (1000.0 * ratio).round() as u32);
    }

    #[wasm_bindgen_test]
    fn paint_reports_missing_context() {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("canvas element");
        canvas
            .get_context("bitmaprenderer")
            .expect("claim canvas")
            .expect("bitmaprenderer context");
        let style = TimelineStyle::default();
        let result =
            paint_timeline(&canvas, 1000.0, 128.0, SceneStore::builtin(), SceneId::new(1), &style);
        assert!(matches!(result, Err(SurfaceError::NoContext)));
    }
}
