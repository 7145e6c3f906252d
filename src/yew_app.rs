use std::rc::Rc;

use gloo::events::EventListener;
use roaring_flame_core::SceneId;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::app_core::AppCore;
use crate::app_runtime;
use crate::boot;
use crate::detail_view::{ChiMeter, ScenePanel, StageCard};
use crate::ember_view::EmberBackground;
use crate::icons;
use crate::timeline_view::TimelineCanvas;

pub(crate) const APP_ROOT_ID: &str = "app-root";

#[derive(Properties)]
struct AppProps {
    core: Rc<AppCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let settings = app_runtime::settings();
    let ember_seed = use_memo((), |_| app_runtime::ember_seed());
    let refresh = use_force_update();

    {
        let core = core.clone();
        use_effect_with((), move |_| {
            let subscription = core.subscribe(Rc::new(move || refresh.force_update()));
            move || drop(subscription)
        });
    }

    {
        let core = core.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        handle_key(&core, event);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_select = {
        let core = core.clone();
        Callback::from(move |id: SceneId| {
            core.select(id);
        })
    };

    let scene = core.current();
    html! {
        <div class="app">
            <EmberBackground settings={settings.particles} seed={*ember_seed} />
            <div class="page">
                <header class="page-header">
                    <div class="flame-badge">{ icons::flame_icon(32) }</div>
                    <h1 class="page-title">{ "THE ROARING FLAME" }</h1>
                    <p class="page-subtitle">
                        { "A Critical Analysis of Okonkwo's Cycle of Fear in \"Things Fall Apart\"" }
                    </p>
                </header>
                <TimelineCanvas
                    store={core.store()}
                    active={core.active_id()}
                    style={settings.timeline}
                    {on_select}
                />
                <div class="content-grid">
                    <ScenePanel {scene} />
                    <aside class="sidebar">
                        <ChiMeter {scene} thresholds={settings.meter} />
                        <StageCard {scene} />
                    </aside>
                </div>
                <footer class="page-footer">
                    <p>{ "Created for Honors ELA • Historical Analysis of Colonial Nigeria" }</p>
                </footer>
            </div>
        </div>
    }
}

fn handle_key(core: &AppCore, event: &KeyboardEvent) {
    if event.alt_key() || event.ctrl_key() || event.meta_key() {
        return;
    }
    let key = event.key();
    let handled = match key.as_str() {
        "ArrowRight" => core.select_next(),
        "ArrowLeft" => core.select_previous(),
        digit => match digit.parse::<SceneId>() {
            Ok(id) => core.select(id),
            Err(_) => false,
        },
    };
    if handled {
        event.prevent_default();
    }
}

pub(crate) fn run(core: Rc<AppCore>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(root) = document.get_element_by_id(APP_ROOT_ID) else {
        boot::fail(
            "missing-root",
            "The presentation could not find its mount point.",
            "index.html must contain an element with id \"app-root\".",
        );
        return;
    };
    boot::set_phase("Rendering", "Mounting the timeline");
    let _app_handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { core }).render();
    boot::ready();
}
