use roaring_flame_core::{fill_percent, MeterThresholds, Scene, METER_TICKS};
use yew::prelude::*;

use crate::icons;

const METER_OPACITY: f64 = 0.8;

#[derive(Properties, PartialEq)]
pub(crate) struct SceneProps {
    pub(crate) scene: &'static Scene,
}

#[function_component(ScenePanel)]
pub(crate) fn scene_panel(props: &SceneProps) -> Html {
    let scene = props.scene;
    html! {
        <article class="card scene-panel">
            <div class="scene-heading">
                <span class="scene-label">{ scene.label }</span>
                <h2 class="scene-title">{ scene.title }</h2>
            </div>
            <section class="scene-summary">
                <h3>{ "Plot Summary" }</h3>
                <p>{ scene.summary }</p>
            </section>
            <section class="scene-analysis">
                <h3>{ icons::book_icon(20) }{ "Analysis" }</h3>
                <p>{ scene.analysis }</p>
            </section>
            <blockquote class="scene-quote">
                <p>{ scene.quote }</p>
            </blockquote>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MeterProps {
    pub(crate) scene: &'static Scene,
    pub(crate) thresholds: MeterThresholds,
}

#[function_component(ChiMeter)]
pub(crate) fn chi_meter(props: &MeterProps) -> Html {
    let scene = props.scene;
    let fill = fill_percent(scene.intensity);
    let status = props.thresholds.status(scene.intensity);
    let fill_style = format!(
        "height: {fill}%; background-color: {}; opacity: {METER_OPACITY};",
        scene.accent.to_hex()
    );
    let ticks: Html = METER_TICKS
        .iter()
        .map(|tick| html! { <div class="meter-tick">{ *tick }</div> })
        .collect();
    html! {
        <div class="card meter-card">
            <h3 class="card-caption">{ "Okonkwo's Chi (Strength)" }</h3>
            <div class="meter" role="meter" aria-valuemin="0" aria-valuemax="100" aria-valuenow={fill.to_string()}>
                <div class="meter-fill" style={fill_style} />
                <div class="meter-ticks">{ ticks }</div>
            </div>
            <p class="meter-status">{ format!("Status: {}", status.label()) }</p>
        </div>
    }
}

#[function_component(StageCard)]
pub(crate) fn stage_card(props: &SceneProps) -> Html {
    let scene = props.scene;
    html! {
        <div class="card stage-card" data-icon={scene.icon.tag()}>
            <div class="stage-icon">{ icons::stage_icon(scene.icon, 32) }</div>
            <div class="stage-category">{ scene.category }</div>
            <p class="card-caption">{ "Archetypal Stage" }</p>
        </div>
    }
}
