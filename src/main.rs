mod app_core;
mod app_runtime;
mod boot;
mod detail_view;
mod ember_view;
mod icons;
mod surface;
mod timeline_view;
mod yew_app;

use roaring_flame_core::SceneStore;

use crate::app_core::AppCore;

fn main() {
    console_error_panic_hook::set_once();
    boot::set_phase("Loading", "Preparing the scenes");
    app_runtime::set_settings(app_runtime::load_settings());
    let core = AppCore::new(SceneStore::builtin());
    yew_app::run(core);
}
