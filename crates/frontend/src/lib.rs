pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, source) = shared::config::load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.log_level());
    console_error_panic_hook::set_once();
    log::info!("{}", source);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
