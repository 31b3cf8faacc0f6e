#![cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod env;
pub mod events;
pub mod overlay;
pub mod permission;
pub mod sensors;
pub mod session;
pub mod tilt;

use config::RevealConfig;
use controller::RevealController;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-reveal starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    // The module may load before the markup is parsed.
    if document.ready_state() == "loading" {
        let closure = Closure::once(run);
        _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init(RevealConfig::default()) {
        log::error!("init error: {:?}", e);
    }
}

fn init(config: RevealConfig) -> anyhow::Result<()> {
    config.validate()?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let elements = dom::lookup_elements(&document, &config.ids)?;
    if elements.video.is_none() {
        log::info!("[reveal] no video element, panel will reveal without playback");
    }

    let caps = dom::probe_capabilities(&window);
    let environment = env::classify_environment(&caps);
    log::debug!("[env] capabilities: {:?}", caps);

    let controller = RevealController::new(elements, config, environment);
    controller.initialize();
    Ok(())
}
