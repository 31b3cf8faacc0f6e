use crate::controller::RevealController;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_orientation(controller: &RevealController) {
    let Some(window) = web::window() else {
        return;
    };
    let controller = controller.clone();
    let wnd = window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        // gamma is null on devices without a gyroscope
        controller.on_tilt_sample(ev.gamma(), dom::viewport_width(&wnd));
    }) as Box<dyn FnMut(_)>);

    _ = window
        .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    closure.forget();
    log::info!("[sensors] listening for deviceorientation");
}
