use crate::controller::RevealController;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed mouse x positions into the controller. Viewport width is cached and
/// refreshed on `resize` instead of being read per sample.
pub fn wire_pointer(controller: &RevealController) {
    let Some(window) = web::window() else {
        return;
    };
    let width = Rc::new(Cell::new(dom::viewport_width(&window)));

    wire_mousemove(&window, controller.clone(), width.clone());
    wire_resize(&window, width);
}

fn wire_mousemove(window: &web::Window, controller: RevealController, width: Rc<Cell<f64>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        controller.on_position_sample(ev.client_x() as f64, width.get());
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(window: &web::Window, width: Rc<Cell<f64>>) {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        width.set(dom::viewport_width(&wnd));
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
