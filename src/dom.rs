use crate::config::ElementIds;
use crate::env::Capabilities;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Handles to the page elements the reveal drives.
#[derive(Clone)]
pub struct Elements {
    pub content_wrapper: web::Element,
    pub reveal_panel: web::Element,
    pub video: Option<web::HtmlVideoElement>,
    pub overlay: web::Element,
    pub activate_button: web::Element,
}

fn require(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn lookup_elements(document: &web::Document, ids: &ElementIds) -> anyhow::Result<Elements> {
    let video = if ids.video.is_empty() {
        None
    } else {
        document
            .get_element_by_id(&ids.video)
            .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    };
    Ok(Elements {
        content_wrapper: require(document, &ids.content_wrapper)?,
        reveal_panel: require(document, &ids.reveal_panel)?,
        video,
        overlay: require(document, &ids.overlay)?,
        activate_button: require(document, &ids.activate_button)?,
    })
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Fire-and-forget `setTimeout`; there is no cancellation path.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
    {
        log::error!("setTimeout error: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn probe_capabilities(window: &web::Window) -> Capabilities {
    let has = |name: &str| js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false);
    Capabilities {
        has_touch: has("ontouchstart"),
        has_orientation_events: has("DeviceOrientationEvent"),
        user_agent: window.navigator().user_agent().unwrap_or_default(),
    }
}
