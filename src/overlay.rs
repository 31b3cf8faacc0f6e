use crate::constants::CLASS_HIDDEN;
use crate::dom;
use web_sys as web;

/// Fade the activation overlay out, then take it out of layout once the fade is done.
pub fn hide(overlay: &web::Element, fade_ms: i32) {
    _ = overlay.class_list().add_1(CLASS_HIDDEN);
    let el = overlay.clone();
    dom::set_timeout(fade_ms, move || {
        _ = el.set_attribute("style", "display:none");
    });
}

#[inline]
pub fn is_hidden(overlay: &web::Element) -> bool {
    if overlay.class_list().contains(CLASS_HIDDEN) {
        return true;
    }
    overlay
        .get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Replace the overlay contents with the sensor advisory.
pub fn show_advisory(overlay: &web::Element, html: &str) {
    overlay.set_inner_html(html);
    log::info!("[overlay] showing sensor advisory");
}
