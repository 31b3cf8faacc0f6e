use crate::permission::{PermissionError, PermissionOutcome, PermissionState};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask for motion-sensor access through `DeviceOrientationEvent.requestPermission`.
///
/// Platforms without that static method (everything but iOS Safari) report
/// `Unsupported`. Must be called from inside a user-gesture handler.
pub async fn request_orientation_permission() -> PermissionOutcome {
    let Some(window) = web::window() else {
        return PermissionOutcome::Unsupported;
    };
    let ctor = match Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return PermissionOutcome::Unsupported,
    };
    let request: Function = match Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(v) if v.is_function() => v.unchecked_into(),
        _ => return PermissionOutcome::Unsupported,
    };

    let promise: Promise = match request.call0(&ctor) {
        Ok(v) => match v.dyn_into() {
            Ok(p) => p,
            Err(_) => return PermissionOutcome::Failed(PermissionError::NotCallable),
        },
        Err(e) => return PermissionOutcome::Failed(PermissionError::Rejected(format!("{:?}", e))),
    };

    match JsFuture::from(promise).await {
        Ok(answer) => {
            let state = answer
                .as_string()
                .map(|s| PermissionState::parse(&s))
                .unwrap_or(PermissionState::Prompt);
            PermissionOutcome::Answered(state)
        }
        Err(e) => PermissionOutcome::Failed(PermissionError::Rejected(format!("{:?}", e))),
    }
}
