// Runtime configuration for the reveal controller.
//
// Defaults come from `constants.rs`; the controller is always built from a
// `RevealConfig` value so tests and embedders can tune it without touching
// globals.

use crate::constants::*;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("reveal threshold {0} is outside (0, 1]")]
    Threshold(f64),
    #[error("max tilt {0} must be a positive number of degrees")]
    MaxTilt(f64),
    #[error("element id for {0} is empty")]
    EmptyId(&'static str),
}

/// Ids of the elements the page must provide. The video is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    pub content_wrapper: String,
    pub reveal_panel: String,
    pub video: String,
    pub overlay: String,
    pub activate_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            content_wrapper: CONTENT_WRAPPER_ID.to_string(),
            reveal_panel: REVEAL_PANEL_ID.to_string(),
            video: VIDEO_ID.to_string(),
            overlay: ACTIVATION_OVERLAY_ID.to_string(),
            activate_button: ACTIVATE_BUTTON_ID.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub max_tilt_deg: f64,
    pub settle_ms: i32,
    pub advisory_ms: i32,
    pub overlay_fade_ms: i32,
    pub ids: ElementIds,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            max_tilt_deg: MAX_TILT_DEG,
            settle_ms: REVEAL_SETTLE_MS,
            advisory_ms: ADVISORY_DISMISS_MS,
            overlay_fade_ms: OVERLAY_FADE_MS,
            ids: ElementIds::default(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if !(self.max_tilt_deg.is_finite() && self.max_tilt_deg > 0.0) {
            return Err(ConfigError::MaxTilt(self.max_tilt_deg));
        }
        // The video id may be empty: the panel works without media.
        let required = [
            ("content wrapper", &self.ids.content_wrapper),
            ("reveal panel", &self.ids.reveal_panel),
            ("activation overlay", &self.ids.overlay),
            ("activate button", &self.ids.activate_button),
        ];
        for (name, id) in required {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyId(name));
            }
        }
        Ok(())
    }
}
