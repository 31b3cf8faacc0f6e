// Reveal tuning and DOM contract shared by the pure state machine and the web glue.

// Trigger
pub const REVEAL_THRESHOLD: f64 = 0.3; // normalized x below which the panel is revealed

// Tilt mapping
pub const MAX_TILT_DEG: f64 = 45.0; // gamma is clamped to +/- this many degrees

// Timers (milliseconds)
pub const REVEAL_SETTLE_MS: i32 = 800; // matches the CSS rotate transition
pub const ADVISORY_DISMISS_MS: i32 = 3000;
pub const OVERLAY_FADE_MS: i32 = 500; // fade before the overlay is taken out of layout

// Element ids provided by the page
pub const CONTENT_WRAPPER_ID: &str = "contentWrapper";
pub const REVEAL_PANEL_ID: &str = "yellowPanel";
pub const VIDEO_ID: &str = "videoPanel";
pub const ACTIVATION_OVERLAY_ID: &str = "activationOverlay";
pub const ACTIVATE_BUTTON_ID: &str = "activateButton";

// Presentation classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ROTATE_OUT: &str = "rotate-out";
pub const CLASS_ROTATE_IN: &str = "rotate-in";

// Case-insensitive user-agent substrings that mark a handheld device
pub const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub const ADVISORY_HTML: &str = "<div class=\"activation-text\">Motion sensors not available or permission denied.<br>You can still use mouse movement on desktop.</div>";
