// Host-side tests for the environment classifier.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod env {
    include!("../src/env.rs");
}

use env::*;

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

fn caps(has_touch: bool, has_orientation_events: bool, user_agent: &str) -> Capabilities {
    Capabilities {
        has_touch,
        has_orientation_events,
        user_agent: user_agent.to_string(),
    }
}

#[test]
fn mobile_user_agents_are_recognized() {
    assert!(is_mobile_user_agent(IPHONE_UA));
    assert!(is_mobile_user_agent(ANDROID_UA));
    assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    assert!(is_mobile_user_agent("Mozilla/5.0 (webOS/1.4.0; U; en-US)"));
    assert!(is_mobile_user_agent("BlackBerry9700/5.0.0.351"));
    assert!(!is_mobile_user_agent(DESKTOP_UA));
    assert!(!is_mobile_user_agent(""));
}

#[test]
fn user_agent_match_is_case_insensitive() {
    assert!(is_mobile_user_agent("ANDROID"));
    assert!(is_mobile_user_agent("some ipad thing"));
    assert!(is_mobile_user_agent("IEMobile/10.0"));
}

#[test]
fn full_mobile_capabilities_classify_as_mobile() {
    assert_eq!(classify_environment(&caps(true, true, IPHONE_UA)), Environment::Mobile);
    assert_eq!(classify_environment(&caps(true, true, ANDROID_UA)), Environment::Mobile);
}

#[test]
fn any_missing_capability_falls_back_to_desktop() {
    // Touch laptop with a desktop browser
    assert_eq!(classify_environment(&caps(true, true, DESKTOP_UA)), Environment::Desktop);
    // Mobile UA without orientation events
    assert_eq!(classify_environment(&caps(true, false, IPHONE_UA)), Environment::Desktop);
    // Mobile UA emulated in a desktop devtools without touch
    assert_eq!(classify_environment(&caps(false, true, ANDROID_UA)), Environment::Desktop);
    assert_eq!(classify_environment(&Capabilities::default()), Environment::Desktop);
}
