use crate::constants::MOBILE_UA_TOKENS;

/// What the browser exposes, as probed once at start-up.
#[derive(Clone, Debug, Default)]
pub struct Capabilities {
    pub has_touch: bool,
    pub has_orientation_events: bool,
    pub user_agent: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Tilt-driven, needs the activation gesture first.
    Mobile,
    /// Mouse-driven, input is unlocked immediately.
    Desktop,
}

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
}

pub fn classify_environment(caps: &Capabilities) -> Environment {
    if caps.has_touch && caps.has_orientation_events && is_mobile_user_agent(&caps.user_agent) {
        Environment::Mobile
    } else {
        Environment::Desktop
    }
}
