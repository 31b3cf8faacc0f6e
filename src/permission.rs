// Motion-sensor permission outcomes and the fail-open policy applied to them.

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum PermissionError {
    /// The permission promise threw or rejected.
    #[error("permission request rejected: {0}")]
    Rejected(String),
    /// `requestPermission` exists but is not callable or did not return a promise.
    #[error("permission API is not callable")]
    NotCallable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    /// Unknown answers count as "not granted".
    pub fn parse(answer: &str) -> Self {
        match answer {
            "granted" => PermissionState::Granted,
            "denied" => PermissionState::Denied,
            _ => PermissionState::Prompt,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PermissionOutcome {
    /// The platform has no gating API; sensors are readable without asking.
    Unsupported,
    Answered(PermissionState),
    Failed(PermissionError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorDecision {
    /// Start listening to orientation events right away.
    Activate,
    /// Show the self-dismissing advisory, then fall back to listening anyway.
    Advise,
}

/// Steps the controller performs once a decision is reached. When
/// `show_advisory` is set, the remaining steps run after the advisory dismisses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorPlan {
    pub show_advisory: bool,
    pub activate: bool,
    pub wire_orientation: bool,
    pub wire_pointer: bool,
}

impl SensorDecision {
    pub fn plan(self) -> SensorPlan {
        match self {
            SensorDecision::Activate => SensorPlan {
                show_advisory: false,
                activate: true,
                wire_orientation: true,
                wire_pointer: false,
            },
            // A refused grant still keeps both inputs live so the reveal stays reachable.
            SensorDecision::Advise => SensorPlan {
                show_advisory: true,
                activate: true,
                wire_orientation: true,
                wire_pointer: true,
            },
        }
    }
}

pub fn plan(outcome: &PermissionOutcome) -> SensorPlan {
    decide(outcome).plan()
}

pub fn decide(outcome: &PermissionOutcome) -> SensorDecision {
    match outcome {
        PermissionOutcome::Answered(PermissionState::Granted) => SensorDecision::Activate,
        PermissionOutcome::Answered(_) => SensorDecision::Advise,
        PermissionOutcome::Unsupported => SensorDecision::Activate,
        PermissionOutcome::Failed(err) => {
            log::warn!("[sensors] {}; continuing without explicit grant", err);
            SensorDecision::Activate
        }
    }
}
