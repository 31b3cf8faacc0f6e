// Host-side tests for the motion-permission policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod env {
    include!("../src/env.rs");
}
mod tilt {
    include!("../src/tilt.rs");
}
mod session {
    include!("../src/session.rs");
}
mod permission {
    include!("../src/permission.rs");
}

use constants::{MAX_TILT_DEG, REVEAL_THRESHOLD};
use env::Environment;
use permission::*;
use session::{RevealSession, RevealState};

#[test]
fn permission_answers_parse() {
    assert_eq!(PermissionState::parse("granted"), PermissionState::Granted);
    assert_eq!(PermissionState::parse(" granted "), PermissionState::Prompt);
    assert_eq!(PermissionState::parse("denied"), PermissionState::Denied);
    assert_eq!(PermissionState::parse("prompt"), PermissionState::Prompt);
    assert_eq!(PermissionState::parse("something-new"), PermissionState::Prompt);
    assert_eq!(PermissionState::parse("GRANTED"), PermissionState::Prompt);
}

#[test]
fn grant_and_missing_api_activate() {
    assert_eq!(
        decide(&PermissionOutcome::Answered(PermissionState::Granted)),
        SensorDecision::Activate
    );
    assert_eq!(decide(&PermissionOutcome::Unsupported), SensorDecision::Activate);
}

#[test]
fn refusal_shows_advisory() {
    assert_eq!(
        decide(&PermissionOutcome::Answered(PermissionState::Denied)),
        SensorDecision::Advise
    );
    assert_eq!(
        decide(&PermissionOutcome::Answered(PermissionState::Prompt)),
        SensorDecision::Advise
    );
}

#[test]
fn failed_request_fails_open() {
    let rejected = PermissionOutcome::Failed(PermissionError::Rejected(
        "NotAllowedError: requires user gesture".to_string(),
    ));
    assert_eq!(decide(&rejected), SensorDecision::Activate);
    assert_eq!(
        decide(&PermissionOutcome::Failed(PermissionError::NotCallable)),
        SensorDecision::Activate
    );
}

#[test]
fn error_messages_carry_the_cause() {
    let err = PermissionError::Rejected("boom".to_string());
    assert_eq!(err.to_string(), "permission request rejected: boom");
    assert_eq!(
        PermissionError::NotCallable.to_string(),
        "permission API is not callable"
    );
}

#[test]
fn granted_plan_activates_tilt_only() {
    let p = plan(&PermissionOutcome::Answered(PermissionState::Granted));
    assert!(!p.show_advisory);
    assert!(p.activate);
    assert!(p.wire_orientation);
    assert!(!p.wire_pointer);
    assert_eq!(plan(&PermissionOutcome::Unsupported), p);
    assert_eq!(plan(&PermissionOutcome::Failed(PermissionError::NotCallable)), p);
}

#[test]
fn denied_plan_advises_then_unlocks_both_inputs() {
    let p = plan(&PermissionOutcome::Answered(PermissionState::Denied));
    assert!(p.show_advisory);
    assert!(p.activate);
    assert!(p.wire_orientation);
    assert!(p.wire_pointer);
}

#[test]
fn denial_then_continued_input_still_reveals() {
    let mut s = RevealSession::new(Environment::Mobile, REVEAL_THRESHOLD);
    let p = plan(&PermissionOutcome::Answered(PermissionState::Denied));

    // Nothing is unlocked while the advisory is up
    assert!(!s.on_tilt_sample(Some(-45.0), MAX_TILT_DEG, 1000.0));

    assert!(s.apply_sensor_plan(&p));
    assert!(!s.on_tilt_sample(Some(10.0), MAX_TILT_DEG, 1000.0));
    assert!(!s.on_position_sample(700.0, 1000.0));
    assert!(p.wire_pointer);
    assert!(s.on_position_sample(120.0, 1000.0));
    assert_eq!(s.state(), RevealState::Visible);
}

#[test]
fn every_outcome_reaches_visible() {
    let outcomes = [
        PermissionOutcome::Unsupported,
        PermissionOutcome::Answered(PermissionState::Granted),
        PermissionOutcome::Answered(PermissionState::Denied),
        PermissionOutcome::Answered(PermissionState::Prompt),
        PermissionOutcome::Failed(PermissionError::NotCallable),
        PermissionOutcome::Failed(PermissionError::Rejected("x".into())),
    ];
    for outcome in outcomes.iter() {
        let mut s = RevealSession::new(Environment::Mobile, REVEAL_THRESHOLD);
        let p = plan(outcome);
        assert!(p.wire_orientation, "{:?}", outcome);
        assert!(s.apply_sensor_plan(&p), "{:?}", outcome);
        assert!(s.on_tilt_sample(Some(-45.0), MAX_TILT_DEG, 1000.0), "{:?}", outcome);
        assert!(s.revealed());
    }
}

#[test]
fn plan_without_activation_leaves_session_locked() {
    let mut s = RevealSession::new(Environment::Mobile, REVEAL_THRESHOLD);
    let p = SensorPlan {
        show_advisory: true,
        activate: false,
        wire_orientation: false,
        wire_pointer: false,
    };
    assert!(!s.apply_sensor_plan(&p));
    assert!(!s.on_tilt_sample(Some(-45.0), MAX_TILT_DEG, 1000.0));
    assert_eq!(s.state(), RevealState::Hidden);
}
