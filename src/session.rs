// Reveal session state machine.
//
// Platform-free so it can be exercised on the host. The web controller owns
// one `RevealSession` for the page lifetime and performs the DOM side effects
// whenever a method reports that the reveal fired.

use crate::env::Environment;
use crate::permission::SensorPlan;
use crate::tilt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Debug)]
pub struct RevealSession {
    activated: bool,
    animating: bool,
    state: RevealState,
    revealed: bool,
    threshold: f64,
}

impl RevealSession {
    /// Desktop sessions start activated; mobile ones wait for the permission step.
    pub fn new(env: Environment, threshold: f64) -> Self {
        Self {
            activated: env == Environment::Desktop,
            animating: false,
            state: RevealState::Hidden,
            revealed: false,
            threshold,
        }
    }

    pub fn activated(&self) -> bool {
        self.activated
    }
    pub fn animating(&self) -> bool {
        self.animating
    }
    pub fn state(&self) -> RevealState {
        self.state
    }
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn activate(&mut self) {
        if !self.activated {
            log::info!("[reveal] motion input activated");
        }
        self.activated = true;
    }

    /// Apply the session part of a permission plan. Returns true if input is now unlocked.
    pub fn apply_sensor_plan(&mut self, plan: &SensorPlan) -> bool {
        if plan.activate {
            self.activate();
        }
        self.activated
    }

    /// Feed a horizontal position sample. Returns true when this sample fired the reveal.
    pub fn on_position_sample(&mut self, x: f64, total_width: f64) -> bool {
        if self.animating || self.revealed {
            return false;
        }
        if !(total_width.is_finite() && total_width > 0.0) {
            return false;
        }
        let position = x / total_width;
        if position < self.threshold {
            return self.trigger_reveal();
        }
        false
    }

    /// Feed a tilt sample. `None` means the device reported no gamma reading.
    pub fn on_tilt_sample(&mut self, gamma: Option<f64>, max_tilt_deg: f64, width: f64) -> bool {
        if !self.activated {
            return false;
        }
        let Some(gamma) = gamma else {
            return false;
        };
        let x = tilt::gamma_to_client_x(gamma, max_tilt_deg, width);
        self.on_position_sample(x, width)
    }

    /// One-shot transition to `Visible`. Returns false if it already happened.
    pub fn trigger_reveal(&mut self) -> bool {
        if self.state == RevealState::Visible || self.revealed {
            return false;
        }
        self.state = RevealState::Visible;
        self.revealed = true;
        self.animating = true;
        log::info!("[reveal] panel revealed");
        true
    }

    /// Called when the settle timer elapses after a reveal.
    pub fn settle(&mut self) {
        self.animating = false;
    }
}
