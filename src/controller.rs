//! Glue between the `RevealSession` state machine and the page.
//!
//! The controller is a cheap `Clone` handle: every event closure captures its
//! own copy and all copies share one session.

use crate::config::RevealConfig;
use crate::constants::{ADVISORY_HTML, CLASS_ROTATE_IN, CLASS_ROTATE_OUT};
use crate::dom::{self, Elements};
use crate::env::Environment;
use crate::events;
use crate::overlay;
use crate::permission::{self, SensorPlan};
use crate::sensors;
use crate::session::RevealSession;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[derive(Default)]
struct Wired {
    pointer: Cell<bool>,
    orientation: Cell<bool>,
    permission_pending: Cell<bool>,
}

#[derive(Clone)]
pub struct RevealController {
    elements: Rc<Elements>,
    config: Rc<RevealConfig>,
    session: Rc<RefCell<RevealSession>>,
    environment: Environment,
    wired: Rc<Wired>,
}

impl RevealController {
    pub fn new(elements: Elements, config: RevealConfig, environment: Environment) -> Self {
        let session = RevealSession::new(environment, config.threshold);
        Self {
            elements: Rc::new(elements),
            config: Rc::new(config),
            session: Rc::new(RefCell::new(session)),
            environment,
            wired: Rc::new(Wired::default()),
        }
    }

    pub fn initialize(&self) {
        log::info!("[env] running in {:?} mode", self.environment);
        match self.environment {
            Environment::Desktop => {
                self.hide_overlay();
                self.wire_pointer_once();
            }
            Environment::Mobile => {
                // Sensor access needs a user gesture, so wait for the button.
                let controller = self.clone();
                dom::add_click_listener(&self.elements.activate_button, move || {
                    if controller.wired.permission_pending.replace(true) {
                        return;
                    }
                    let controller = controller.clone();
                    spawn_local(async move {
                        controller.request_permission().await;
                        controller.wired.permission_pending.set(false);
                    });
                });
            }
        }
    }

    pub async fn request_permission(&self) {
        let outcome = sensors::request_orientation_permission().await;
        log::info!("[sensors] permission outcome: {:?}", outcome);
        let plan = permission::plan(&outcome);
        if plan.show_advisory {
            overlay::show_advisory(&self.elements.overlay, ADVISORY_HTML);
            let controller = self.clone();
            dom::set_timeout(self.config.advisory_ms, move || {
                controller.activate_sensors(&plan);
            });
        } else {
            self.activate_sensors(&plan);
        }
    }

    pub fn activate_sensors(&self, plan: &SensorPlan) {
        self.session.borrow_mut().apply_sensor_plan(plan);
        self.hide_overlay();
        if plan.wire_orientation {
            self.wire_orientation_once();
        }
        if plan.wire_pointer {
            self.wire_pointer_once();
        }
    }

    pub fn on_position_sample(&self, x: f64, total_width: f64) {
        let fired = self.session.borrow_mut().on_position_sample(x, total_width);
        if fired {
            self.apply_reveal();
        }
    }

    pub fn on_tilt_sample(&self, gamma: Option<f64>, width: f64) {
        let fired = self
            .session
            .borrow_mut()
            .on_tilt_sample(gamma, self.config.max_tilt_deg, width);
        if fired {
            self.apply_reveal();
        }
    }

    fn apply_reveal(&self) {
        _ = self
            .elements
            .content_wrapper
            .class_list()
            .add_1(CLASS_ROTATE_OUT);
        _ = self.elements.reveal_panel.class_list().add_1(CLASS_ROTATE_IN);

        if let Some(video) = &self.elements.video {
            match video.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[reveal] video play failed: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("[reveal] video play failed: {:?}", e),
            }
        }

        let session = self.session.clone();
        dom::set_timeout(self.config.settle_ms, move || {
            session.borrow_mut().settle();
        });
    }

    fn hide_overlay(&self) {
        if !overlay::is_hidden(&self.elements.overlay) {
            overlay::hide(&self.elements.overlay, self.config.overlay_fade_ms);
        }
    }

    fn wire_pointer_once(&self) {
        if !self.wired.pointer.replace(true) {
            events::wire_pointer(self);
        }
    }

    fn wire_orientation_once(&self) {
        if !self.wired.orientation.replace(true) {
            events::wire_orientation(self);
        }
    }
}
