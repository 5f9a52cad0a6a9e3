use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use web_sys as web;

use crate::audio::MediaTrack;
use crate::core::{AudioGate, GateAction, SceneController};
use crate::dom;
use crate::overlay;

pub mod idle;
pub mod keyboard;
pub mod pointer;

pub use idle::{arm_idle_timer, IdleTimerSlot};
pub use keyboard::wire_keyboard;
pub use pointer::{wire_pointer_handlers, PointerWiring};

/// Everything an input handler or the frame loop needs to reach the scene.
#[derive(Clone)]
pub struct SceneHandles {
    pub controller: Rc<RefCell<SceneController>>,
    pub gate: Rc<RefCell<AudioGate<MediaTrack>>>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl SceneHandles {
    /// Elapsed scene time.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Re-run the audio gate and the caption after any focus or latch change.
    pub fn refresh_focus(&self) {
        let (focused, interacted, caption) = {
            let c = self.controller.borrow();
            (c.focused(), c.state().user_has_interacted(), c.caption())
        };
        let mut gate = self.gate.borrow_mut();
        for action in gate.sync(focused, interacted) {
            match action {
                GateAction::Started(slot) => {
                    log::info!("[audio] play {}", gate.handles()[slot].url())
                }
                GateAction::Stopped(slot) => {
                    log::info!("[audio] stop {}", gate.handles()[slot].url())
                }
            }
        }
        log::debug!("[audio] playing slot {:?}", gate.playing_slot());
        drop(gate);
        if let Some(doc) = dom::window_document() {
            overlay::update_caption(&doc, &caption);
        }
    }
}
