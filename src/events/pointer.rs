use web_sys as web;

use super::SceneHandles;
use crate::camera;
use crate::core::PointerOutcome;
use crate::dom::{self, EventSubscription};
use crate::input;

#[derive(Clone)]
pub struct PointerWiring {
    pub handles: SceneHandles,
}

pub fn wire_pointer_handlers(w: PointerWiring) -> Vec<EventSubscription> {
    [wire_pointermove(&w), wire_click(&w)]
        .into_iter()
        .flatten()
        .collect()
}

fn wire_pointermove(w: &PointerWiring) -> Option<EventSubscription> {
    let w = w.clone();
    EventSubscription::on_window("pointermove", move |ev: web::PointerEvent| {
        if let Some(ndc) = input::pointer_ndc(&ev, &w.handles.canvas) {
            w.handles.controller.borrow_mut().set_pointer(ndc);
        }
    })
}

// Touch only unlocks media playback on release, and a drag that starts over
// a card must not navigate.
fn wire_click(w: &PointerWiring) -> Option<EventSubscription> {
    let w = w.clone();
    EventSubscription::on_window("click", move |ev: web::MouseEvent| {
        let h = &w.handles;
        let hit = input::pointer_ndc(&ev, &h.canvas).and_then(|ndc| {
            let c = h.controller.borrow();
            let (ro, rd) = camera::ndc_to_world_ray(
                ndc,
                camera::aspect(&h.canvas),
                c.camera_eye(),
                c.camera_target(),
            );
            c.pick(ro, rd)
        });
        let outcome = h.controller.borrow_mut().handle_click(hit);
        match outcome {
            PointerOutcome::Navigate(url) => {
                log::info!("[click] {:?} -> {}", hit.map(|p| p.target), url);
                dom::navigate(&url);
            }
            PointerOutcome::Latched => {
                log::info!("[click] first interaction, audio unlocked");
                h.refresh_focus();
            }
            PointerOutcome::AlreadyLatched => {}
        }
    })
}
