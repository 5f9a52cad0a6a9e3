use web_sys as web;

use super::{arm_idle_timer, IdleTimerSlot, SceneHandles};
use crate::dom::EventSubscription;

pub fn handle_keydown(ev: &web::KeyboardEvent, handles: &SceneHandles, idle_timer: &IdleTimerSlot) {
    let key = ev.key();
    let now = handles.now();
    let event = handles.controller.borrow_mut().handle_key(&key, now);
    if let Some(event) = event {
        {
            let c = handles.controller.borrow();
            log::info!("[keys] {:?} -> {} ({})", event, c.focused(), c.focused_name());
        }
        ev.prevent_default();
        handles.refresh_focus();
        arm_idle_timer(handles, idle_timer);
    }
}

pub fn wire_keyboard(handles: SceneHandles, idle_timer: IdleTimerSlot) -> Option<EventSubscription> {
    EventSubscription::on_window("keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &handles, &idle_timer);
    })
}
