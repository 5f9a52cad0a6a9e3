use std::cell::RefCell;
use std::rc::Rc;

use super::SceneHandles;
use crate::dom::IntervalHandle;

pub type IdleTimerSlot = Rc<RefCell<Option<IntervalHandle>>>;

/// (Re)start the auto-advance timer so its phase follows the latest manual
/// navigation. The previous timer, if any, is cleared when replaced.
pub fn arm_idle_timer(handles: &SceneHandles, slot: &IdleTimerSlot) {
    let period = handles.controller.borrow().config().auto_advance_tick;
    let period_ms = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
    let h = handles.clone();
    let timer = IntervalHandle::new(period_ms, move || {
        let advanced = h.controller.borrow_mut().poll_idle(h.now());
        if advanced {
            let c = h.controller.borrow();
            log::info!("[idle] advance -> {} ({})", c.focused(), c.focused_name());
            drop(c);
            h.refresh_focus();
        }
    });
    *slot.borrow_mut() = timer;
}
