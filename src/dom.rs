use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DPR_MAX, DPR_MIN};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A registered event listener; removed from its target on drop.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] add {} listener failed: {:?}", event, e);
                None
            }
        }
    }

    /// Listener on `window` receiving the event downcast to `E`; other event
    /// types are ignored.
    pub fn on_window<E: JsCast + 'static>(
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Option<Self> {
        let window = web::window()?;
        Self::new(window.as_ref(), event, move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A `setInterval` timer; cleared on drop.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn new(period_ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms.max(1),
        ) {
            Ok(id) => Some(Self {
                id,
                _closure: closure,
            }),
            Err(e) => {
                log::error!("[dom] setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

#[inline]
pub fn clamped_device_pixel_ratio(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = clamped_device_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Full page navigation (`window.location.href = url`).
pub fn navigate(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("[click] navigation to {} failed: {:?}", url, e);
        }
    }
}
