use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::camera;
use crate::core::constants::{CARD_CORNER_RADIUS, OVERLAY_CORNER_RADIUS};
use crate::events::SceneHandles;
use crate::render::{self, QuadDraw};
use crate::textures::{ImageLoader, LoadResult};

pub struct FrameContext {
    pub handles: SceneHandles,
    pub gpu: render::GpuState,
    pub loader: ImageLoader,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed_sec = self.handles.now().as_secs_f32();

        self.apply_finished_loads();
        self.handles.controller.borrow_mut().frame(dt_sec, elapsed_sec);

        let gpu = &mut self.gpu;
        let c = self.handles.controller.borrow();
        let ring = c.ring_transform();
        let mut quads: Vec<QuadDraw<'_>> = Vec::with_capacity(c.cards().len() + 1);
        for (card, anim) in c.cards().iter().zip(c.card_anims()) {
            if anim.hidden {
                continue;
            }
            let scale = anim.current_scale();
            quads.push(QuadDraw {
                texture_url: &card.image_url,
                model: crate::core::card::card_model(ring, card, scale),
                size: scale.truncate(),
                corner_radius: CARD_CORNER_RADIUS,
            });
        }
        let active = c.active_card();
        let active_url = active.image_url();
        if !active.hidden {
            quads.push(QuadDraw {
                texture_url: &active_url,
                model: c.active_card_model(),
                size: active.scale().truncate(),
                corner_radius: OVERLAY_CORNER_RADIUS,
            });
        }

        let canvas = &self.handles.canvas;
        gpu.resize_if_needed(canvas.width(), canvas.height());
        let eye = c.camera_eye();
        let vp = render::view_proj(camera::aspect(canvas), eye, c.camera_target());
        if let Err(e) = gpu.render(vp, eye, &quads) {
            log::error!("render error: {:?}", e);
        }
    }

    fn apply_finished_loads(&mut self) {
        for result in self.loader.drain() {
            match result {
                LoadResult::Loaded(url, img) => {
                    self.gpu.upload_texture(&url, &img);
                }
                LoadResult::Failed(url) => {
                    self.handles.controller.borrow_mut().mark_image_failed(&url);
                }
            }
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            // Break the self-reference; the closure is freed once this call returns
            let stale = tick_clone.borrow_mut().take();
            spawn_local(async move {
                drop(stale);
            });
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
