#![cfg(target_arch = "wasm32")]
use crate::core::{AudioGate, CarouselConfig, SceneController};
use anyhow::Context;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod textures;

/// A mounted carousel. Dropping it removes every listener, clears the idle
/// timer, stops the frame loop and silences all tracks.
struct Scene {
    handles: events::SceneHandles,
    running: Rc<Cell<bool>>,
    _subscriptions: Vec<dom::EventSubscription>,
    idle_timer: events::IdleTimerSlot,
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.running.set(false);
        *self.idle_timer.borrow_mut() = None;
        let stopped = self.handles.gate.borrow_mut().stop_all();
        log::info!("[scene] torn down, stopped {} track(s)", stopped.len());
    }
}

thread_local! {
    static SCENE: RefCell<Option<Scene>> = const { RefCell::new(None) };
    // Bumped on every mount/teardown so a slow init cannot install a stale scene
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

fn next_generation() -> u32 {
    GENERATION.with(|g| {
        let n = g.get().wrapping_add(1);
        g.set(n);
        n
    })
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<dom::EventSubscription> {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::EventSubscription::on_window("resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");
    mount(CarouselConfig::default());
    Ok(())
}

/// Remount with a different card count and category label.
#[wasm_bindgen]
pub fn init_with(card_count: usize, category: String) {
    mount(
        CarouselConfig::default()
            .with_card_count(card_count)
            .with_category(category),
    );
}

/// Release everything the current scene holds.
#[wasm_bindgen]
pub fn teardown() {
    next_generation();
    let scene = SCENE.with(|s| s.borrow_mut().take());
    drop(scene);
}

fn mount(config: CarouselConfig) {
    teardown();
    let generation = next_generation();
    spawn_local(async move {
        if let Err(e) = init(config, generation).await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init(config: CarouselConfig, generation: u32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * clamped devicePixelRatio
    let mut subscriptions: Vec<dom::EventSubscription> = Vec::new();
    subscriptions.extend(wire_canvas_resize(&canvas));

    let controller = SceneController::new(config);
    let audio_slots = controller.config().audio_slots;
    let image_urls: Vec<String> = controller.cards().iter().map(|c| c.image_url.clone()).collect();
    log::info!(
        "[scene] cards={} radius={:.2} audio_slots={}",
        controller.cards().len(),
        controller.config().radius,
        audio_slots
    );
    overlay::update_category(&document, &controller.config().category);

    let tracks = audio::load_tracks(audio_slots)?;
    let gpu = render::GpuState::new(&canvas)
        .await
        .context("WebGPU init")?;
    if GENERATION.with(|g| g.get()) != generation {
        log::info!("[scene] init superseded by a newer mount");
        return Ok(());
    }

    let handles = events::SceneHandles {
        controller: Rc::new(RefCell::new(controller)),
        gate: Rc::new(RefCell::new(AudioGate::new(tracks))),
        canvas: canvas.clone(),
        started: Instant::now(),
    };
    handles.refresh_focus();

    let mut loader = textures::ImageLoader::default();
    for url in &image_urls {
        loader.request(url);
    }

    // Keyboard navigation and the idle auto-advance timer
    let idle_timer: events::IdleTimerSlot = Rc::new(RefCell::new(None));
    subscriptions.extend(events::wire_keyboard(handles.clone(), idle_timer.clone()));
    events::arm_idle_timer(&handles, &idle_timer);

    // Pointer: camera follow, picking and the first-interaction latch
    subscriptions.extend(events::wire_pointer_handlers(events::PointerWiring {
        handles: handles.clone(),
    }));

    // Renderer loop driven by requestAnimationFrame
    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        handles: handles.clone(),
        gpu,
        loader,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx, running.clone());

    SCENE.with(|s| {
        *s.borrow_mut() = Some(Scene {
            handles,
            running,
            _subscriptions: subscriptions,
            idle_timer,
        });
    });
    Ok(())
}
