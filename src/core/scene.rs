use std::time::Duration;

use fnv::FnvHashSet;
use glam::{Mat4, Vec2, Vec3};

use super::active_card::ActiveCard;
use super::card::{card_model, ring_transform, CardAnim};
use super::carousel::{focused_caption, CarouselState, NavEvent};
use super::config::CarouselConfig;
use super::constants::{
    CAMERA_DISTANCE, CAMERA_HEIGHT, CAMERA_POINTER_GAIN, CAMERA_SMOOTH_TIME, CAMERA_START,
    CARD_CORNER_RADIUS, OVERLAY_CORNER_RADIUS, RING_POSITION,
};
use super::easing::Damp3;
use super::picking::{pick_nearest, PickHit, PickQuad, PickTarget};
use super::ring::{layout, CardDescriptor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A card or the active card was hit; the host should navigate there.
    Navigate(String),
    /// First click on empty space; audio may start from now on.
    Latched,
    AlreadyLatched,
}

#[inline]
pub fn key_to_event(key: &str) -> Option<NavEvent> {
    match key {
        "ArrowRight" => Some(NavEvent::Next),
        "ArrowLeft" => Some(NavEvent::Previous),
        _ => None,
    }
}

/// Where the camera wants to be for a normalized pointer (-1..1, y up).
#[inline]
pub fn camera_goal(pointer: Vec2) -> Vec3 {
    Vec3::new(
        -pointer.x * CAMERA_POINTER_GAIN[0],
        pointer.y * CAMERA_POINTER_GAIN[1] + CAMERA_HEIGHT,
        CAMERA_DISTANCE,
    )
}

/// Interaction and animation state of the whole scene, independent of any renderer.
pub struct SceneController {
    config: CarouselConfig,
    state: CarouselState,
    cards: Vec<CardDescriptor>,
    anims: Vec<CardAnim>,
    active: ActiveCard,
    camera: Damp3,
    ring_rotation: f32,
    pointer: Vec2,
    failed_images: FnvHashSet<String>,
}

impl SceneController {
    pub fn new(config: CarouselConfig) -> Self {
        let config = config.validated();
        let cards = layout(&config);
        let anims = vec![CardAnim::default(); cards.len()];
        let state = CarouselState::new(config.card_count, config.idle_threshold);
        Self {
            config,
            state,
            cards,
            anims,
            active: ActiveCard::default(),
            camera: Damp3::new(Vec3::from_array(CAMERA_START)),
            ring_rotation: 0.0,
            pointer: Vec2::ZERO,
            failed_images: FnvHashSet::default(),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    pub fn card_anims(&self) -> &[CardAnim] {
        &self.anims
    }

    pub fn active_card(&self) -> &ActiveCard {
        &self.active
    }

    pub fn focused(&self) -> usize {
        self.state.current_index()
    }

    pub fn focused_name(&self) -> &str {
        self.cards
            .get(self.focused())
            .map(|c| c.display_name.as_str())
            .unwrap_or_default()
    }

    pub fn caption(&self) -> String {
        focused_caption(self.focused())
    }

    pub fn camera_eye(&self) -> Vec3 {
        self.camera.value
    }

    pub fn camera_target(&self) -> Vec3 {
        Vec3::ZERO
    }

    pub fn ring_rotation(&self) -> f32 {
        self.ring_rotation
    }

    pub fn ring_transform(&self) -> Mat4 {
        ring_transform(Vec3::from_array(RING_POSITION), self.ring_rotation)
    }

    /// Latest pointer in normalized device coordinates; malformed input is ignored.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        if ndc.is_finite() {
            self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        }
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Per-frame step: camera, ring rotation, card scales, active card bob.
    pub fn frame(&mut self, dt_sec: f32, elapsed_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.camera
            .step(camera_goal(self.pointer), CAMERA_SMOOTH_TIME, dt);
        self.ring_rotation = (self.ring_rotation + self.config.rotation_speed * dt)
            .rem_euclid(std::f32::consts::TAU);
        let focused = self.focused();
        for (i, anim) in self.anims.iter_mut().enumerate() {
            anim.step(i == focused, dt);
        }
        self.active.step(focused, elapsed_sec);
        self.active.hidden = self.failed_images.contains(&self.active.image_url());
    }

    /// Keyboard navigation; returns the event when the key is bound.
    pub fn handle_key(&mut self, key: &str, now: Duration) -> Option<NavEvent> {
        let event = key_to_event(key)?;
        self.state.apply(event, now);
        Some(event)
    }

    /// Called from the repeating auto-advance timer.
    pub fn poll_idle(&mut self, now: Duration) -> bool {
        self.state.apply(NavEvent::IdleAdvance, now)
    }

    pub fn link_for(&self, target: PickTarget) -> Option<String> {
        match target {
            PickTarget::Card(i) => self.cards.get(i).map(|c| c.link_url.clone()),
            PickTarget::ActiveCard => Some(self.active.link_url()),
        }
    }

    /// Navigation wins over the interaction latch: a click that hits a card
    /// leaves carousel and audio state untouched.
    pub fn handle_click(&mut self, hit: Option<PickHit>) -> PointerOutcome {
        if let Some(url) = hit.and_then(|h| self.link_for(h.target)) {
            return PointerOutcome::Navigate(url);
        }
        if self.state.mark_interacted() {
            PointerOutcome::Latched
        } else {
            PointerOutcome::AlreadyLatched
        }
    }

    pub fn card_model(&self, index: usize) -> Option<Mat4> {
        let card = self.cards.get(index)?;
        let anim = self.anims.get(index)?;
        Some(card_model(self.ring_transform(), card, anim.current_scale()))
    }

    pub fn active_card_model(&self) -> Mat4 {
        self.active
            .model(self.ring_transform(), self.camera_eye(), self.camera_target())
    }

    /// Everything that can be clicked this frame.
    pub fn pick_quads(&self) -> Vec<PickQuad> {
        let ring = self.ring_transform();
        let mut quads: Vec<PickQuad> = self
            .cards
            .iter()
            .zip(self.anims.iter())
            .filter(|(_, anim)| !anim.hidden)
            .map(|(card, anim)| {
                let scale = anim.current_scale();
                PickQuad {
                    target: PickTarget::Card(card.index),
                    model: card_model(ring, card, scale),
                    size: scale.truncate(),
                    corner_radius: CARD_CORNER_RADIUS,
                }
            })
            .collect();
        if !self.active.hidden {
            quads.push(PickQuad {
                target: PickTarget::ActiveCard,
                model: self.active_card_model(),
                size: self.active.scale().truncate(),
                corner_radius: OVERLAY_CORNER_RADIUS,
            });
        }
        quads
    }

    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<PickHit> {
        pick_nearest(ray_origin, ray_dir, self.pick_quads())
    }

    /// Hide every card showing `url`; the active card hides while it shows it.
    pub fn mark_image_failed(&mut self, url: &str) {
        self.failed_images.insert(url.to_string());
        for (card, anim) in self.cards.iter().zip(self.anims.iter_mut()) {
            if card.image_url == url {
                anim.hidden = true;
            }
        }
        self.active.hidden = self.failed_images.contains(&self.active.image_url());
    }
}
