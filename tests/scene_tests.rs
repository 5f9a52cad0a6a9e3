// Host-side tests for the scene controller: camera rig, card animation,
// navigation, picking and the audio gate working together.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod active_card {
        include!("../src/core/active_card.rs");
    }
    pub mod audio_gate {
        include!("../src/core/audio_gate.rs");
    }
    pub mod card {
        include!("../src/core/card.rs");
    }
    pub mod carousel {
        include!("../src/core/carousel.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod picking {
        include!("../src/core/picking.rs");
    }
    pub mod ring {
        include!("../src/core/ring.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::active_card::{camera_rotation, ActiveCard};
use crate::core::audio_gate::{AudioGate, AudioHandle, GateAction};
use crate::core::card::{ring_transform, ScaleTier};
use crate::core::carousel::NavEvent;
use crate::core::config::CarouselConfig;
use crate::core::picking::{PickHit, PickTarget};
use crate::core::scene::*;
use glam::{Vec2, Vec3};
use std::time::Duration;

const DT: f32 = 1.0 / 60.0;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

fn approx3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-3
}

fn run_frames(c: &mut SceneController, frames: usize) {
    for i in 0..frames {
        c.frame(DT, i as f32 * DT);
    }
}

#[derive(Default)]
struct FakeTrack {
    playing: bool,
}

impl AudioHandle for FakeTrack {
    fn is_playing(&self) -> bool {
        self.playing
    }
    fn play(&mut self) {
        self.playing = true;
    }
    fn stop(&mut self) {
        self.playing = false;
    }
}

fn make_gate() -> AudioGate<FakeTrack> {
    AudioGate::new((0..10).map(|_| FakeTrack::default()).collect())
}

fn sync(c: &SceneController, gate: &mut AudioGate<FakeTrack>) -> Vec<GateAction> {
    gate.sync(c.focused(), c.state().user_has_interacted()).to_vec()
}

#[test]
fn keys_map_to_navigation() {
    assert_eq!(key_to_event("ArrowRight"), Some(NavEvent::Next));
    assert_eq!(key_to_event("ArrowLeft"), Some(NavEvent::Previous));
    assert_eq!(key_to_event("ArrowUp"), None);
    assert_eq!(key_to_event("a"), None);
}

#[test]
fn camera_goal_follows_pointer() {
    assert_eq!(camera_goal(Vec2::ZERO), Vec3::new(0.0, 4.5, 9.0));
    assert_eq!(camera_goal(Vec2::new(1.0, -1.0)), Vec3::new(-2.0, 2.5, 9.0));
}

#[test]
fn new_scene_starts_at_first_card() {
    let c = SceneController::new(CarouselConfig::default());
    assert_eq!(c.focused(), 0);
    assert_eq!(c.caption(), "Card 1");
    assert_eq!(c.focused_name(), "Card 2");
    assert_eq!(c.camera_eye(), Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(c.camera_target(), Vec3::ZERO);
    assert_eq!(c.cards().len(), 16);
    assert!(!c.state().user_has_interacted());
}

#[test]
fn camera_eases_to_pointer_goal() {
    let mut c = SceneController::new(CarouselConfig::default());
    c.set_pointer(Vec2::new(0.5, 0.5));
    run_frames(&mut c, 600);
    assert!(approx3(c.camera_eye(), Vec3::new(-1.0, 5.5, 9.0)));
}

#[test]
fn pointer_is_clamped_and_nan_ignored() {
    let mut c = SceneController::new(CarouselConfig::default());
    c.set_pointer(Vec2::new(5.0, -5.0));
    assert_eq!(c.pointer(), Vec2::new(1.0, -1.0));
    c.set_pointer(Vec2::new(f32::NAN, 0.0));
    assert_eq!(c.pointer(), Vec2::new(1.0, -1.0));
}

#[test]
fn ring_rotates_clockwise_and_wraps() {
    let mut c = SceneController::new(CarouselConfig::default());
    c.frame(1.0, 1.0);
    let expected = std::f32::consts::TAU - 0.2;
    assert!((c.ring_rotation() - expected).abs() < 1e-5);
    c.frame(f32::NAN, 2.0);
    assert!((c.ring_rotation() - expected).abs() < 1e-5);
}

#[test]
fn focused_card_grows_and_others_settle_on_active_tier() {
    let mut c = SceneController::new(CarouselConfig::default());
    run_frames(&mut c, 600);
    let anims = c.card_anims();
    assert!(approx3(
        anims[0].current_scale(),
        ScaleTier::Focused.target_scale()
    ));
    assert!(approx3(
        anims[0].current_scale(),
        Vec3::new(2.18 * 1.4, 1.5 * 1.4, 1.5)
    ));
    for anim in &anims[1..] {
        assert!(approx3(
            anim.current_scale(),
            Vec3::new(2.18 * 1.05, 1.5 * 1.05, 1.5)
        ));
    }
}

#[test]
fn focus_change_moves_the_large_card() {
    let mut c = SceneController::new(CarouselConfig::default());
    run_frames(&mut c, 600);
    c.handle_key("ArrowRight", secs(1));
    run_frames(&mut c, 600);
    let anims = c.card_anims();
    assert_eq!(anims[1].tier(true), ScaleTier::Focused);
    assert!(anims[1].current_scale().x > anims[0].current_scale().x);
}

#[test]
fn keyboard_wraps_in_both_directions() {
    let mut c = SceneController::new(CarouselConfig::default());
    assert_eq!(c.handle_key("ArrowLeft", secs(1)), Some(NavEvent::Previous));
    assert_eq!(c.focused(), 15);
    assert_eq!(c.caption(), "Card 16");
    for _ in 0..16 {
        c.handle_key("ArrowRight", secs(2));
    }
    assert_eq!(c.focused(), 15);
    assert_eq!(c.handle_key("Enter", secs(3)), None);
    assert_eq!(c.state().last_interaction(), secs(2));
}

#[test]
fn idle_advance_follows_last_keypress() {
    let mut c = SceneController::new(CarouselConfig::default());
    assert!(!c.poll_idle(secs(10)));
    assert!(c.poll_idle(secs(20)));
    assert_eq!(c.focused(), 1);
    c.handle_key("ArrowRight", secs(25));
    assert!(!c.poll_idle(secs(30)));
    assert!(!c.poll_idle(secs(40)));
    assert!(c.poll_idle(secs(41)));
    assert_eq!(c.focused(), 3);
}

#[test]
fn clicking_a_card_navigates_without_latching() {
    let mut c = SceneController::new(CarouselConfig::default());
    let hit = PickHit {
        target: PickTarget::Card(3),
        t: 4.0,
    };
    assert_eq!(
        c.handle_click(Some(hit)),
        PointerOutcome::Navigate("https://example.com/page3".to_string())
    );
    assert!(!c.state().user_has_interacted());
}

#[test]
fn clicking_the_active_card_opens_the_focused_link() {
    let mut c = SceneController::new(CarouselConfig::default());
    c.handle_key("ArrowRight", secs(1));
    c.handle_key("ArrowRight", secs(1));
    let hit = PickHit {
        target: PickTarget::ActiveCard,
        t: 1.0,
    };
    assert_eq!(
        c.handle_click(Some(hit)),
        PointerOutcome::Navigate("https://example.com/page2".to_string())
    );
}

#[test]
fn first_miss_latches_and_unlocks_audio() {
    let mut c = SceneController::new(CarouselConfig::default());
    let mut gate = make_gate();
    assert!(sync(&c, &mut gate).is_empty());

    assert_eq!(c.handle_click(None), PointerOutcome::Latched);
    assert_eq!(sync(&c, &mut gate), vec![GateAction::Started(0)]);

    c.handle_key("ArrowRight", secs(2));
    assert_eq!(
        sync(&c, &mut gate),
        vec![GateAction::Stopped(0), GateAction::Started(1)]
    );
    assert_eq!(c.handle_click(None), PointerOutcome::AlreadyLatched);
    assert!(sync(&c, &mut gate).is_empty());
}

#[test]
fn unknown_pick_target_falls_back_to_latch() {
    let mut c = SceneController::new(CarouselConfig::default());
    let hit = PickHit {
        target: PickTarget::Card(99),
        t: 1.0,
    };
    assert_eq!(c.handle_click(Some(hit)), PointerOutcome::Latched);
}

#[test]
fn ray_through_ring_hits_front_card() {
    let c = SceneController::new(CarouselConfig::default());
    let hit = c.pick(Vec3::new(0.0, 1.5, 1.0), Vec3::Z).unwrap();
    assert_eq!(hit.target, PickTarget::Card(0));
    assert!((hit.t - 5.5).abs() < 1e-3);
}

#[test]
fn ray_from_camera_hits_active_card() {
    let c = SceneController::new(CarouselConfig::default());
    let eye = c.camera_eye();
    let dir = (Vec3::new(0.0, 2.1, 0.0) - eye).normalize();
    let hit = c.pick(eye, dir).unwrap();
    assert_eq!(hit.target, PickTarget::ActiveCard);
}

#[test]
fn ray_below_the_cards_misses() {
    let c = SceneController::new(CarouselConfig::default());
    assert_eq!(c.pick(Vec3::new(0.0, 0.0, 5.0), Vec3::Z), None);
}

#[test]
fn failed_image_hides_cards_and_active_card() {
    let mut c = SceneController::new(CarouselConfig::default());
    assert_eq!(c.pick_quads().len(), 17);

    c.mark_image_failed("/img1.jpg");
    assert!(c.card_anims()[0].hidden);
    assert!(c.card_anims()[10].hidden);
    assert!(c.active_card().hidden);
    assert_eq!(c.pick_quads().len(), 14);
    assert_eq!(c.pick(Vec3::new(0.0, 1.5, 1.0), Vec3::Z), None);

    c.handle_key("ArrowRight", secs(1));
    c.frame(0.0, 0.0);
    assert!(!c.active_card().hidden);
    assert_eq!(c.pick_quads().len(), 15);
}

#[test]
fn active_card_bobs_around_its_rest_height() {
    let mut c = SceneController::new(CarouselConfig::default());
    c.frame(0.0, 0.0);
    assert!((c.active_card().y - 0.6).abs() < 1e-6);
    c.frame(0.0, std::f32::consts::FRAC_PI_6);
    assert!((c.active_card().y - 0.8).abs() < 1e-5);
}

#[test]
fn custom_card_count_is_respected() {
    let mut c = SceneController::new(CarouselConfig::default().with_card_count(5));
    assert_eq!(c.cards().len(), 5);
    for _ in 0..5 {
        c.handle_key("ArrowRight", secs(1));
    }
    assert_eq!(c.focused(), 0);
}

#[test]
fn active_card_offset_tilts_with_the_camera() {
    let ring = ring_transform(Vec3::new(0.0, 1.5, 0.0), 0.0);
    let eye = Vec3::new(0.0, 4.5, 9.0);
    let card = ActiveCard::default();
    let origin = card.model(ring, eye, Vec3::ZERO).w_axis.truncate();
    let expected =
        Vec3::new(0.0, 1.5, 0.0) + camera_rotation(eye, Vec3::ZERO) * Vec3::new(0.0, 0.6, 0.0);
    assert!(approx3(origin, expected));
    // Camera looks down at the ring, so "up" in billboard space leans away from it
    assert!(origin.y < 2.1);
    assert!(origin.z < 0.0);
    assert!(((origin - Vec3::new(0.0, 1.5, 0.0)).length() - 0.6).abs() < 1e-4);
}

#[test]
fn active_card_offset_ignores_ring_spin() {
    let eye = Vec3::new(-1.0, 5.0, 9.0);
    let card = ActiveCard::default();
    let still = card.model(ring_transform(Vec3::new(0.0, 1.5, 0.0), 0.0), eye, Vec3::ZERO);
    let spun = card.model(ring_transform(Vec3::new(0.0, 1.5, 0.0), 2.0), eye, Vec3::ZERO);
    assert!(approx3(still.w_axis.truncate(), spun.w_axis.truncate()));
}

#[test]
fn click_on_a_card_keeps_audio_locked() {
    let mut c = SceneController::new(CarouselConfig::default());
    let mut gate = make_gate();
    let hit = c.pick(Vec3::new(0.0, 1.5, 1.0), Vec3::Z);
    assert!(matches!(c.handle_click(hit), PointerOutcome::Navigate(_)));
    assert!(sync(&c, &mut gate).is_empty());
    assert_eq!(c.handle_click(None), PointerOutcome::Latched);
    assert_eq!(sync(&c, &mut gate), vec![GateAction::Started(0)]);
}
