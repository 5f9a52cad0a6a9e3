// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_tiers_are_ordered() {
    assert!(FOCUSED_SCALE_FACTOR > ACTIVE_SCALE_FACTOR);
    assert!(ACTIVE_SCALE_FACTOR > INACTIVE_SCALE_FACTOR);
    assert_eq!(INACTIVE_SCALE_FACTOR, 1.0);
    assert!(CARD_SCALE_SMOOTH_TIME > 0.0);
    assert!(CAMERA_SMOOTH_TIME > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_tick_more_often_than_idle_threshold() {
    assert!(AUTO_ADVANCE_TICK < IDLE_THRESHOLD);
    assert!(!AUTO_ADVANCE_TICK.is_zero());
}

#[test]
fn asset_tables_match_slot_count() {
    assert_eq!(CARD_COUNT, 16);
    assert_eq!(ASSET_SLOTS, 10);
    assert_eq!(DEFAULT_CARD_NAMES.len(), ASSET_SLOTS);
    assert!(DEFAULT_CARD_NAMES.iter().all(|n| !n.is_empty()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_is_larger_than_a_focused_card() {
    assert!(OVERLAY_SCALE[0] > CARD_BASE_SCALE[0] * FOCUSED_SCALE_FACTOR);
    assert!(OVERLAY_SCALE[1] > CARD_BASE_SCALE[1] * FOCUSED_SCALE_FACTOR);
    assert!(OVERLAY_CORNER_RADIUS < OVERLAY_SCALE[1] * 0.5);
    assert!(CARD_CORNER_RADIUS < CARD_BASE_SCALE[1] * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_constants_are_sane() {
    assert!(DPR_MIN >= 1.0 && DPR_MIN <= DPR_MAX);
    assert!(Z_NEAR > 0.0 && Z_NEAR < Z_FAR);
    assert!(FOV_Y_DEG > 0.0 && FOV_Y_DEG < 180.0);
    assert!(INITIAL_QUAD_CAPACITY > CARD_COUNT);
    assert!(MAX_TEXTURE_DIM >= 256);
    assert!(!CANVAS_ID.is_empty());
}
