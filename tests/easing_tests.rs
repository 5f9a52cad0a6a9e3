// Host-side tests for the smoothing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
}

use crate::core::easing::*;
use glam::Vec3;

#[test]
fn damp_moves_monotonically_without_overshoot() {
    let mut value = 0.0_f32;
    let mut velocity = 0.0_f32;
    for _ in 0..300 {
        let next = damp(value, &mut velocity, 1.0, 0.3, 1.0 / 60.0);
        assert!(next >= value, "went backwards: {} -> {}", value, next);
        assert!(next <= 1.0, "overshot: {}", next);
        value = next;
    }
    assert_eq!(value, 1.0);
    assert_eq!(velocity, 0.0);
}

#[test]
fn damp_works_downward_too() {
    let mut value = 5.0_f32;
    let mut velocity = 0.0_f32;
    for _ in 0..300 {
        let next = damp(value, &mut velocity, -2.0, 0.15, 1.0 / 60.0);
        assert!(next <= value);
        assert!(next >= -2.0);
        value = next;
    }
    assert_eq!(value, -2.0);
}

#[test]
fn zero_dt_leaves_value_unchanged() {
    let mut velocity = 0.0_f32;
    assert_eq!(damp(0.0, &mut velocity, 1.0, 0.3, 0.0), 0.0);
    assert_eq!(velocity, 0.0);
}

#[test]
fn huge_step_is_clamped_at_target() {
    let mut velocity = 0.0_f32;
    let v = damp(0.0, &mut velocity, 1.0, 0.3, 10.0);
    assert!(v > 0.99 && v <= 1.0, "{}", v);
}

#[test]
fn values_within_epsilon_snap() {
    let mut velocity = 0.5_f32;
    assert_eq!(damp(0.9995, &mut velocity, 1.0, 0.3, 1.0 / 60.0), 1.0);
    assert_eq!(velocity, 0.0);
}

#[test]
fn zero_smooth_time_does_not_produce_nan() {
    let mut velocity = 0.0_f32;
    let v = damp(0.0, &mut velocity, 1.0, 0.0, 1.0 / 60.0);
    assert!(v.is_finite());
    assert!(velocity.is_finite());
}

#[test]
fn damp3_reports_motion_until_settled() {
    let mut d = Damp3::new(Vec3::ZERO);
    let target = Vec3::new(1.0, -2.0, 3.0);
    assert!(d.step(target, 0.3, 1.0 / 60.0));
    for _ in 0..600 {
        d.step(target, 0.3, 1.0 / 60.0);
    }
    assert_eq!(d.value, target);
    assert_eq!(d.velocity(), Vec3::ZERO);
    assert!(!d.step(target, 0.3, 1.0 / 60.0));
}

#[test]
fn bob_is_a_sine_of_elapsed_time() {
    assert_eq!(bob_offset(0.0, 0.2, 3.0), 0.0);
    let peak = bob_offset(std::f32::consts::FRAC_PI_6, 0.2, 3.0);
    assert!((peak - 0.2).abs() < 1e-6);
}
