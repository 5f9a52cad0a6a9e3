use glam::Vec3;

use super::constants::{DAMP_EPSILON, DAMP_MIN_SMOOTH_TIME};

/// Critically damped smoothing of `current` toward `target`.
///
/// `velocity` carries state between calls and must live next to the value
/// being animated. `smooth_time` is roughly the time (seconds) needed to cover
/// most of the distance. The result is clamped at `target` so a single step
/// never overshoots, and values within `DAMP_EPSILON` snap onto the target.
pub fn damp(current: f32, velocity: &mut f32, target: f32, smooth_time: f32, dt: f32) -> f32 {
    if (current - target).abs() <= DAMP_EPSILON {
        *velocity = 0.0;
        return target;
    }
    let smooth_time = smooth_time.max(DAMP_MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Polynomial approximation of exp(-x), stable for large steps
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Three independent `damp` channels sharing one smoothing time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damp3 {
    pub value: Vec3,
    velocity: Vec3,
}

impl Damp3 {
    pub fn new(value: Vec3) -> Self {
        Self {
            value,
            velocity: Vec3::ZERO,
        }
    }

    /// Advance toward `target`; returns true while any channel is still moving.
    pub fn step(&mut self, target: Vec3, smooth_time: f32, dt: f32) -> bool {
        let before = self.value;
        self.value.x = damp(self.value.x, &mut self.velocity.x, target.x, smooth_time, dt);
        self.value.y = damp(self.value.y, &mut self.velocity.y, target.y, smooth_time, dt);
        self.value.z = damp(self.value.z, &mut self.velocity.z, target.z, smooth_time, dt);
        self.value != before
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

#[inline]
pub fn bob_offset(elapsed_sec: f32, amplitude: f32, angular_freq: f32) -> f32 {
    (elapsed_sec * angular_freq).sin() * amplitude
}
