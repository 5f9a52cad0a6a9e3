use std::time::Duration;

use super::constants::*;

/// Everything a scene needs to lay out its ring and drive its timers.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub card_count: usize,
    pub radius: f32,
    /// Angle of card 0 (radians).
    pub from_angle: f32,
    /// Angular span shared by all cards; a full circle by default.
    pub span: f32,
    pub category: String,
    pub names: Vec<String>,
    /// Number of audio tracks; cards reuse them by `index % audio_slots`.
    pub audio_slots: usize,
    pub idle_threshold: Duration,
    pub auto_advance_tick: Duration,
    pub rotation_speed: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_count: CARD_COUNT,
            radius: RING_RADIUS,
            from_angle: 0.0,
            span: std::f32::consts::TAU,
            category: String::new(),
            names: DEFAULT_CARD_NAMES.iter().map(|s| s.to_string()).collect(),
            audio_slots: ASSET_SLOTS,
            idle_threshold: IDLE_THRESHOLD,
            auto_advance_tick: AUTO_ADVANCE_TICK,
            rotation_speed: ROTATION_SPEED,
        }
    }
}

impl CarouselConfig {
    /// Clamp values that would break the ring math or the timers.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        self.card_count = self.card_count.clamp(1, MAX_CARD_COUNT);
        if !(self.radius.is_finite() && self.radius > 0.0) {
            self.radius = defaults.radius;
        }
        if !self.from_angle.is_finite() {
            self.from_angle = 0.0;
        }
        if !(self.span.is_finite() && self.span > 0.0) {
            self.span = defaults.span;
        }
        if self.names.is_empty() {
            self.names = defaults.names;
        }
        self.audio_slots = self.audio_slots.max(1);
        if self.auto_advance_tick.is_zero() {
            self.auto_advance_tick = defaults.auto_advance_tick;
        }
        if !self.rotation_speed.is_finite() {
            self.rotation_speed = defaults.rotation_speed;
        }
        self
    }

    pub fn with_card_count(mut self, card_count: usize) -> Self {
        self.card_count = card_count;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
