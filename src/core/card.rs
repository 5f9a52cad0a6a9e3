use glam::{Mat4, Quat, Vec3};

use super::constants::{
    ACTIVE_SCALE_FACTOR, CARD_BASE_SCALE, CARD_DEPTH_SCALE, CARD_INITIAL_SCALE,
    CARD_SCALE_SMOOTH_TIME, FOCUSED_SCALE_FACTOR, INACTIVE_SCALE_FACTOR,
};
use super::easing::Damp3;
use super::ring::CardDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleTier {
    Focused,
    Active,
    Inactive,
}

impl ScaleTier {
    pub fn of(focused: bool, active: bool) -> Self {
        if focused {
            ScaleTier::Focused
        } else if active {
            ScaleTier::Active
        } else {
            ScaleTier::Inactive
        }
    }

    pub fn factor(self) -> f32 {
        match self {
            ScaleTier::Focused => FOCUSED_SCALE_FACTOR,
            ScaleTier::Active => ACTIVE_SCALE_FACTOR,
            ScaleTier::Inactive => INACTIVE_SCALE_FACTOR,
        }
    }

    pub fn target_scale(self) -> Vec3 {
        let f = self.factor();
        Vec3::new(CARD_BASE_SCALE[0] * f, CARD_BASE_SCALE[1] * f, CARD_DEPTH_SCALE)
    }
}

/// Per-card animation state; the card itself holds no policy.
#[derive(Clone, Debug)]
pub struct CardAnim {
    pub scale: Damp3,
    pub active: bool,
    /// Set when the card's image failed to load; hidden cards are neither
    /// drawn nor picked.
    pub hidden: bool,
}

impl Default for CardAnim {
    fn default() -> Self {
        Self {
            scale: Damp3::new(Vec3::from_array(CARD_INITIAL_SCALE)),
            active: true,
            hidden: false,
        }
    }
}

impl CardAnim {
    pub fn tier(&self, focused: bool) -> ScaleTier {
        ScaleTier::of(focused, self.active)
    }

    pub fn step(&mut self, focused: bool, dt: f32) -> bool {
        let target = self.tier(focused).target_scale();
        self.scale.step(target, CARD_SCALE_SMOOTH_TIME, dt)
    }

    pub fn current_scale(&self) -> Vec3 {
        self.scale.value
    }
}

/// World transform of the rotating ring group.
pub fn ring_transform(ring_position: Vec3, ring_rotation: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_rotation_y(ring_rotation), ring_position)
}

/// World transform of a card's unit quad (spanning -0.5..0.5 in x and y).
pub fn card_model(ring: Mat4, card: &CardDescriptor, scale: Vec3) -> Mat4 {
    ring * Mat4::from_scale_rotation_translation(
        scale,
        Quat::from_rotation_y(card.rotation_y),
        card.position,
    )
}
