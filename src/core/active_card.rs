use glam::{Mat4, Quat, Vec3};

use super::constants::{
    OVERLAY_BOB_AMPLITUDE, OVERLAY_BOB_ANGULAR_FREQ, OVERLAY_OFFSET, OVERLAY_SCALE,
};
use super::easing::bob_offset;
use super::ring::{image_url, link_url};

/// Larger billboarded preview of the focused card.
#[derive(Clone, Debug)]
pub struct ActiveCard {
    initial_y: f32,
    pub y: f32,
    pub focused: usize,
    pub hidden: bool,
}

impl Default for ActiveCard {
    fn default() -> Self {
        Self {
            initial_y: OVERLAY_OFFSET[1],
            y: OVERLAY_OFFSET[1],
            focused: 0,
            hidden: false,
        }
    }
}

impl ActiveCard {
    pub fn step(&mut self, focused: usize, elapsed_sec: f32) {
        self.focused = focused;
        self.y = self.initial_y
            + bob_offset(elapsed_sec, OVERLAY_BOB_AMPLITUDE, OVERLAY_BOB_ANGULAR_FREQ);
    }

    pub fn image_url(&self) -> String {
        image_url(self.focused)
    }

    pub fn link_url(&self) -> String {
        link_url(self.focused)
    }

    pub fn local_position(&self) -> Vec3 {
        Vec3::new(OVERLAY_OFFSET[0], self.y, OVERLAY_OFFSET[2])
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::new(OVERLAY_SCALE[0], OVERLAY_SCALE[1], 1.0)
    }

    /// World transform: anchored at the ring group origin, oriented like the
    /// camera. The bob offset is applied in billboard space, so it tilts with
    /// the camera and ignores the ring's spin.
    pub fn model(&self, ring: Mat4, cam_eye: Vec3, cam_target: Vec3) -> Mat4 {
        let rotation = camera_rotation(cam_eye, cam_target);
        let world_pos = ring.transform_point3(Vec3::ZERO) + rotation * self.local_position();
        Mat4::from_scale_rotation_translation(self.scale(), rotation, world_pos)
    }
}

/// World-space orientation of a camera at `eye` looking at `target` with +Y up.
pub fn camera_rotation(eye: Vec3, target: Vec3) -> Quat {
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
    rotation
}
