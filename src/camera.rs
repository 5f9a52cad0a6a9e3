use glam::{Mat4, Vec2, Vec3, Vec4};
use web_sys as web;

use crate::constants::{FOV_Y_DEG, Z_FAR, Z_NEAR};

#[inline]
pub fn aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width() as f32 / (canvas.height() as f32).max(1.0)
}

pub fn view_proj(aspect: f32, eye: Vec3, target: Vec3) -> Mat4 {
    let proj = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    proj * view
}

/// Compute a world-space ray from normalized device coordinates.
///
/// - `ndc`: pointer in -1..1 with +y up
/// - `eye`, `target`: current camera look-at
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn ndc_to_world_ray(ndc: Vec2, aspect: f32, eye: Vec3, target: Vec3) -> (Vec3, Vec3) {
    let inv = view_proj(aspect, eye, target).inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize();
    (eye, rd)
}
