use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickTarget {
    Card(usize),
    ActiveCard,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub target: PickTarget,
    pub t: f32,
}

/// A unit quad (-0.5..0.5 in x/y) placed by `model`, whose x/y scale is `size`.
/// `corner_radius` is in the same units as `size`.
#[derive(Clone, Copy, Debug)]
pub struct PickQuad {
    pub target: PickTarget,
    pub model: Mat4,
    pub size: Vec2,
    pub corner_radius: f32,
}

/// Is `p` (centered, in scaled units) inside a rounded rectangle of `half_extent`?
#[inline]
pub fn inside_rounded_rect(p: Vec2, half_extent: Vec2, corner_radius: f32) -> bool {
    let a = p.abs();
    if a.x > half_extent.x || a.y > half_extent.y {
        return false;
    }
    let r = corner_radius.clamp(0.0, half_extent.min_element());
    let q = a - (half_extent - Vec2::splat(r));
    if q.x > 0.0 && q.y > 0.0 {
        return q.length() <= r;
    }
    true
}

/// Ray against one quad; returns the ray parameter of the hit.
///
/// `ray_dir` need not be normalized; `t` is expressed in its units. Both faces
/// count as hits.
pub fn ray_quad(ray_origin: Vec3, ray_dir: Vec3, quad: &PickQuad) -> Option<f32> {
    if quad.model.determinant().abs() < 1e-12 {
        return None;
    }
    let inv = quad.model.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    if d.z.abs() < 1e-8 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = Vec2::new(o.x + d.x * t, o.y + d.y * t) * quad.size;
    inside_rounded_rect(p, quad.size * 0.5, quad.corner_radius).then_some(t)
}

pub fn pick_nearest<I>(ray_origin: Vec3, ray_dir: Vec3, quads: I) -> Option<PickHit>
where
    I: IntoIterator<Item = PickQuad>,
{
    let mut best: Option<PickHit> = None;
    for quad in quads {
        if let Some(t) = ray_quad(ray_origin, ray_dir, &quad) {
            match best {
                Some(b) if t >= b.t => {}
                _ => {
                    best = Some(PickHit {
                        target: quad.target,
                        t,
                    })
                }
            }
        }
    }
    best
}
