use glam::Vec2;
use web_sys as web;

/// Client (CSS pixel) coordinates to normalized device coordinates of a
/// rectangle: -1..1 on both axes, +y up. `None` outside the rectangle or when
/// it has no area.
#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) || !client.is_finite() {
        return None;
    }
    let local = (client - rect_origin) / rect_size;
    if local.x < 0.0 || local.x > 1.0 || local.y < 0.0 || local.y > 1.0 {
        return None;
    }
    Some(Vec2::new(local.x * 2.0 - 1.0, 1.0 - local.y * 2.0))
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}
