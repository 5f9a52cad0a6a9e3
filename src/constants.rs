// Host page and projection constants for the web front-end.
// Interaction tuning lives in `core::constants`.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const CAPTION_ID: &str = "card-caption";
pub const CATEGORY_ID: &str = "category-label";

// Canvas backing store clamp (device pixel ratio range)
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Projection
pub const FOV_Y_DEG: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

// Clear color (page background behind the ring)
pub const CLEAR_RGB: [f64; 3] = [0.94, 0.94, 0.94];

// Texture upload cap; larger images are downscaled before upload
pub const MAX_TEXTURE_DIM: u32 = 1024;

// Initial instance buffer capacity; grows when a ring needs more
pub const INITIAL_QUAD_CAPACITY: usize = 32;
