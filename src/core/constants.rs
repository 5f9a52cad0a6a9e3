use std::time::Duration;

// Carousel tuning shared by the scene controller and the host-side tests.

// Ring layout
pub const CARD_COUNT: usize = 16;
pub const MAX_CARD_COUNT: usize = 256;
pub const RING_RADIUS: f32 = 6.5;
pub const RING_POSITION: [f32; 3] = [0.0, 1.5, 0.0]; // world offset of the rotating group

// Asset slots (images, names and audio tracks cycle through these)
pub const ASSET_SLOTS: usize = 10;
pub const IMAGE_URL_PREFIX: &str = "/img";
pub const AUDIO_URL_PREFIX: &str = "/audio/audio";
pub const LINK_URL_PREFIX: &str = "https://example.com/page";

pub const DEFAULT_CARD_NAMES: [&str; ASSET_SLOTS] = [
    "Card 2",
    "오아시스 2",
    "Card 3",
    "Card 4",
    "Card 5",
    "Card 6",
    "Card 7",
    "Card 8",
    "Card 9",
    "Card 10",
];

// Card sizing
pub const CARD_BASE_SCALE: [f32; 2] = [2.18, 1.5]; // target width/height before the tier factor
pub const CARD_DEPTH_SCALE: f32 = 1.5;
pub const CARD_INITIAL_SCALE: [f32; 3] = [2.618, 1.5, 1.5];
pub const CARD_CORNER_RADIUS: f32 = 0.075;
pub const FOCUSED_SCALE_FACTOR: f32 = 1.4;
pub const ACTIVE_SCALE_FACTOR: f32 = 1.05;
pub const INACTIVE_SCALE_FACTOR: f32 = 1.0;
pub const CARD_SCALE_SMOOTH_TIME: f32 = 0.15;

// Active card overlay
pub const OVERLAY_OFFSET: [f32; 3] = [0.0, 0.6, 0.0];
pub const OVERLAY_SCALE: [f32; 2] = [8.5, 1.618 * 3.5];
pub const OVERLAY_CORNER_RADIUS: f32 = 0.3;
pub const OVERLAY_BOB_AMPLITUDE: f32 = 0.2;
pub const OVERLAY_BOB_ANGULAR_FREQ: f32 = 3.0; // rad/s

// Camera rig
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_POINTER_GAIN: [f32; 2] = [2.0, 2.0];
pub const CAMERA_HEIGHT: f32 = 4.5;
pub const CAMERA_DISTANCE: f32 = 9.0;
pub const CAMERA_SMOOTH_TIME: f32 = 0.3;

// Motion and timers
pub const ROTATION_SPEED: f32 = -0.2; // rad/s, negative spins the ring clockwise seen from above
pub const IDLE_THRESHOLD: Duration = Duration::from_secs(15);
pub const AUTO_ADVANCE_TICK: Duration = Duration::from_secs(10);

// Smoothing
pub const DAMP_EPSILON: f32 = 1e-3;
pub const DAMP_MIN_SMOOTH_TIME: f32 = 1e-4;
