use glam::Vec3;

use super::config::CarouselConfig;
use super::constants::{ASSET_SLOTS, AUDIO_URL_PREFIX, IMAGE_URL_PREFIX, LINK_URL_PREFIX};

/// Placement and assets of one card, in ring-local space.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDescriptor {
    pub index: usize,
    pub position: Vec3,
    /// Yaw applied to the card plane so its front faces away from the ring center.
    pub rotation_y: f32,
    pub image_url: String,
    pub link_url: String,
    pub display_name: String,
}

pub fn image_url(index: usize) -> String {
    format!("{}{}.jpg", IMAGE_URL_PREFIX, index % ASSET_SLOTS + 1)
}

pub fn link_url(index: usize) -> String {
    format!("{}{}", LINK_URL_PREFIX, index)
}

/// Track URL for a slot (0-based slot, 1-based file name).
pub fn audio_url(slot: usize) -> String {
    format!("{}{}.mp3", AUDIO_URL_PREFIX, slot + 1)
}

pub fn audio_urls(slots: usize) -> Vec<String> {
    (0..slots).map(audio_url).collect()
}

#[inline]
pub fn card_angle(config: &CarouselConfig, index: usize) -> f32 {
    let step = config.span / config.card_count.max(1) as f32;
    config.from_angle + index as f32 * step
}

#[inline]
pub fn ring_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius)
}

pub fn layout(config: &CarouselConfig) -> Vec<CardDescriptor> {
    let names = &config.names;
    (0..config.card_count)
        .map(|i| {
            let angle = card_angle(config, i);
            CardDescriptor {
                index: i,
                position: ring_position(angle, config.radius),
                rotation_y: std::f32::consts::PI + angle,
                image_url: image_url(i),
                link_url: link_url(i),
                display_name: if names.is_empty() {
                    String::new()
                } else {
                    names[i % names.len()].clone()
                },
            }
        })
        .collect()
}
