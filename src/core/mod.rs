pub mod active_card;
pub mod audio_gate;
pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod easing;
pub mod picking;
pub mod ring;
pub mod scene;

pub use audio_gate::{AudioGate, AudioHandle, GateAction};
pub use carousel::{CarouselState, NavEvent};
pub use config::CarouselConfig;
pub use picking::{PickHit, PickTarget};
pub use scene::{PointerOutcome, SceneController};

// Shaders bundled as string constants
pub static CARDS_WGSL: &str = include_str!("../../shaders/cards.wgsl");
