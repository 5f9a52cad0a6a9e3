use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashSet;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::constants::MAX_TEXTURE_DIM;

/// Decoded image data (RGBA8).
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub enum LoadResult {
    Loaded(String, DecodedImage),
    Failed(String),
}

/// Fetches and decodes card images in the background, once per URL.
///
/// Results are queued and handed out by `drain`, which the frame loop calls
/// before rendering.
#[derive(Default)]
pub struct ImageLoader {
    requested: FnvHashSet<String>,
    finished: Rc<RefCell<Vec<LoadResult>>>,
}

impl ImageLoader {
    pub fn request(&mut self, url: &str) {
        if !self.requested.insert(url.to_string()) {
            return;
        }
        let url = url.to_string();
        let finished = self.finished.clone();
        spawn_local(async move {
            let result = match fetch_and_decode(&url).await {
                Ok(img) => {
                    log::info!("[textures] {} {}x{}", url, img.width, img.height);
                    LoadResult::Loaded(url, img)
                }
                Err(e) => {
                    log::warn!("[textures] {} failed: {:#}", url, e);
                    LoadResult::Failed(url)
                }
            };
            finished.borrow_mut().push(result);
        });
    }

    pub fn drain(&mut self) -> Vec<LoadResult> {
        std::mem::take(&mut *self.finished.borrow_mut())
    }
}

async fn fetch_and_decode(url: &str) -> anyhow::Result<DecodedImage> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let bytes = resp.binary().await?;
    decode_image(&bytes)
}

pub fn decode_image(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    // Cap the longest side so every card fits comfortably in GPU memory
    let longest = w.max(h);
    let (width, height, rgba) = if longest > MAX_TEXTURE_DIM {
        let ratio = MAX_TEXTURE_DIM as f32 / longest as f32;
        let nw = ((w as f32 * ratio) as u32).max(1);
        let nh = ((h as f32 * ratio) as u32).max(1);
        let resized =
            image::imageops::resize(&rgba, nw, nh, image::imageops::FilterType::Triangle);
        (nw, nh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };
    Ok(DecodedImage {
        width,
        height,
        rgba,
    })
}
