use crate::core::audio_gate::AudioHandle;
use crate::core::ring::audio_urls;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One `<audio>` element per track, created once and reused.
pub struct MediaTrack {
    element: web::HtmlAudioElement,
    url: String,
}

impl MediaTrack {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(url)
            .map_err(|e| anyhow::anyhow!("audio element for {}: {:?}", url, e))?;
        element.set_preload("auto");
        Ok(Self {
            element,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AudioHandle for MediaTrack {
    fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    // `paused` flips synchronously; the promise only reports whether the
    // browser actually allowed playback.
    fn play(&mut self) {
        match self.element.play() {
            Ok(promise) => {
                let url = self.url.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::error!("Failed to play audio {}: {:?}", url, e);
                    }
                });
            }
            Err(e) => log::error!("Failed to play audio {}: {:?}", self.url, e),
        }
    }

    fn stop(&mut self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }
}

/// Build one track per slot, in slot order.
pub fn load_tracks(slots: usize) -> anyhow::Result<Vec<MediaTrack>> {
    let tracks = audio_urls(slots)
        .iter()
        .map(|url| MediaTrack::new(url))
        .collect::<anyhow::Result<Vec<_>>>()?;
    log::info!("[audio] {} tracks ready", tracks.len());
    Ok(tracks)
}
