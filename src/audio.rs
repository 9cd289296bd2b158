use crate::core::{AudioResource, PlayFuture, PlaybackError};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// `HTMLAudioElement` backed music track.
pub struct HtmlAudio {
    element: Option<web::HtmlAudioElement>,
}

impl HtmlAudio {
    pub fn new() -> Self {
        let element = match web::HtmlAudioElement::new() {
            Ok(el) => Some(el),
            Err(e) => {
                log::error!("[audio] HtmlAudioElement error: {:?}", e);
                None
            }
        };
        Self { element }
    }
}

impl AudioResource for HtmlAudio {
    fn load(&mut self, source: &str) {
        if let Some(el) = &self.element {
            el.set_src(source);
        }
    }

    fn set_loop(&mut self, looping: bool) {
        if let Some(el) = &self.element {
            el.set_loop(looping);
        }
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(el) = &self.element {
            el.set_volume(volume as f64);
        }
    }

    fn play(&mut self) -> PlayFuture {
        let promise = match &self.element {
            Some(el) => el.play(),
            None => {
                return Box::pin(async {
                    Err::<(), _>(PlaybackError::Unavailable("no audio element".into()))
                })
            }
        };
        Box::pin(async move {
            let promise =
                promise.map_err(|e| PlaybackError::Unavailable(format!("{:?}", e)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| PlaybackError::Blocked(format!("{:?}", e)))
        })
    }

    fn pause(&mut self) {
        if let Some(el) = &self.element {
            _ = el.pause();
        }
    }

    fn dispose(&mut self) {
        if let Some(el) = self.element.take() {
            _ = el.pause();
            el.set_src("");
        }
    }
}
