//! Camera acquisition for the background video.
//!
//! One video-only `getUserMedia` request at startup. On success the stream is
//! bound to the `<video>` element and played; on failure a single error
//! notice is shown and nothing is retried.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::state::notice::{Notice, NoticeSink};

pub const CAMERA_ERROR_NOTICE: &str = "Erro na Câmera (Permissão negada?)";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("media devices unavailable: {0}")]
    Unavailable(String),
    #[error("camera request rejected: {0}")]
    Denied(String),
}

/// Surface the outcome of `acquire` to the user.
pub fn report(result: Result<(), CameraError>, notices: &impl NoticeSink) {
    match result {
        Ok(()) => leptos::logging::log!("camera: streaming"),
        Err(e) => {
            leptos::logging::warn!("camera: {e}");
            notices.show(Notice::error(CAMERA_ERROR_NOTICE));
        }
    }
}

/// Request the camera and attach the stream to `video`.
///
/// Playback rejection (autoplay policy) is logged but not reported: the
/// stream is attached and the element's `autoplay` picks it up on the next
/// user gesture.
///
/// # Errors
///
/// Returns [`CameraError`] if media devices are missing or the request is
/// rejected (permission denied, no camera).
#[cfg(feature = "hydrate")]
pub async fn acquire(video: web_sys::HtmlVideoElement) -> Result<(), CameraError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use crate::util::js::error_text;

    let window = web_sys::window().ok_or(CameraError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CameraError::Unavailable(error_text(&e)))?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let request = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Unavailable(error_text(&e)))?;
    let stream = JsFuture::from(request)
        .await
        .map_err(|e| CameraError::Denied(error_text(&e)))?
        .dyn_into::<web_sys::MediaStream>()
        .map_err(|e| CameraError::Denied(error_text(&e)))?;

    video.set_src_object(Some(&stream));
    match video.play() {
        Ok(playing) => {
            if let Err(e) = JsFuture::from(playing).await {
                leptos::logging::warn!("camera: playback blocked: {}", error_text(&e));
            }
        }
        Err(e) => leptos::logging::warn!("camera: playback failed: {}", error_text(&e)),
    }
    Ok(())
}
