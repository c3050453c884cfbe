//! Full-screen background video fed by the device camera.

use leptos::prelude::*;

/// Muted, inline, autoplaying `<video>` the camera stream is bound to.
#[component]
pub fn CameraFeed(video_ref: NodeRef<leptos::html::Video>) -> impl IntoView {
    view! {
        <video
            id="bg-video"
            class="camera-feed"
            node_ref=video_ref
            autoplay=true
            muted=true
            playsinline=true
        ></video>
    }
}
