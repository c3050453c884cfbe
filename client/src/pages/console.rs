//! The console page: camera backdrop, sphere, status gem and notice line.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page's `ConnectionHandle`. Once the `<video>` element is mounted
//! in the browser, startup hands the handle to the connection manager and the
//! same handle goes to the sphere for outbound pings.

use leptos::prelude::*;

use crate::components::{camera_feed::CameraFeed, notice_area::NoticeArea, sphere::Sphere, status_gem::StatusGem};
use crate::net::link::ConnectionHandle;
#[cfg(feature = "hydrate")]
use crate::state::{link::LinkState, notice::NoticeState, surface::SignalSurface};

#[component]
pub fn ConsolePage() -> impl IntoView {
    let handle = ConnectionHandle::new();
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let surface = SignalSurface::new(
            expect_context::<RwSignal<NoticeState>>(),
            expect_context::<RwSignal<LinkState>>(),
        );
        let handle = handle.clone();
        let started = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(video) = video_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            crate::boot::start(video, handle.clone(), surface);
        });
    }

    view! {
        <main class="console">
            <CameraFeed video_ref=video_ref/>
            <div class="console__hud">
                <StatusGem/>
                <Sphere handle=handle/>
                <NoticeArea/>
            </div>
        </main>
    }
}
