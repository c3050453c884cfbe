//! Page startup: camera acquisition and the realtime link run side by side.
//!
//! The two are joined rather than chained, so a camera prompt the user never
//! answers (or a denial) cannot hold back the first connection attempt.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::future::Future;

use crate::media::camera::{self, CameraError};
use crate::net::link::{ConnectionManager, Surface, Timer, Transport};
use crate::state::notice::Notice;

/// First notice of the session, naming the endpoint being dialled.
pub fn startup_notice(endpoint: &str) -> Notice {
    Notice::info(format!("Tentando: {endpoint}"))
}

/// Show the startup notice, then drive `acquire_camera` and the link concurrently.
///
/// Never returns: the link reconnects for the lifetime of the page.
pub async fn boot<T, C, S, F>(manager: &ConnectionManager<T, C, S>, acquire_camera: F)
where
    T: Transport,
    C: Timer,
    S: Surface,
    F: Future<Output = Result<(), CameraError>>,
{
    manager.surface().show(startup_notice(&manager.config().endpoint));

    let camera_task = async {
        let result = acquire_camera.await;
        camera::report(result, manager.surface());
    };
    futures::join!(camera_task, manager.run());
}

/// Wire the browser transport, timer and camera to the page's signals and
/// spawn the startup task.
#[cfg(feature = "hydrate")]
pub fn start(
    video: web_sys::HtmlVideoElement,
    handle: crate::net::link::ConnectionHandle,
    surface: crate::state::surface::SignalSurface,
) {
    use crate::net::endpoint::page_endpoint;
    use crate::net::link::LinkConfig;
    use crate::net::socket::{BrowserTransport, GlooTimer};

    let config = LinkConfig::new(page_endpoint());
    leptos::task::spawn_local(async move {
        let manager = ConnectionManager::new(config, handle, BrowserTransport, GlooTimer, surface);
        boot(&manager, camera::acquire(video)).await;
    });
}
