//! The clickable sphere: taps send a ping over the realtime link.

#[cfg(test)]
#[path = "sphere_test.rs"]
mod sphere_test;

use leptos::prelude::*;

use crate::net::link::ConnectionHandle;
use crate::state::link::{ConnectionStatus, LinkState};
#[cfg(feature = "hydrate")]
use crate::state::{notice::NoticeState, surface::SignalSurface};

/// Central sphere. Clicking it runs the ping trigger against `handle`.
#[component]
pub fn Sphere(handle: ConnectionHandle) -> impl IntoView {
    let link = expect_context::<RwSignal<LinkState>>();

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            let surface = SignalSurface::new(expect_context::<RwSignal<NoticeState>>(), link);
            move |_ev: leptos::ev::MouseEvent| {
                let _ = crate::net::link::trigger(&handle, &surface);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handle;
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let class = move || sphere_class(link.get().status);

    view! {
        <div id="mainSphere" class=class on:click=on_click role="button" aria-label="Enviar sinal">
            <div class="sphere__core"></div>
        </div>
    }
}

pub fn sphere_class(status: ConnectionStatus) -> &'static str {
    if status == ConnectionStatus::Open { "sphere sphere--online" } else { "sphere" }
}
