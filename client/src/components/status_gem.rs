//! Connection status gem.

#[cfg(test)]
#[path = "status_gem_test.rs"]
mod status_gem_test;

use leptos::prelude::*;

use crate::state::link::{ConnectionStatus, LinkState};

/// Small colored dot mirroring the realtime link status.
#[component]
pub fn StatusGem() -> impl IntoView {
    let link = expect_context::<RwSignal<LinkState>>();

    let style = move || gem_style(link.get().indicator);
    let title = move || status_label(link.get().status);

    view! { <div id="connectionStatus" class="status-gem" style=style title=title></div> }
}

pub fn gem_style(indicator: Option<&str>) -> String {
    indicator.map(|c| format!("background-color: {c}")).unwrap_or_default()
}

pub fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Idle => "aguardando",
        ConnectionStatus::Connecting => "conectando",
        ConnectionStatus::Open => "conectado",
        ConnectionStatus::Closed => "desconectado",
    }
}
