//! Single-line "smoke" notice overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever `NoticeState` currently holds. Each new notice replaces
//! the paragraph entirely, so stale text never lingers.

#[cfg(test)]
#[path = "notice_area_test.rs"]
mod notice_area_test;

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeState};

/// Notice overlay bound to the `NoticeState` context.
#[component]
pub fn NoticeArea() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div id="chatArea" class="chat-area" aria-live="polite">
            {move || {
                notice
                    .get()
                    .current
                    .map(|n| {
                        let style = notice_style(&n);
                        view! { <p class="smoke-text" style=style>{n.text}</p> }
                    })
            }}
        </div>
    }
}

/// Inline style for a notice paragraph.
pub fn notice_style(notice: &Notice) -> String {
    notice.color().map(|c| format!("color: {c}")).unwrap_or_default()
}
