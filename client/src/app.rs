//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::console::ConsolePage;
use crate::state::{link::LinkState, notice::NoticeState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notice and link state contexts shared by the console widgets.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notice = RwSignal::new(NoticeState::default());
    let link = RwSignal::new(LinkState::default());

    provide_context(notice);
    provide_context(link);

    view! {
        <Stylesheet id="leptos" href="/pkg/aeon.css"/>
        <Title text="Aeon"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
