//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Html, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{
    conversation::ConversationState, page::PageState, scheduler::ScheduleState,
    testimonials::TestimonialsState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(PageState::default());
    provide_context(page);
    provide_context(RwSignal::new(ConversationState::default()));
    provide_context(RwSignal::new(ScheduleState::default()));
    provide_context(RwSignal::new(TestimonialsState::default()));

    view! {
        <Html attr:lang=move || page.get().language.code()/>
        <Stylesheet id="leptos" href="/pkg/nyv-care.css"/>
        <Title text="NYV Care | Modern Healthcare"/>
        <Meta name="description" content="NYV Care clinic: specialists, services, and a 24/7 AI health assistant."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
