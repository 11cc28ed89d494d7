//! Department grid. Each card's consult button opens the assistant with a
//! question about that department.

use leptos::prelude::*;

use crate::content::ServiceKind;
use crate::i18n::{assistant::consult_intent, services::strings};
use crate::state::page::PageState;

#[component]
pub fn Services() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let copy = move || strings(page.get().language);

    let on_consult = move |kind: ServiceKind| {
        let lang = page.get_untracked().language;
        let title = strings(lang).service(kind).title;
        page.update(|p| p.open_bot(Some(consult_intent(lang, title))));
    };

    view! {
        <section id="services" class="section section--muted">
            <div class="section__header">
                <span class="section__badge">{move || copy().badge}</span>
                <h2 class="section__title">{move || copy().title}</h2>
                <p class="section__desc">{move || copy().desc}</p>
            </div>

            <div class="services-grid">
                {ServiceKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <article class="service-card">
                                <div class=format!("service-card__icon {}", kind.accent_class())>
                                    {kind.icon()}
                                </div>
                                <h3 class="service-card__title">{move || copy().service(kind).title}</h3>
                                <p class="service-card__desc">{move || copy().service(kind).desc}</p>
                                <button class="service-card__consult" on:click=move |_| on_consult(kind)>
                                    {move || copy().consult}
                                    " →"
                                </button>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
