//! Specialist roster with a view-all toggle and per-doctor booking.

use leptos::prelude::*;

use crate::content::visible_doctors;
use crate::i18n::{assistant::book_doctor_intent, doctors::strings};
use crate::state::page::PageState;

#[component]
pub fn Doctors() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let show_all = RwSignal::new(false);
    let copy = move || strings(page.get().language);

    let on_book = move |name: &'static str| {
        let lang = page.get_untracked().language;
        page.update(|p| p.open_bot(Some(book_doctor_intent(lang, name))));
    };

    view! {
        <section id="doctors" class="section">
            <div class="section__header section__header--split">
                <div>
                    <span class="section__badge">{move || copy().badge}</span>
                    <h2 class="section__title">{move || copy().title}</h2>
                    <p class="section__desc">{move || copy().desc}</p>
                </div>
                <button class="btn btn--outline" on:click=move |_| show_all.update(|v| *v = !*v)>
                    {move || if show_all.get() { copy().show_less } else { copy().view_all }}
                </button>
            </div>

            <div class="doctors-grid">
                {move || {
                    visible_doctors(show_all.get())
                        .iter()
                        .map(|doctor| {
                            let name = doctor.name;
                            view! {
                                <article class="doctor-card">
                                    <div class="doctor-card__photo">
                                        <img src=doctor.image_url alt=name loading="lazy"/>
                                        <span class="doctor-card__available">{move || copy().available}</span>
                                    </div>
                                    <div class="doctor-card__body">
                                        <span class="doctor-card__specialty">{doctor.specialty}</span>
                                        <h3 class="doctor-card__name">{name}</h3>
                                        <p class="doctor-card__role">{doctor.role}</p>
                                        <button class="btn btn--soft doctor-card__book" on:click=move |_| on_book(name)>
                                            {move || copy().book}
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
