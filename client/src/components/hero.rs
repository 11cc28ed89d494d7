//! Landing hero with the booking call to action.

use leptos::prelude::*;

use crate::content::{HERO_IMAGE_URL, RECOVERY_RATE};
use crate::i18n::{assistant::book_intent, hero::strings};
use crate::state::page::PageState;
use crate::util::scroll::scroll_to_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let copy = move || strings(page.get().language);

    let on_book = move |_| {
        let lang = page.get_untracked().language;
        page.update(|p| p.open_bot(Some(book_intent(lang).to_owned())));
    };

    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__text">
                    <span class="badge">
                        <span class="badge__dot"></span>
                        {move || copy().badge}
                    </span>
                    <h1 class="hero__title">
                        {move || copy().title_line1}
                        <br/>
                        <span class="hero__title-accent">{move || copy().title_line2}</span>
                    </h1>
                    <p class="hero__desc">{move || copy().desc}</p>
                    <div class="hero__ctas">
                        <button class="btn btn--primary btn--lg" on:click=on_book>
                            {move || copy().cta}
                        </button>
                        <a
                            href="#services"
                            class="btn btn--outline btn--lg"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_anchor("#services");
                            }
                        >
                            {move || copy().services}
                        </a>
                    </div>
                    <ul class="hero__features">
                        <li>
                            <strong>{move || copy().verified}</strong>
                            <span>{move || copy().doctors}</span>
                        </li>
                        <li>
                            <strong>{move || copy().fast}</strong>
                            <span>{move || copy().booking}</span>
                        </li>
                        <li>
                            <strong>{move || copy().caring}</strong>
                            <span>{move || copy().focus}</span>
                        </li>
                    </ul>
                </div>

                <div class="hero__visual">
                    <img class="hero__image" src=HERO_IMAGE_URL alt="Doctor with patient"/>
                    <div class="hero__stat">
                        <strong>{RECOVERY_RATE}</strong>
                        <span>{move || copy().recovered}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
