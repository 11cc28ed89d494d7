//! Site footer: clinic blurb, quick links, departments, and contact details.

use leptos::prelude::*;

use crate::content::{CLINIC_ADDRESS, CLINIC_EMAIL, CLINIC_PHONE};
use crate::i18n::{assistant::book_intent, footer::strings};
use crate::state::page::PageState;
use crate::util::scroll::scroll_to_anchor;

#[component]
pub fn Footer() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let copy = move || strings(page.get().language);

    let go = move |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            scroll_to_anchor(href);
        }
    };

    let on_book = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let lang = page.get_untracked().language;
        page.update(|p| p.open_bot(Some(book_intent(lang).to_owned())));
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__about">
                    <div class="navbar__brand">
                        <span class="navbar__logo">"+"</span>
                        <span class="navbar__name">"NYV Care"</span>
                    </div>
                    <p>{move || copy().desc}</p>
                </div>

                <div class="footer__column">
                    <h4>{move || copy().links}</h4>
                    <a href="#" on:click=go("#")>{move || copy().about}</a>
                    <a href="#services" on:click=go("#services")>{move || copy().services}</a>
                    <a href="#doctors" on:click=go("#doctors")>{move || copy().find_doc}</a>
                    <a href="#" on:click=on_book>{move || copy().book}</a>
                    <a href="#">{move || copy().portal}</a>
                </div>

                <div class="footer__column">
                    <h4>{move || copy().depts}</h4>
                    <span>{move || copy().cardio}</span>
                    <span>{move || copy().neuro}</span>
                    <span>{move || copy().peds}</span>
                    <span>{move || copy().ortho}</span>
                    <span>{move || copy().derma}</span>
                </div>

                <div class="footer__column">
                    <h4>{move || copy().contact}</h4>
                    <span>"📍 " {CLINIC_ADDRESS}</span>
                    <a href=format!("tel:{CLINIC_PHONE}")>"📞 " {CLINIC_PHONE}</a>
                    <a href=format!("mailto:{CLINIC_EMAIL}")>"✉ " {CLINIC_EMAIL}</a>
                </div>
            </div>

            <div class="footer__bottom">
                <span>"© 2025 NYV Care."</span>
                <div class="footer__legal">
                    <a href="#">{move || copy().privacy}</a>
                    <a href="#">{move || copy().terms}</a>
                </div>
            </div>
        </footer>
    }
}
