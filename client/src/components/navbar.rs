//! Fixed top navigation with section links, language menu, and the
//! assistant shortcut.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `PageState`: the language menu sets the active language
//! and the assistant button opens the widget without a pre-filled message.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::i18n::{Language, navbar::NavbarStrings, navbar::strings};
use crate::state::page::PageState;
use crate::util::scroll::scroll_to_anchor;

/// Anchor hrefs paired with their labels, in display order.
fn nav_links(copy: &NavbarStrings) -> [(&'static str, &'static str); 5] {
    [
        ("#", copy.home),
        ("#services", copy.services),
        ("#doctors", copy.doctors),
        ("#medicine-tracker", copy.tracker),
        ("#testimonials", copy.testimonials),
    ]
}

/// Language menu visibility after a pointer press anywhere on the page.
#[cfg(any(test, feature = "hydrate"))]
fn lang_menu_after_press(open: bool, pressed_inside: bool) -> bool {
    open && pressed_inside
}

#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let scrolled = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);
    let lang_open = RwSignal::new(false);
    let lang_menu_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scrolled.set(y > 20.0);
        });
        on_cleanup(move || handle.remove());

        let press = window_event_listener(leptos::ev::mousedown, move |ev| {
            use wasm_bindgen::JsCast;
            if !lang_open.get_untracked() {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match (lang_menu_ref.get_untracked(), target) {
                (Some(menu), Some(target)) => menu.contains(Some(&target)),
                _ => false,
            };
            lang_open.set(lang_menu_after_press(true, inside));
        });
        on_cleanup(move || press.remove());
    }

    let copy = move || strings(page.get().language);

    let on_link = move |href: &'static str| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            mobile_open.set(false);
            scroll_to_anchor(href);
        }
    };

    let pick_language = move |lang: Language| {
        page.update(|p| p.set_language(lang));
        lang_open.set(false);
    };

    let link_items = move |class: &'static str| {
        nav_links(copy())
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <a href=href class=class on:click=on_link(href)>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=move || scrolled.get()>
            <div class="navbar__inner">
                <a href="#" class="navbar__brand" on:click=on_link("#")>
                    <span class="navbar__logo">"+"</span>
                    <span class="navbar__name">"NYV Care"</span>
                </a>

                <div class="navbar__links">{move || link_items("navbar__link")}</div>

                <div class="navbar__actions">
                    <div class="lang-menu" node_ref=lang_menu_ref>
                        <button
                            class="lang-menu__toggle"
                            title="Language"
                            on:click=move |_| lang_open.update(|open| *open = !*open)
                        >
                            "🌐 "
                            {move || page.get().language.native_name()}
                        </button>
                        <Show when=move || lang_open.get()>
                            <div class="lang-menu__list">
                                {Language::ALL
                                    .into_iter()
                                    .map(|lang| {
                                        view! {
                                            <button
                                                class="lang-menu__item"
                                                class:lang-menu__item--active=move || page.get().language == lang
                                                on:click=move |_| pick_language(lang)
                                            >
                                                {lang.native_name()}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </Show>
                    </div>

                    <button class="btn btn--primary navbar__bot" on:click=move |_| page.update(|p| p.open_bot(None))>
                        {move || copy().bot}
                    </button>

                    <button
                        class="navbar__burger"
                        title="Menu"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        {move || if mobile_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="navbar__mobile">
                    {move || link_items("navbar__mobile-link")}
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            mobile_open.set(false);
                            page.update(|p| p.open_bot(None));
                        }
                    >
                        {move || copy().bot}
                    </button>
                </div>
            </Show>
        </nav>
    }
}
