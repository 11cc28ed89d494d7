//! Patient reviews with star ratings and a collapsible feedback form.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use leptos::prelude::*;

use crate::i18n::testimonials::strings;
use crate::state::page::PageState;
use crate::state::testimonials::{MAX_RATING, MIN_RATING, TestimonialsState};

/// Filled/empty flags for each of the five stars.
fn star_fills(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut fills = [false; MAX_RATING as usize];
    for (i, fill) in fills.iter_mut().enumerate() {
        *fill = i < usize::from(rating);
    }
    fills
}

fn stars(rating: u8) -> impl IntoView {
    view! {
        <div class="stars" title=format!("{rating}/{MAX_RATING}")>
            {star_fills(rating)
                .into_iter()
                .map(|filled| view! { <span class="star" class:star--filled=filled>"★"</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let reviews = expect_context::<RwSignal<TestimonialsState>>();
    let copy = move || strings(page.get().language);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        reviews.update(|r| {
            r.submit_draft();
        });
    };

    view! {
        <section id="testimonials" class="section">
            <div class="section__header">
                <span class="section__badge">{move || copy().badge}</span>
                <h2 class="section__title">{move || copy().title}</h2>
                <button class="btn btn--outline" on:click=move |_| reviews.update(TestimonialsState::toggle_form)>
                    {move || if reviews.get().form_open { copy().close } else { copy().share }}
                </button>
            </div>

            <Show when=move || reviews.get().form_open>
                <form class="review-form" on:submit=on_submit>
                    <h3 class="review-form__title">{move || copy().write}</h3>

                    <div class="field">
                        <span class="field__label">{move || copy().rate}</span>
                        <div class="stars stars--input">
                            {(MIN_RATING..=MAX_RATING)
                                .map(|value| {
                                    view! {
                                        <button
                                            type="button"
                                            class="star"
                                            class:star--filled=move || value <= reviews.get().draft.rating
                                            on:click=move |_| reviews.update(|r| r.draft.rating = value)
                                        >
                                            "★"
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <label class="field">
                        <span class="field__label">{move || copy().name_label}</span>
                        <input
                            class="field__input"
                            type="text"
                            required
                            placeholder=move || copy().placeholder_name
                            prop:value=move || reviews.get().draft.name
                            on:input=move |ev| reviews.update(|r| r.draft.name = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">{move || copy().feedback_label}</span>
                        <textarea
                            class="field__input field__input--area"
                            rows="4"
                            required
                            placeholder=move || copy().placeholder_feedback
                            prop:value=move || reviews.get().draft.content
                            on:input=move |ev| reviews.update(|r| r.draft.content = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <button class="btn btn--primary" type="submit">
                        {move || copy().submit}
                    </button>
                </form>
            </Show>

            <div class="reviews-grid">
                <For
                    each=move || reviews.get().entries
                    key=|entry| entry.id
                    children=|entry| {
                        view! {
                            <article class="review-card">
                                {stars(entry.rating)}
                                <p class="review-card__content">"\u{201c}" {entry.content} "\u{201d}"</p>
                                <div class="review-card__author">
                                    <img class="review-card__avatar" src=entry.image_url alt=entry.name.clone()/>
                                    <div>
                                        <strong>{entry.name}</strong>
                                        <span class="review-card__role">{entry.role}</span>
                                    </div>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
        </section>
    }
}
