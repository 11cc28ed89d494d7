//! Floating health assistant widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `ConversationState` through its two halves: `begin_turn` runs
//! synchronously inside a signal update, the HTTP round trip runs in
//! `spawn_local`, and `complete_turn` lands the outcome. Messages queued by
//! other sections through `PageState::open_bot` are sent as soon as the
//! widget opens.
//!
//! Closing the widget discards the conversation, tears down the server
//! session, and clears any unsent queued message after the close transition.

#[cfg(test)]
#[path = "health_bot_test.rs"]
mod health_bot_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

use crate::i18n::assistant::strings;
use crate::state::conversation::{ChatTurn, ConversationState, TurnRole};
use crate::state::page::PageState;

#[component]
pub fn HealthBot() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let copy = move || strings(page.get().language);

    let send = move |text: String| {
        let language = page.get_untracked().language;
        let mut pending = None;
        conversation.update(|c| pending = c.begin_turn(&text, language));
        let Some(pending) = pending else {
            return false;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::conversation::AssistantTransport;

            let outcome = crate::net::api::HttpTransport.send(&pending).await;
            let error_text = strings(pending.language).error;
            conversation.update(|c| {
                if !c.complete_turn(&pending, outcome, error_text) {
                    log::debug!("dropped assistant reply for a dismissed conversation");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = pending;
        true
    };

    // Greet and flush any queued intent whenever the widget is open.
    Effect::new(move || {
        let (open, language) = page.with(|p| (p.bot_open, p.language));
        if !open {
            return;
        }
        conversation.update(|c| c.greet(strings(language).initial));
        let queued = page.try_update(PageState::take_pending_message).flatten();
        if let Some(message) = queued {
            send(message);
        }
    });

    Effect::new(move || {
        let _ = conversation.with(|c| (c.turns.len(), c.busy));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_close = move |_| {
        page.update(PageState::close_bot);
        let mut stale_session = None;
        conversation.update(|c| stale_session = c.reset());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(session_id) = stale_session {
                crate::net::api::close_assistant_session(session_id).await;
            }
            gloo_timers::future::TimeoutFuture::new(crate::state::page::BOT_CLOSE_DELAY_MS).await;
            page.update(PageState::clear_pending_if_closed);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = stale_session;
    };

    let do_send = move || {
        if send(input.get_untracked()) {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let busy = move || conversation.with(|c| c.busy);
    let can_send = move || !input.get().trim().is_empty() && !busy();

    view! {
        <Show when=move || page.get().bot_open>
            <div class="health-bot">
                <header class="health-bot__header">
                    <div class="health-bot__identity">
                        <span class="health-bot__avatar">"✚"</span>
                        <div>
                            <strong>{move || copy().title}</strong>
                            <span class="health-bot__status">
                                <span class="health-bot__status-dot"></span>
                                {move || copy().online}
                            </span>
                        </div>
                    </div>
                    <button class="health-bot__close" title=move || copy().close on:click=on_close>
                        "✕"
                    </button>
                </header>

                <div class="health-bot__note">
                    <strong>{move || copy().note_label}</strong>
                    " "
                    {move || copy().note}
                </div>

                <div class="health-bot__messages" node_ref=messages_ref>
                    {move || {
                        conversation
                            .get()
                            .turns
                            .into_iter()
                            .map(turn_view)
                            .collect::<Vec<_>>()
                    }}
                    <Show when=busy>
                        <div class="health-bot__typing">{move || copy().typing}</div>
                    </Show>
                </div>

                <div class="health-bot__input-row">
                    <input
                        class="health-bot__input"
                        type="text"
                        placeholder=move || copy().placeholder
                        disabled=busy
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary health-bot__send"
                        title=move || copy().send
                        on:click=move |_| do_send()
                        disabled=move || !can_send()
                    >
                        "➤"
                    </button>
                </div>
                <p class="health-bot__powered">{move || copy().powered}</p>
            </div>
        </Show>
    }
}

fn turn_view(turn: ChatTurn) -> impl IntoView {
    let is_user = turn.role == TurnRole::User;
    let is_markdown = !is_user && !turn.is_error;
    view! {
        <div
            class="bubble"
            class:bubble--user=is_user
            class:bubble--assistant=!is_user
            class:bubble--error=turn.is_error
        >
            {if is_markdown {
                let rendered = render_markdown_html(&turn.text);
                view! { <div class="bubble__markdown" inner_html=rendered></div> }.into_any()
            } else {
                view! { <span>{turn.text}</span> }.into_any()
            }}
        </div>
    }
}

/// Schemes a rendered link or image may point at. Relative targets are
/// always allowed.
const SAFE_URL_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Whether `url` is relative or uses an allowed scheme. Browsers ignore
/// whitespace and control characters inside a scheme, so those are
/// stripped before comparing.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    if url[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme: String = url[..colon]
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    SAFE_URL_SCHEMES.contains(&scheme.as_str())
}

/// Render assistant markdown to HTML with any raw HTML from the model
/// dropped. Links and images with an unsafe target lose their tag and keep
/// only their text.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut dropped_link = false;
    let mut dropped_image = false;
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_url(dest_url) => {
            dropped_link = true;
            None
        }
        Event::End(TagEnd::Link) if dropped_link => {
            dropped_link = false;
            None
        }
        Event::Start(Tag::Image { ref dest_url, .. }) if !is_safe_url(dest_url) => {
            dropped_image = true;
            None
        }
        Event::End(TagEnd::Image) if dropped_image => {
            dropped_image = false;
            None
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
