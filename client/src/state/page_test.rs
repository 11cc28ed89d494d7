use super::*;

#[test]
fn default_page_is_english_with_closed_bot() {
    let page = PageState::default();
    assert_eq!(page.language, Language::En);
    assert!(!page.bot_open);
    assert_eq!(page.pending_bot_message, None);
}

#[test]
fn open_bot_queues_message() {
    let mut page = PageState::default();
    page.open_bot(Some("Book Dr. Priya Patel".to_owned()));
    assert!(page.bot_open);
    assert_eq!(page.take_pending_message().as_deref(), Some("Book Dr. Priya Patel"));
    assert_eq!(page.take_pending_message(), None);
}

#[test]
fn open_bot_without_message_clears_stale_one() {
    let mut page = PageState::default();
    page.open_bot(Some("first".to_owned()));
    page.open_bot(None);
    assert_eq!(page.pending_bot_message, None);
}

#[test]
fn open_bot_ignores_blank_message() {
    let mut page = PageState::default();
    page.open_bot(Some("   ".to_owned()));
    assert!(page.bot_open);
    assert_eq!(page.pending_bot_message, None);
}

#[test]
fn clear_pending_only_when_still_closed() {
    let mut page = PageState::default();
    page.open_bot(Some("hello".to_owned()));
    page.close_bot();
    page.open_bot(Some("again".to_owned()));
    page.clear_pending_if_closed();
    assert_eq!(page.pending_bot_message.as_deref(), Some("again"));

    page.close_bot();
    page.clear_pending_if_closed();
    assert_eq!(page.pending_bot_message, None);
}

#[test]
fn set_language_leaves_bot_state_alone() {
    let mut page = PageState::default();
    page.open_bot(Some("hi".to_owned()));
    page.set_language(Language::Fr);
    assert_eq!(page.language, Language::Fr);
    assert!(page.bot_open);
    assert_eq!(page.pending_bot_message.as_deref(), Some("hi"));
}
