use super::*;

fn draft(name: &str, content: &str, rating: u8) -> TestimonialDraft {
    TestimonialDraft { name: name.to_owned(), content: content.to_owned(), rating }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_shows_seed_reviews_with_closed_form() {
    let state = TestimonialsState::default();
    assert_eq!(state.entries.len(), 3);
    assert!(!state.form_open);
    assert_eq!(state.draft.rating, 5);
}

#[test]
fn toggle_form_flips_open_flag() {
    let mut state = TestimonialsState::default();
    state.toggle_form();
    assert!(state.form_open);
    state.toggle_form();
    assert!(!state.form_open);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_rejects_blank_name_or_content() {
    let mut state = TestimonialsState::default();
    assert_eq!(state.submit(&draft("", "Great clinic", 5)), None);
    assert_eq!(state.submit(&draft("Asha", "   ", 5)), None);
    assert_eq!(state.entries.len(), 3);
}

#[test]
fn submit_prepends_one_entry_with_chosen_rating() {
    let mut state = TestimonialsState::default();
    let id = state.submit(&draft("Asha Rao", "Friendly staff.", 3)).unwrap();

    assert_eq!(state.entries.len(), 4);
    let first = &state.entries[0];
    assert_eq!(first.id, id);
    assert_eq!(first.name, "Asha Rao");
    assert_eq!(first.role, VISITOR_ROLE);
    assert_eq!(first.rating, 3);
    assert_eq!(state.entries[1].name, "Alex Robinson");
}

#[test]
fn submit_clamps_rating_into_range() {
    let mut state = TestimonialsState::default();
    state.submit(&draft("A", "B", 0));
    assert_eq!(state.entries[0].rating, MIN_RATING);
    state.submit(&draft("A", "B", 9));
    assert_eq!(state.entries[0].rating, MAX_RATING);
}

#[test]
fn submit_trims_name_and_content() {
    let mut state = TestimonialsState::default();
    state.submit(&draft("  Ravi ", " Quick visit. ", 4));
    assert_eq!(state.entries[0].name, "Ravi");
    assert_eq!(state.entries[0].content, "Quick visit.");
}

#[test]
fn submit_draft_resets_and_closes_form() {
    let mut state = TestimonialsState::default();
    state.form_open = true;
    state.draft = draft("Ravi", "Good", 2);

    assert!(state.submit_draft().is_some());
    assert!(!state.form_open);
    assert_eq!(state.draft, TestimonialDraft::default());
}

#[test]
fn submit_draft_failure_keeps_form_open() {
    let mut state = TestimonialsState::default();
    state.form_open = true;
    state.draft = draft("Ravi", "", 2);

    assert_eq!(state.submit_draft(), None);
    assert!(state.form_open);
    assert_eq!(state.draft.name, "Ravi");
}

// =============================================================
// Avatar
// =============================================================

#[test]
fn avatar_url_encodes_name() {
    assert_eq!(
        avatar_url("Asha Rao"),
        "https://ui-avatars.com/api/?name=Asha%20Rao&background=random&color=fff"
    );
}
