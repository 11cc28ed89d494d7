use super::conversation::ConversationState;
use super::page::PageState;
use super::scheduler::{Instruction, ScheduleState, TimeSlot};
use super::testimonials::{TestimonialDraft, TestimonialsState};
use crate::i18n::{Language, scheduler as scheduler_copy};

#[test]
fn language_switch_preserves_all_list_state() {
    let mut page = PageState::default();
    let mut schedule = ScheduleState::default();
    let mut reviews = TestimonialsState::default();
    let mut chat = ConversationState::default();

    schedule.add("Paracetamol", TimeSlot::Morning, Instruction::AfterFood);
    reviews.submit(&TestimonialDraft { name: "Asha".into(), content: "Kind staff".into(), rating: 5 });
    chat.greet("Hello");
    chat.begin_turn("hi", page.language);

    let meds_before = schedule.medicines.clone();
    let reviews_before = reviews.entries.clone();
    let turns_before = chat.turns.clone();

    page.set_language(Language::Zh);

    assert_eq!(schedule.medicines, meds_before);
    assert_eq!(reviews.entries, reviews_before);
    assert_eq!(chat.turns, turns_before);
    assert_eq!(
        scheduler_copy::strings(page.language).slot(TimeSlot::Morning),
        scheduler_copy::strings(Language::Zh).slot(TimeSlot::Morning)
    );
}
