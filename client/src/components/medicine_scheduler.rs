//! Daily medicine organizer: add form on the left, doses grouped by time of
//! day on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! All mutations go through `ScheduleState`; this component only binds form
//! controls to the draft and renders the grouped view.

use leptos::prelude::*;

use crate::i18n::scheduler::strings;
use crate::state::page::PageState;
use crate::state::scheduler::{Instruction, ScheduleState, TimeSlot};

#[component]
pub fn MedicineScheduler() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let schedule = expect_context::<RwSignal<ScheduleState>>();
    let copy = move || strings(page.get().language);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        schedule.update(|s| {
            s.submit_draft();
        });
    };

    view! {
        <section id="medicine-tracker" class="section section--muted">
            <div class="section__header">
                <span class="section__badge">{move || copy().badge}</span>
                <h2 class="section__title">{move || copy().title}</h2>
                <p class="section__desc">{move || copy().desc}</p>
            </div>

            <div class="scheduler">
                <form class="scheduler__form" on:submit=on_submit>
                    <h3 class="scheduler__form-title">{move || copy().add}</h3>

                    <label class="field">
                        <span class="field__label">{move || copy().name_label}</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder=move || copy().placeholder
                            prop:value=move || schedule.get().draft.name
                            on:input=move |ev| schedule.update(|s| s.draft.name = event_target_value(&ev))
                        />
                    </label>

                    <div class="field">
                        <span class="field__label">{move || copy().time_label}</span>
                        <div class="slot-picker">
                            {TimeSlot::ALL
                                .into_iter()
                                .map(|slot| {
                                    view! {
                                        <button
                                            type="button"
                                            class="slot-picker__option"
                                            class:slot-picker__option--active=move || schedule.get().draft.slot == slot
                                            on:click=move |_| schedule.update(|s| s.draft.slot = slot)
                                        >
                                            {move || copy().slot(slot)}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <label class="field">
                        <span class="field__label">{move || copy().instr_label}</span>
                        <select
                            class="field__input"
                            prop:value=move || schedule.get().draft.instruction.key()
                            on:change=move |ev| {
                                if let Some(instruction) = Instruction::from_key(&event_target_value(&ev)) {
                                    schedule.update(|s| s.draft.instruction = instruction);
                                }
                            }
                        >
                            {Instruction::ALL
                                .into_iter()
                                .map(|instruction| {
                                    view! {
                                        <option value=instruction.key()>{move || copy().instruction(instruction)}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <button class="btn btn--primary btn--block" type="submit">
                        {move || copy().add_button}
                    </button>
                </form>

                <div class="scheduler__list">
                    <h3 class="scheduler__list-title">{move || copy().meds}</h3>
                    {TimeSlot::ALL
                        .into_iter()
                        .map(|time_slot| view! { <SlotGroup time_slot=time_slot/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One time-of-day bucket with its doses.
#[component]
fn SlotGroup(time_slot: TimeSlot) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let schedule = expect_context::<RwSignal<ScheduleState>>();
    let copy = move || strings(page.get().language);

    view! {
        <div class=format!("slot-group slot-group--{}", time_slot.key())>
            <div class="slot-group__header">
                <span class="slot-group__name">{move || copy().slot(time_slot)}</span>
                <span class="slot-group__range">{time_slot.time_range()}</span>
                <span class="slot-group__count">{move || schedule.get().count_in_slot(time_slot)}</span>
            </div>
            {move || {
                let state = schedule.get();
                let entries = state.in_slot(time_slot);
                if entries.is_empty() {
                    return view! { <p class="slot-group__empty">{copy().no_meds}</p> }.into_any();
                }
                entries
                    .into_iter()
                    .map(|medicine| {
                        let id = medicine.id;
                        view! {
                            <div class="medicine-row">
                                <div class="medicine-row__text">
                                    <span class="medicine-row__name">{medicine.name.clone()}</span>
                                    <span class="medicine-row__instruction">
                                        {copy().instruction(medicine.instruction)}
                                    </span>
                                </div>
                                <button
                                    class="medicine-row__remove"
                                    title=copy().remove
                                    on:click=move |_| {
                                        schedule.update(|s| {
                                            s.remove(id);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
