//! Daily medicine schedule kept in page memory.
//!
//! DESIGN
//! ======
//! Entries are keyed by a generated id so two medicines with the same name
//! stay independently removable. Grouping by slot is a view over the flat
//! list; insertion order is preserved inside each slot.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use uuid::Uuid;

/// Part of the day a dose belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// Display order for the slot picker and the grouped list.
    pub const ALL: [TimeSlot; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Clock range shown under the slot heading.
    #[must_use]
    pub fn time_range(self) -> &'static str {
        match self {
            Self::Morning => "6:00 AM - 11:00 AM",
            Self::Afternoon => "12:00 PM - 4:00 PM",
            Self::Evening => "5:00 PM - 8:00 PM",
            Self::Night => "9:00 PM - 11:00 PM",
        }
    }

    /// Stable value for `<option value=...>`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

/// How a dose should be taken relative to meals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Instruction {
    BeforeFood,
    #[default]
    AfterFood,
    EmptyStomach,
}

impl Instruction {
    pub const ALL: [Instruction; 3] = [Self::BeforeFood, Self::AfterFood, Self::EmptyStomach];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::BeforeFood => "before-food",
            Self::AfterFood => "after-food",
            Self::EmptyStomach => "empty-stomach",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|instruction| instruction.key() == key)
    }
}

/// A single scheduled medicine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Medicine {
    pub id: Uuid,
    pub name: String,
    pub slot: TimeSlot,
    pub instruction: Instruction,
}

impl Medicine {
    #[must_use]
    pub fn new(name: impl Into<String>, slot: TimeSlot, instruction: Instruction) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), slot, instruction }
    }
}

/// The visitor's medicine list plus the add-form draft.
#[derive(Clone, Debug)]
pub struct ScheduleState {
    pub medicines: Vec<Medicine>,
    pub draft: MedicineDraft,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self { medicines: crate::content::seed_medicines(), draft: MedicineDraft::default() }
    }
}

/// Unsubmitted form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicineDraft {
    pub name: String,
    pub slot: TimeSlot,
    pub instruction: Instruction,
}

impl ScheduleState {
    /// Empty list, used where the seed entries would get in the way.
    #[must_use]
    pub fn empty() -> Self {
        Self { medicines: Vec::new(), draft: MedicineDraft::default() }
    }

    /// Append a medicine. Blank names are ignored and return `None`.
    pub fn add(&mut self, name: &str, slot: TimeSlot, instruction: Instruction) -> Option<Uuid> {
        if name.trim().is_empty() {
            return None;
        }
        let medicine = Medicine::new(name, slot, instruction);
        let id = medicine.id;
        self.medicines.push(medicine);
        Some(id)
    }

    /// Submit the draft. The name is cleared on success; slot and
    /// instruction stay selected for the next entry.
    pub fn submit_draft(&mut self) -> Option<Uuid> {
        let MedicineDraft { name, slot, instruction } = self.draft.clone();
        let id = self.add(&name, slot, instruction)?;
        self.draft.name.clear();
        Some(id)
    }

    /// Remove exactly the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);
        self.medicines.len() != before
    }

    #[must_use]
    pub fn in_slot(&self, slot: TimeSlot) -> Vec<&Medicine> {
        self.medicines.iter().filter(|m| m.slot == slot).collect()
    }

    #[must_use]
    pub fn count_in_slot(&self, slot: TimeSlot) -> usize {
        self.medicines.iter().filter(|m| m.slot == slot).count()
    }
}
