//! Medicine scheduler copy and slot/instruction labels.

use super::Language;
use crate::state::scheduler::{Instruction, TimeSlot};

pub struct SchedulerStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub add: &'static str,
    pub name_label: &'static str,
    pub placeholder: &'static str,
    pub time_label: &'static str,
    pub instr_label: &'static str,
    pub add_button: &'static str,
    morning: &'static str,
    afternoon: &'static str,
    evening: &'static str,
    night: &'static str,
    before_food: &'static str,
    after_food: &'static str,
    empty_stomach: &'static str,
    pub meds: &'static str,
    pub no_meds: &'static str,
    pub remove: &'static str,
}

impl SchedulerStrings {
    #[must_use]
    pub fn slot(&self, slot: TimeSlot) -> &'static str {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
            TimeSlot::Night => self.night,
        }
    }

    #[must_use]
    pub fn instruction(&self, instruction: Instruction) -> &'static str {
        match instruction {
            Instruction::BeforeFood => self.before_food,
            Instruction::AfterFood => self.after_food,
            Instruction::EmptyStomach => self.empty_stomach,
        }
    }
}

const EN: SchedulerStrings = SchedulerStrings {
    badge: "Health Tools",
    title: "Daily Medicine Scheduler",
    desc: "Never miss a dose. Organize your daily medication schedule and keep track of what to take and when.",
    add: "Add Medicine",
    name_label: "Medicine Name",
    placeholder: "e.g. Paracetamol",
    time_label: "Best Time to Take",
    instr_label: "Instructions",
    add_button: "Add to Schedule",
    morning: "Morning",
    afternoon: "Afternoon",
    evening: "Evening",
    night: "Night",
    before_food: "Before Food",
    after_food: "After Food",
    empty_stomach: "Empty Stomach",
    meds: "Meds",
    no_meds: "No medicines scheduled",
    remove: "Remove medicine",
};

const HI: SchedulerStrings = SchedulerStrings {
    badge: "स्वास्थ्य उपकरण",
    title: "दैनिक दवा अनुसूची",
    desc: "कभी भी खुराक न चूकें। अपनी दैनिक दवा अनुसूची व्यवस्थित करें और ट्रैक रखें कि क्या और कब लेना है।",
    add: "दवा जोड़ें",
    name_label: "दवा का नाम",
    placeholder: "जैसे पेरासिटामोल",
    time_label: "लेने का सबसे अच्छा समय",
    instr_label: "निर्देश",
    add_button: "अनुसूची में जोड़ें",
    morning: "सुबह",
    afternoon: "दोपहर",
    evening: "शाम",
    night: "रात",
    before_food: "खाने से पहले",
    after_food: "खाने के बाद",
    empty_stomach: "खाली पेट",
    meds: "दवाएं",
    no_meds: "कोई दवा निर्धारित नहीं है",
    remove: "दवा हटाएं",
};

const DE: SchedulerStrings = SchedulerStrings {
    badge: "Gesundheits-Tools",
    title: "Medikamentenplaner",
    desc: "Verpassen Sie nie eine Dosis. Organisieren Sie Ihren täglichen Medikamentenplan.",
    add: "Medikament hinzufügen",
    name_label: "Medikamentenname",
    placeholder: "z.B. Paracetamol",
    time_label: "Beste Einnahmezeit",
    instr_label: "Anweisungen",
    add_button: "Zum Plan hinzufügen",
    morning: "Morgen",
    afternoon: "Nachmittag",
    evening: "Abend",
    night: "Nacht",
    before_food: "Vor dem Essen",
    after_food: "Nach dem Essen",
    empty_stomach: "Auf nüchternen Magen",
    meds: "Medis",
    no_meds: "Keine Medikamente geplant",
    remove: "Medikament entfernen",
};

const FR: SchedulerStrings = SchedulerStrings {
    badge: "Outils de Santé",
    title: "Planificateur de Médicaments",
    desc: "Ne manquez jamais une dose. Organisez votre calendrier de médicaments quotidien.",
    add: "Ajouter un Médicament",
    name_label: "Nom du Médicament",
    placeholder: "ex: Paracétamol",
    time_label: "Meilleur moment pour prendre",
    instr_label: "Instructions",
    add_button: "Ajouter au Calendrier",
    morning: "Matin",
    afternoon: "Après-midi",
    evening: "Soir",
    night: "Nuit",
    before_food: "Avant le repas",
    after_food: "Après le repas",
    empty_stomach: "À jeun",
    meds: "Médicaments",
    no_meds: "Aucun médicament prévu",
    remove: "Retirer le médicament",
};

const ZH: SchedulerStrings = SchedulerStrings {
    badge: "健康工具",
    title: "每日药物追踪",
    desc: "绝不错的每一剂。安排您的日常用药计划，追踪服用内容和时间。",
    add: "添加药物",
    name_label: "药名",
    placeholder: "例如：扑热息痛",
    time_label: "最佳服用时间",
    instr_label: "说明",
    add_button: "添加到时间表",
    morning: "早上",
    afternoon: "下午",
    evening: "晚上",
    night: "夜间",
    before_food: "饭前",
    after_food: "饭后",
    empty_stomach: "空腹",
    meds: "药物",
    no_meds: "未安排药物",
    remove: "移除药物",
};

#[must_use]
pub fn strings(lang: Language) -> &'static SchedulerStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
