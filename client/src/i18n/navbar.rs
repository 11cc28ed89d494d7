//! Navbar labels.

use super::Language;

pub struct NavbarStrings {
    pub home: &'static str,
    pub services: &'static str,
    pub doctors: &'static str,
    pub tracker: &'static str,
    pub testimonials: &'static str,
    pub bot: &'static str,
}

const EN: NavbarStrings = NavbarStrings {
    home: "Home",
    services: "Services",
    doctors: "Doctors",
    tracker: "Medicine Tracker",
    testimonials: "Testimonials",
    bot: "Talk to AI Assistant",
};

const HI: NavbarStrings = NavbarStrings {
    home: "होम",
    services: "सेवाएँ",
    doctors: "डॉक्टर्स",
    tracker: "दवा ट्रैकर",
    testimonials: "प्रशंसापत्र",
    bot: "AI सहायक से बात करें",
};

const DE: NavbarStrings = NavbarStrings {
    home: "Startseite",
    services: "Leistungen",
    doctors: "Ärzte",
    tracker: "Medikamente",
    testimonials: "Bewertungen",
    bot: "KI-Assistent",
};

const FR: NavbarStrings = NavbarStrings {
    home: "Accueil",
    services: "Services",
    doctors: "Docteurs",
    tracker: "Médicaments",
    testimonials: "Avis",
    bot: "Assistant IA",
};

const ZH: NavbarStrings = NavbarStrings {
    home: "首页",
    services: "服务",
    doctors: "医生",
    tracker: "药物追踪",
    testimonials: "评价",
    bot: "AI 助手",
};

#[must_use]
pub fn strings(lang: Language) -> &'static NavbarStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
