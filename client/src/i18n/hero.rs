//! Hero section copy.

use super::Language;

pub struct HeroStrings {
    pub badge: &'static str,
    pub title_line1: &'static str,
    pub title_line2: &'static str,
    pub desc: &'static str,
    pub cta: &'static str,
    pub services: &'static str,
    pub verified: &'static str,
    pub doctors: &'static str,
    pub fast: &'static str,
    pub booking: &'static str,
    pub caring: &'static str,
    pub focus: &'static str,
    pub recovered: &'static str,
}

const EN: HeroStrings = HeroStrings {
    badge: "Available 24/7 for you",
    title_line1: "Healthcare that",
    title_line2: "Puts You First",
    desc: "Experience modern medicine with a personal touch. From advanced diagnostics to holistic care, we are dedicated to your well-being every step of the way.",
    cta: "Book Appointment",
    services: "Our Services",
    verified: "Verified",
    doctors: "Expert Doctors",
    fast: "Fast",
    booking: "Quick Booking",
    caring: "Caring",
    focus: "Patient Focus",
    recovered: "Recovered Patients",
};

const HI: HeroStrings = HeroStrings {
    badge: "आपके लिए 24/7 उपलब्ध",
    title_line1: "स्वास्थ्य सेवा जो",
    title_line2: "आपको प्राथमिकता देती है",
    desc: "व्यक्तिगत स्पर्श के साथ आधुनिक चिकित्सा का अनुभव करें। उन्नत निदान से लेकर समग्र देखभाल तक, हम हर कदम पर आपकी भलाई के लिए समर्पित हैं।",
    cta: "अपॉइंटमेंट बुक करें",
    services: "हमारी सेवाएँ",
    verified: "सत्यापित",
    doctors: "विशेषज्ञ डॉक्टर",
    fast: "तेज़",
    booking: "त्वरित बुकिंग",
    caring: "देखभाल",
    focus: "रोगी पर ध्यान",
    recovered: "स्वस्थ हुए मरीज़",
};

const DE: HeroStrings = HeroStrings {
    badge: "24/7 Für Sie Verfügbar",
    title_line1: "Gesundheitswesen,",
    title_line2: "Das Sie An Erste Stelle Setzt",
    desc: "Erleben Sie moderne Medizin mit einer persönlichen Note. Von fortschrittlicher Diagnostik bis hin zu ganzheitlicher Pflege widmen wir uns Ihrem Wohlbefinden bei jedem Schritt.",
    cta: "Termin Buchen",
    services: "Unsere Leistungen",
    verified: "Geprüft",
    doctors: "Expertenärzte",
    fast: "Schnell",
    booking: "Schnelle Buchung",
    caring: "Fürsorglich",
    focus: "Patientenfokus",
    recovered: "Genesene Patienten",
};

const FR: HeroStrings = HeroStrings {
    badge: "Disponible 24/7 Pour Vous",
    title_line1: "Des Soins De Santé",
    title_line2: "Qui Vous Mettent En Priorité",
    desc: "Découvrez la médecine moderne avec une touche personnelle. Des diagnostics avancés aux soins holistiques, nous nous consacrons à votre bien-être à chaque étape.",
    cta: "Prendre Rendez-vous",
    services: "Nos Services",
    verified: "Vérifié",
    doctors: "Médecins Experts",
    fast: "Rapide",
    booking: "Réservation Rapide",
    caring: "Attentionné",
    focus: "Priorité Patient",
    recovered: "Patients Rétablis",
};

const ZH: HeroStrings = HeroStrings {
    badge: "24/7 为您服务",
    title_line1: "以您为先的",
    title_line2: "医疗保健",
    desc: "体验具有个人特色的现代医学。从先进的诊断到全面的护理，我们致力于每一步都为您提供福祉。",
    cta: "预约挂号",
    services: "我们的服务",
    verified: "已验证",
    doctors: "专家医生",
    fast: "快速",
    booking: "快速预约",
    caring: "关怀",
    focus: "患者至上",
    recovered: "康复患者",
};

#[must_use]
pub fn strings(lang: Language) -> &'static HeroStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
