//! Footer copy.

use super::Language;

pub struct FooterStrings {
    pub desc: &'static str,
    pub links: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub find_doc: &'static str,
    pub book: &'static str,
    pub portal: &'static str,
    pub depts: &'static str,
    pub cardio: &'static str,
    pub neuro: &'static str,
    pub peds: &'static str,
    pub ortho: &'static str,
    pub derma: &'static str,
    pub contact: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

const EN: FooterStrings = FooterStrings {
    desc: "Providing world-class healthcare with a personal touch. Your health is our priority, today and everyday.",
    links: "Quick Links",
    about: "About Us",
    services: "Our Services",
    find_doc: "Find a Doctor",
    book: "Book Appointment",
    portal: "Patient Portal",
    depts: "Departments",
    cardio: "Cardiology",
    neuro: "Neurology",
    peds: "Pediatrics",
    ortho: "Orthopedics",
    derma: "Dermatology",
    contact: "Contact Us",
    privacy: "Privacy Policy",
    terms: "Terms of Service",
};

const HI: FooterStrings = FooterStrings {
    desc: "एक व्यक्तिगत स्पर्श के साथ विश्व स्तरीय स्वास्थ्य सेवा प्रदान करना। आपका स्वास्थ्य हमारी प्राथमिकता है, आज और हर दिन।",
    links: "त्वरित लिंक",
    about: "हमारे बारे में",
    services: "हमारी सेवाएँ",
    find_doc: "डॉक्टर खोजें",
    book: "अपॉइंटमेंट बुक करें",
    portal: "रोगी पोर्टल",
    depts: "विभाग",
    cardio: "हृदय रोग",
    neuro: "तंत्रिका विज्ञान",
    peds: "बाल चिकित्सा",
    ortho: "हड्डी रोग",
    derma: "त्वचा रोग",
    contact: "संपर्क करें",
    privacy: "गोपनीयता नीति",
    terms: "सेवा की शर्तें",
};

const DE: FooterStrings = FooterStrings {
    desc: "Weltklasse-Gesundheitsversorgung mit persönlicher Note. Ihre Gesundheit ist unsere Priorität.",
    links: "Schnelllinks",
    about: "Über Uns",
    services: "Unsere Leistungen",
    find_doc: "Arzt Finden",
    book: "Termin Buchen",
    portal: "Patientenportal",
    depts: "Abteilungen",
    cardio: "Kardiologie",
    neuro: "Neurologie",
    peds: "Pädiatrie",
    ortho: "Orthopädie",
    derma: "Dermatologie",
    contact: "Kontakt",
    privacy: "Datenschutz",
    terms: "AGB",
};

const FR: FooterStrings = FooterStrings {
    desc: "Fournir des soins de santé de classe mondiale avec une touche personnelle. Votre santé est notre priorité.",
    links: "Liens Rapides",
    about: "À Propos",
    services: "Nos Services",
    find_doc: "Trouver un Médecin",
    book: "Prendre Rendez-vous",
    portal: "Portail Patient",
    depts: "Départements",
    cardio: "Cardiologie",
    neuro: "Neurologie",
    peds: "Pédiatrie",
    ortho: "Orthopédie",
    derma: "Dermatologie",
    contact: "Contactez-nous",
    privacy: "Confidentialité",
    terms: "Conditions",
};

const ZH: FooterStrings = FooterStrings {
    desc: "以个人风格提供世界级的医疗保健服务。您的健康是我们的首要任务。",
    links: "快速链接",
    about: "关于我们",
    services: "我们的服务",
    find_doc: "查找医生",
    book: "预约挂号",
    portal: "患者门户",
    depts: "科室",
    cardio: "心脏病学",
    neuro: "神经内科",
    peds: "儿科",
    ortho: "骨科",
    derma: "皮肤科",
    contact: "联系我们",
    privacy: "隐私政策",
    terms: "服务条款",
};

#[must_use]
pub fn strings(lang: Language) -> &'static FooterStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
