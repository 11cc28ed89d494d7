//! Doctors section copy.

use super::Language;

pub struct DoctorsStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub show_less: &'static str,
    pub view_all: &'static str,
    pub available: &'static str,
    pub book: &'static str,
}

const EN: DoctorsStrings = DoctorsStrings {
    badge: "Our Team",
    title: "Meet Our Specialists",
    desc: "Our doctors are leaders in their fields, dedicated to providing compassionate and personalized care to every patient.",
    show_less: "Show Less",
    view_all: "View All Doctors",
    available: "Available Today",
    book: "Book Now",
};

const HI: DoctorsStrings = DoctorsStrings {
    badge: "हमारी टीम",
    title: "हमारे विशेषज्ञों से मिलें",
    desc: "हमारे डॉक्टर अपने क्षेत्रों में अग्रणी हैं, जो हर रोगी को दयालु और व्यक्तिगत देखभाल प्रदान करने के लिए समर्पित हैं।",
    show_less: "कम दिखाएं",
    view_all: "सभी डॉक्टर देखें",
    available: "आज उपलब्ध",
    book: "अभी बुक करें",
};

const DE: DoctorsStrings = DoctorsStrings {
    badge: "Unser Team",
    title: "Treffen Sie unsere Spezialisten",
    desc: "Unsere Ärzte sind führend auf ihrem Gebiet und widmen sich der einfühlsamen und persönlichen Betreuung jedes Patienten.",
    show_less: "Weniger anzeigen",
    view_all: "Alle Ärzte anzeigen",
    available: "Heute verfügbar",
    book: "Jetzt buchen",
};

const FR: DoctorsStrings = DoctorsStrings {
    badge: "Notre Équipe",
    title: "Rencontrez Nos Spécialistes",
    desc: "Nos médecins sont des leaders dans leurs domaines, dédiés à fournir des soins compatissants et personnalisés à chaque patient.",
    show_less: "Montrer Moins",
    view_all: "Voir Tous Les Médecins",
    available: "Disponible Aujourd'hui",
    book: "Réserver",
};

const ZH: DoctorsStrings = DoctorsStrings {
    badge: "我们的团队",
    title: "认识我们的专家",
    desc: "我们的医生是各自领域的领导者，致力于为每一位患者提供富有同情心和个性化的护理。",
    show_less: "收起",
    view_all: "查看所有医生",
    available: "今日可用",
    book: "立即预约",
};

#[must_use]
pub fn strings(lang: Language) -> &'static DoctorsStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
