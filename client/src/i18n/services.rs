//! Services section copy, including per-service titles and blurbs.

use super::Language;
use crate::content::ServiceKind;

pub struct ServiceCopy {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct ServicesStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub consult: &'static str,
    primary: ServiceCopy,
    cardio: ServiceCopy,
    peds: ServiceCopy,
    neuro: ServiceCopy,
    lab: ServiceCopy,
    emergency: ServiceCopy,
}

impl ServicesStrings {
    #[must_use]
    pub fn service(&self, kind: ServiceKind) -> &ServiceCopy {
        match kind {
            ServiceKind::PrimaryCare => &self.primary,
            ServiceKind::Cardiology => &self.cardio,
            ServiceKind::Pediatrics => &self.peds,
            ServiceKind::Neurology => &self.neuro,
            ServiceKind::Laboratory => &self.lab,
            ServiceKind::Emergency => &self.emergency,
        }
    }
}

const EN: ServicesStrings = ServicesStrings {
    badge: "Our Expertise",
    title: "Comprehensive Care for Your Life",
    desc: "We bring together the best medical professionals and advanced technology to provide you with top-tier healthcare services.",
    consult: "Consult AI Assistant",
    primary: ServiceCopy {
        title: "Primary Care",
        desc: "Comprehensive general health services for individuals and families, focusing on prevention and wellness.",
    },
    cardio: ServiceCopy {
        title: "Cardiology",
        desc: "Expert heart care including diagnostics, treatment, and ongoing management of cardiovascular conditions.",
    },
    peds: ServiceCopy {
        title: "Pediatrics",
        desc: "Compassionate care for infants, children, and adolescents, ensuring healthy growth and development.",
    },
    neuro: ServiceCopy {
        title: "Neurology",
        desc: "Advanced diagnosis and treatment for disorders of the nervous system, brain, and spinal cord.",
    },
    lab: ServiceCopy {
        title: "Laboratory",
        desc: "State-of-the-art diagnostic testing with quick turnaround times to support accurate treatment plans.",
    },
    emergency: ServiceCopy {
        title: "Emergency",
        desc: "24/7 emergency services equipped to handle critical medical situations with speed and expertise.",
    },
};

const HI: ServicesStrings = ServicesStrings {
    badge: "हमारी विशेषज्ञता",
    title: "आपके जीवन के लिए व्यापक देखभाल",
    desc: "हम आपको शीर्ष स्तरीय स्वास्थ्य सेवाएँ प्रदान करने के लिए सर्वोत्तम चिकित्सा पेशेवरों और उन्नत तकनीक को एक साथ लाते हैं।",
    consult: "AI सहायक से परामर्श करें",
    primary: ServiceCopy {
        title: "प्राथमिक देखभाल",
        desc: "व्यक्तियों और परिवारों के लिए व्यापक सामान्य स्वास्थ्य सेवाएं, जो रोकथाम और कल्याण पर केंद्रित हैं।",
    },
    cardio: ServiceCopy {
        title: "हृदय रोग",
        desc: "विशेषज्ञ हृदय देखभाल जिसमें निदान, उपचार और हृदय संबंधी स्थितियों का निरंतर प्रबंधन शामिल है।",
    },
    peds: ServiceCopy {
        title: "बाल चिकित्सा",
        desc: "शिशुओं, बच्चों और किशोरों के लिए दयालु देखभाल, स्वस्थ विकास और विकास सुनिश्चित करना।",
    },
    neuro: ServiceCopy {
        title: "तंत्रिका विज्ञान",
        desc: "तंत्रिका तंत्र, मस्तिष्क और रीढ़ की हड्डी के विकारों के लिए उन्नत निदान और उपचार।",
    },
    lab: ServiceCopy {
        title: "प्रयोगशाला",
        desc: "सटीक उपचार योजनाओं का समर्थन करने के लिए त्वरित परिणामों के साथ अत्याधुनिक नैदानिक परीक्षण।",
    },
    emergency: ServiceCopy {
        title: "आपातकालीन",
        desc: "24/7 आपातकालीन सेवाएँ जो गति और विशेषज्ञता के साथ गंभीर चिकित्सा स्थितियों को संभालने के लिए सुसज्जित हैं।",
    },
};

const DE: ServicesStrings = ServicesStrings {
    badge: "Unsere Expertise",
    title: "Umfassende Pflege für Ihr Leben",
    desc: "Wir bringen die besten medizinischen Fachkräfte und fortschrittliche Technologie zusammen, um Ihnen erstklassige Gesundheitsdienstleistungen zu bieten.",
    consult: "KI-Assistent konsultieren",
    primary: ServiceCopy {
        title: "Allgemeinmedizin",
        desc: "Umfassende allgemeine Gesundheitsdienste für Einzelpersonen und Familien mit Schwerpunkt auf Prävention.",
    },
    cardio: ServiceCopy {
        title: "Kardiologie",
        desc: "Experten-Herzpflege einschließlich Diagnostik, Behandlung und laufendem Management.",
    },
    peds: ServiceCopy {
        title: "Pädiatrie",
        desc: "Einfühlsame Pflege für Säuglinge, Kinder und Jugendliche für ein gesundes Wachstum.",
    },
    neuro: ServiceCopy {
        title: "Neurologie",
        desc: "Fortschrittliche Diagnose und Behandlung von Erkrankungen des Nervensystems und Gehirns.",
    },
    lab: ServiceCopy { title: "Labor", desc: "Modernste diagnostische Tests mit schnellen Durchlaufzeiten." },
    emergency: ServiceCopy {
        title: "Notaufnahme",
        desc: "24/7 Notdienste, ausgestattet für kritische medizinische Situationen.",
    },
};

const FR: ServicesStrings = ServicesStrings {
    badge: "Notre Expertise",
    title: "Soins Complets Pour Votre Vie",
    desc: "Nous réunissons les meilleurs professionnels médicaux et une technologie de pointe pour vous fournir des services de santé de premier ordre.",
    consult: "Consulter l'Assistant IA",
    primary: ServiceCopy {
        title: "Soins Primaires",
        desc: "Services de santé générale complets pour les individus et les familles, axés sur la prévention.",
    },
    cardio: ServiceCopy {
        title: "Cardiologie",
        desc: "Soins cardiaques experts incluant diagnostic, traitement et gestion continue.",
    },
    peds: ServiceCopy { title: "Pédiatrie", desc: "Soins compatissants pour nourrissons, enfants et adolescents." },
    neuro: ServiceCopy { title: "Neurologie", desc: "Diagnostic avancé et traitement des troubles du système nerveux." },
    lab: ServiceCopy {
        title: "Laboratoire",
        desc: "Tests diagnostiques de pointe avec des délais d'exécution rapides.",
    },
    emergency: ServiceCopy {
        title: "Urgence",
        desc: "Services d'urgence 24/7 équipés pour gérer les situations médicales critiques.",
    },
};

const ZH: ServicesStrings = ServicesStrings {
    badge: "我们的专长",
    title: "为您的一生提供全面护理",
    desc: "我们汇集了最好的医疗专业人员和先进技术，为您提供顶级的医疗保健服务。",
    consult: "咨询 AI 助手",
    primary: ServiceCopy { title: "初级保健", desc: "为个人和家庭提供全面的综合健康服务，重点是预防和健康。" },
    cardio: ServiceCopy { title: "心脏病学", desc: "专家心脏护理，包括诊断、治疗和心血管疾病的持续管理。" },
    peds: ServiceCopy { title: "儿科", desc: "为婴儿、儿童和青少年提供富有同情心的护理，确保健康成长和发育。" },
    neuro: ServiceCopy { title: "神经内科", desc: "神经系统、大脑和脊髓疾病的高级诊断和治疗。" },
    lab: ServiceCopy { title: "实验室", desc: "最先进的诊断测试，周转时间快，支持准确的治疗计划。" },
    emergency: ServiceCopy { title: "急诊", desc: "配备齐全的 24/7 急诊服务，以速度和专业知识处理危急医疗情况。" },
};

#[must_use]
pub fn strings(lang: Language) -> &'static ServicesStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
