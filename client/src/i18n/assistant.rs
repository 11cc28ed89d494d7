//! Assistant widget copy and the pre-filled intent messages that other
//! sections send when they open the widget.

use super::Language;

pub struct AssistantStrings {
    pub title: &'static str,
    pub online: &'static str,
    pub initial: &'static str,
    pub note_label: &'static str,
    pub note: &'static str,
    pub placeholder: &'static str,
    pub error: &'static str,
    pub typing: &'static str,
    pub powered: &'static str,
    pub close: &'static str,
    pub send: &'static str,
}

const EN: AssistantStrings = AssistantStrings {
    title: "NYV AI",
    online: "Online",
    initial: "Hello! I am NYV AI. How can I assist you with your health questions or appointment booking today?",
    note_label: "Note:",
    note: "I am an AI assistant, not a doctor. Please consult a professional for medical advice.",
    placeholder: "Type your health question...",
    error: "I'm having trouble connecting right now. Please try again later.",
    typing: "Typing...",
    powered: "Powered by Gemini 2.5 Flash. Not for emergencies.",
    close: "Close assistant",
    send: "Send",
};

const HI: AssistantStrings = AssistantStrings {
    title: "NYV AI",
    online: "ऑनलाइन",
    initial: "नमस्ते! मैं NYV AI हूँ। मैं आज आपके स्वास्थ्य संबंधी प्रश्नों या अपॉइंटमेंट बुकिंग में आपकी कैसे सहायता कर सकता हूँ?",
    note_label: "नोट:",
    note: "मैं एक AI सहायक हूँ, डॉक्टर नहीं। कृपया चिकित्सा सलाह के लिए किसी पेशेवर से परामर्श लें।",
    placeholder: "अपना स्वास्थ्य प्रश्न टाइप करें...",
    error: "मुझे अभी कनेक्ट करने में समस्या हो रही है। कृपया बाद में पुनः प्रयास करें।",
    typing: "टाइप कर रहा है...",
    powered: "Gemini 2.5 Flash द्वारा संचालित। आपात स्थिति के लिए नहीं।",
    close: "सहायक बंद करें",
    send: "भेजें",
};

const DE: AssistantStrings = AssistantStrings {
    title: "NYV AI",
    online: "Online",
    initial: "Hallo! Ich bin NYV AI. Wie kann ich Ihnen heute bei Gesundheitsfragen oder Terminbuchungen helfen?",
    note_label: "Hinweis:",
    note: "Ich bin ein KI-Assistent, kein Arzt. Bitte konsultieren Sie bei medizinischen Fragen einen Fachmann.",
    placeholder: "Stellen Sie Ihre Gesundheitsfrage...",
    error: "Ich habe Verbindungsprobleme. Bitte versuchen Sie es später erneut.",
    typing: "Schreibt...",
    powered: "Angetrieben von Gemini 2.5 Flash. Nicht für Notfälle.",
    close: "Assistent schließen",
    send: "Senden",
};

const FR: AssistantStrings = AssistantStrings {
    title: "NYV AI",
    online: "En ligne",
    initial: "Bonjour! Je suis NYV AI. Comment puis-je vous aider aujourd'hui pour vos questions de santé ou la prise de rendez-vous ?",
    note_label: "Note:",
    note: "Je suis un assistant IA, pas un médecin. Veuillez consulter un professionnel pour des conseils médicaux.",
    placeholder: "Tapez votre question de santé...",
    error: "J'ai du mal à me connecter pour le moment. Veuillez réessayer plus tard.",
    typing: "Écrit...",
    powered: "Propulsé par Gemini 2.5 Flash. Pas pour les urgences.",
    close: "Fermer l'assistant",
    send: "Envoyer",
};

const ZH: AssistantStrings = AssistantStrings {
    title: "NYV AI",
    online: "在线",
    initial: "你好！我是 NYV AI。今天我能为您解答健康问题或协助预约挂号吗？",
    note_label: "注意:",
    note: "我是 AI 助手，不是医生。请咨询专业人士以获取医疗建议。",
    placeholder: "输入您的健康问题...",
    error: "我现在无法连接。请稍后再试。",
    typing: "输入中...",
    powered: "由 Gemini 2.5 Flash 提供支持。不适用于紧急情况。",
    close: "关闭助手",
    send: "发送",
};

#[must_use]
pub fn strings(lang: Language) -> &'static AssistantStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}

// =============================================================================
// INTENTS
// =============================================================================

/// Message sent when a visitor clicks a generic "book appointment" button.
#[must_use]
pub fn book_intent(lang: Language) -> &'static str {
    match lang {
        Language::En => "I'd like to book an appointment.",
        Language::Hi => "मैं अपॉइंटमेंट बुक करना चाहता हूँ।",
        Language::De => "Ich möchte einen Termin vereinbaren.",
        Language::Fr => "Je souhaite prendre rendez-vous.",
        Language::Zh => "我想预约。",
    }
}

/// Message sent from a service card's consult button.
#[must_use]
pub fn consult_intent(lang: Language, service: &str) -> String {
    match lang {
        Language::En => format!("I would like to know more about {service}."),
        Language::Hi => format!("मैं {service} के बारे में अधिक जानना चाहता हूँ।"),
        Language::De => format!("Ich möchte mehr über {service} erfahren."),
        Language::Fr => format!("Je souhaite en savoir plus sur {service}."),
        Language::Zh => format!("我想了解更多关于{service}的信息。"),
    }
}

/// Message sent from a doctor card's book button.
#[must_use]
pub fn book_doctor_intent(lang: Language, doctor: &str) -> String {
    match lang {
        Language::En => format!("I would like to book an appointment with {doctor}."),
        Language::Hi => format!("मैं {doctor} के साथ अपॉइंटमेंट बुक करना चाहता हूँ।"),
        Language::De => format!("Ich möchte einen Termin bei {doctor} buchen."),
        Language::Fr => format!("Je souhaite prendre rendez-vous avec {doctor}."),
        Language::Zh => format!("我想预约{doctor}。"),
    }
}
