//! Testimonials section and feedback form copy.

use super::Language;

pub struct TestimonialsStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub share: &'static str,
    pub close: &'static str,
    pub write: &'static str,
    pub rate: &'static str,
    pub name_label: &'static str,
    pub feedback_label: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_feedback: &'static str,
    pub submit: &'static str,
}

const EN: TestimonialsStrings = TestimonialsStrings {
    badge: "Testimonials",
    title: "What Our Patients Say",
    share: "Share Your Experience",
    close: "Close Feedback Form",
    write: "Write a Review",
    rate: "Rate your experience",
    name_label: "Your Name",
    feedback_label: "Your Feedback",
    placeholder_name: "John Doe",
    placeholder_feedback: "Tell us about your visit...",
    submit: "Submit Review",
};

const HI: TestimonialsStrings = TestimonialsStrings {
    badge: "प्रशंसापत्र",
    title: "हमारे मरीज़ क्या कहते हैं",
    share: "अपना अनुभव साझा करें",
    close: "फीडबैक फॉर्म बंद करें",
    write: "समीक्षा लिखें",
    rate: "अपने अनुभव को रेट करें",
    name_label: "आपका नाम",
    feedback_label: "आपकी प्रतिक्रिया",
    placeholder_name: "आपका नाम",
    placeholder_feedback: "हमें अपनी यात्रा के बारे में बताएं...",
    submit: "समीक्षा जमा करें",
};

const DE: TestimonialsStrings = TestimonialsStrings {
    badge: "Bewertungen",
    title: "Was unsere Patienten sagen",
    share: "Teilen Sie Ihre Erfahrung",
    close: "Formular schließen",
    write: "Bewertung schreiben",
    rate: "Bewerten Sie Ihre Erfahrung",
    name_label: "Ihr Name",
    feedback_label: "Ihr Feedback",
    placeholder_name: "Max Mustermann",
    placeholder_feedback: "Erzählen Sie uns von Ihrem Besuch...",
    submit: "Bewertung absenden",
};

const FR: TestimonialsStrings = TestimonialsStrings {
    badge: "Témoignages",
    title: "Ce que disent nos patients",
    share: "Partagez votre expérience",
    close: "Fermer le formulaire",
    write: "Écrire un avis",
    rate: "Évaluez votre expérience",
    name_label: "Votre Nom",
    feedback_label: "Votre Avis",
    placeholder_name: "Jean Dupont",
    placeholder_feedback: "Parlez-nous de votre visite...",
    submit: "Soumettre l'avis",
};

const ZH: TestimonialsStrings = TestimonialsStrings {
    badge: "推荐语",
    title: "我们的患者怎么说",
    share: "分享您的体验",
    close: "关闭反馈表",
    write: "写评论",
    rate: "评价您的体验",
    name_label: "您的名字",
    feedback_label: "您的反馈",
    placeholder_name: "张三",
    placeholder_feedback: "告诉我们您的就诊经历...",
    submit: "提交评论",
};

#[must_use]
pub fn strings(lang: Language) -> &'static TestimonialsStrings {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::De => &DE,
        Language::Fr => &FR,
        Language::Zh => &ZH,
    }
}
