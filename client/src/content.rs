//! Static clinic content: service catalogue, doctor roster, and the seed
//! entries shown before a visitor adds anything.
//!
//! Localized copy lives in `i18n`; this module only holds data that is the
//! same in every language (names, image URLs, accents, ordering).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::scheduler::{Instruction, Medicine, TimeSlot};
use crate::state::testimonials::Testimonial;

// =============================================================================
// SERVICES
// =============================================================================

/// Departments shown in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    PrimaryCare,
    Cardiology,
    Pediatrics,
    Neurology,
    Laboratory,
    Emergency,
}

impl ServiceKind {
    /// Grid order.
    pub const ALL: [ServiceKind; 6] = [
        Self::PrimaryCare,
        Self::Cardiology,
        Self::Pediatrics,
        Self::Neurology,
        Self::Laboratory,
        Self::Emergency,
    ];

    /// Glyph rendered inside the card's icon tile.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::PrimaryCare => "🩺",
            Self::Cardiology => "❤",
            Self::Pediatrics => "👶",
            Self::Neurology => "🧠",
            Self::Laboratory => "🔬",
            Self::Emergency => "🚑",
        }
    }

    /// CSS modifier for the icon tile background.
    #[must_use]
    pub fn accent_class(self) -> &'static str {
        match self {
            Self::PrimaryCare => "service-card__icon--blue",
            Self::Cardiology => "service-card__icon--rose",
            Self::Pediatrics => "service-card__icon--yellow",
            Self::Neurology => "service-card__icon--purple",
            Self::Laboratory => "service-card__icon--emerald",
            Self::Emergency => "service-card__icon--orange",
        }
    }
}

// =============================================================================
// DOCTORS
// =============================================================================

/// A clinic specialist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub role: &'static str,
    pub specialty: &'static str,
    pub image_url: &'static str,
}

/// Number of doctors shown before "view all" is toggled.
pub const FEATURED_DOCTOR_COUNT: usize = 4;

pub const DOCTORS: [Doctor; 8] = [
    Doctor {
        name: "Dr. Rajesh Sharma",
        role: "Chief Cardiologist",
        specialty: "Cardiology",
        image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Anjali Desai",
        role: "Senior Neurologist",
        specialty: "Neurology",
        image_url: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Vikram Singh",
        role: "Head of Pediatrics",
        specialty: "Pediatrics",
        image_url: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Priya Patel",
        role: "General Practitioner",
        specialty: "Primary Care",
        image_url: "https://images.unsplash.com/photo-1614608682850-e0d6ed316d47?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Arjun Kumar",
        role: "Dermatologist",
        specialty: "Dermatology",
        image_url: "https://images.unsplash.com/photo-1537368910025-700350fe46c7?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Meera Reddy",
        role: "Orthopedic Surgeon",
        specialty: "Orthopedics",
        image_url: "https://images.unsplash.com/photo-1651008325506-71d380891f19?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Sanjay Gupta",
        role: "Psychiatrist",
        specialty: "Psychiatry",
        image_url: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?auto=format&fit=crop&q=80&w=400",
    },
    Doctor {
        name: "Dr. Neha Verma",
        role: "Ophthalmologist",
        specialty: "Ophthalmology",
        image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&q=80&w=400",
    },
];

/// Doctors visible in the grid for the current toggle state.
#[must_use]
pub fn visible_doctors(show_all: bool) -> &'static [Doctor] {
    if show_all { &DOCTORS } else { &DOCTORS[..FEATURED_DOCTOR_COUNT] }
}

// =============================================================================
// SEED DATA
// =============================================================================

#[must_use]
pub fn seed_medicines() -> Vec<Medicine> {
    vec![
        Medicine::new("Multivitamin", TimeSlot::Morning, Instruction::AfterFood),
        Medicine::new("Calcium Supplement", TimeSlot::Night, Instruction::AfterFood),
    ]
}

#[must_use]
pub fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Alex Robinson",
            "Patient",
            "The care I received at NYV Care was exceptional. The doctors took the time to listen to my concerns and explained everything clearly. I felt truly cared for.",
            5,
            "https://i.pravatar.cc/150?img=11",
        ),
        Testimonial::new(
            "Maria Garcia",
            "Mother of two",
            "Booking an appointment for my kids was so easy with their AI assistant. The pediatric department is wonderful, warm, and very professional.",
            5,
            "https://i.pravatar.cc/150?img=5",
        ),
        Testimonial::new(
            "Robert Chen",
            "Patient",
            "State-of-the-art facilities and a very welcoming staff. I would highly recommend NYV Care to anyone looking for reliable healthcare.",
            4,
            "https://i.pravatar.cc/150?img=68",
        ),
    ]
}

// =============================================================================
// CONTACT
// =============================================================================

pub const CLINIC_ADDRESS: &str = "Patna, 800001";
pub const CLINIC_PHONE: &str = "8294644190";
pub const CLINIC_EMAIL: &str = "nishantyadavmdp@gmail.com";
pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=2070";
pub const RECOVERY_RATE: &str = "98.5%";
