//! Rule-based symptom checker and emergency contacts. Not a diagnosis.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Symptom {
    Lethargy,
    Vomiting,
}

impl Symptom {
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::Lethargy => "Is your pet lethargic or not eating?",
            Self::Vomiting => "Is there persistent vomiting (>2 times/day)?",
        }
    }
}

/// Advice for a yes/no answer to one symptom question.
#[must_use]
pub const fn triage(symptom: Symptom, present: bool) -> &'static str {
    match (symptom, present) {
        (Symptom::Lethargy, true) => "Visit a clinic within 24 hours.",
        (Symptom::Lethargy, false) => "Monitor at home and ensure hydration.",
        (Symptom::Vomiting, true) => "Urgent: call a clinic today.",
        (Symptom::Vomiting, false) => "Likely mild. Continue monitoring.",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

pub static EMERGENCY_CONTACTS: [EmergencyContact; 4] = [
    EmergencyContact {
        name: "24/7 Pet Emergency Clinic",
        phone: "(555) 123-4567",
        kind: "Emergency",
    },
    EmergencyContact {
        name: "Pet Poison Helpline",
        phone: "(855) 764-7661",
        kind: "Poison Control",
    },
    EmergencyContact {
        name: "Animal Control Services",
        phone: "(555) 987-6543",
        kind: "Animal Control",
    },
    EmergencyContact {
        name: "Local Veterinary Hospital",
        phone: "(555) 456-7890",
        kind: "General Care",
    },
];
