//! Veterinarian desk: profile form, today's appointment slots, and published case studies.

use crate::error::{CareError, CareErrorExt, require_filled};
use furever_domain::keys::VETERINARIAN_FORM;
use furever_kernel::slot;
use furever_storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::info;

/// Saved under `veterinarianFormData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VetProfile {
    pub vet_name: String,
    pub specialization: String,
    pub contact_info: String,
    pub is_profile_complete: bool,
}

impl VetProfile {
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        slot::load_or_default(store, VETERINARIAN_FORM)
    }

    /// # Errors
    /// Returns [`CareError::Storage`] if the form could not be written.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), CareError> {
        slot::save(store, VETERINARIAN_FORM, self).context("Saving veterinarian profile")
    }

    /// Unlocks the dashboard once name, specialization, and contact are filled in.
    ///
    /// # Errors
    /// Returns [`CareError::Incomplete`] naming the first blank field.
    pub fn complete(&mut self) -> Result<(), CareError> {
        require_filled(&[
            ("full name", self.vet_name.as_str()),
            ("specialization", self.specialization.as_str()),
            ("contact information", self.contact_info.as_str()),
        ])?;
        self.is_profile_complete = true;
        info!("Veterinarian profile completed");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: &'static str,
    pub status: SlotStatus,
    pub patient: Option<String>,
}

/// Today's appointment grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    slots: Vec<TimeSlot>,
}

impl Default for Schedule {
    fn default() -> Self {
        let slot = |time, patient: Option<&str>| TimeSlot {
            time,
            status: if patient.is_some() { SlotStatus::Booked } else { SlotStatus::Available },
            patient: patient.map(str::to_owned),
        };
        Self {
            slots: vec![
                slot("9:00 AM", None),
                slot("9:30 AM", Some("Max (Golden Retriever)")),
                slot("10:00 AM", Some("Luna (Persian Cat)")),
                slot("10:30 AM", None),
                slot("11:00 AM", Some("Charlie (Beagle)")),
                slot("11:30 AM", None),
                slot("2:00 PM", Some("Bella (Labrador)")),
                slot("2:30 PM", None),
                slot("3:00 PM", Some("Milo (Maine Coon)")),
                slot("3:30 PM", None),
            ],
        }
    }
}

impl Schedule {
    #[must_use]
    pub fn today() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn available(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|slot| slot.status == SlotStatus::Available)
    }

    /// Books an available slot for `patient`.
    ///
    /// # Errors
    /// Returns [`CareError::NotFound`] for an unknown time, and [`CareError::Invalid`] if the
    /// slot is already booked or the patient is blank.
    pub fn book(&mut self, time: &str, patient: &str) -> Result<&TimeSlot, CareError> {
        let patient = patient.trim();
        if patient.is_empty() {
            return Err(CareError::invalid("patient name is required"));
        }

        let slot = self.slots.iter_mut().find(|slot| slot.time == time).ok_or_else(|| {
            CareError::NotFound { message: format!("no slot at {time}").into(), context: None }
        })?;
        if slot.status == SlotStatus::Booked {
            return Err(CareError::invalid(format!("{time} is already booked")));
        }

        slot.status = SlotStatus::Booked;
        slot.patient = Some(patient.to_owned());
        info!(time, "Appointment booked");
        Ok(slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: u32,
    pub pet_name: &'static str,
    pub breed: &'static str,
    pub age: &'static str,
    pub condition: &'static str,
    pub treatment: &'static str,
    pub outcome: &'static str,
    pub date: &'static str,
    pub image: &'static str,
}

pub static CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        id: 1,
        pet_name: "Rocky",
        breed: "German Shepherd",
        age: "5 years",
        condition: "Hip Dysplasia",
        treatment: "Physical therapy and pain management",
        outcome: "Significant improvement in mobility",
        date: "March 2024",
        image: "/german-shepherd-medical-case.jpg",
    },
    CaseStudy {
        id: 2,
        pet_name: "Whiskers",
        breed: "Siamese Cat",
        age: "8 years",
        condition: "Chronic Kidney Disease",
        treatment: "Dietary management and medication",
        outcome: "Stable condition with regular monitoring",
        date: "February 2024",
        image: "/siamese-cat-medical-case.jpg",
    },
    CaseStudy {
        id: 3,
        pet_name: "Buddy",
        breed: "Golden Retriever",
        age: "3 years",
        condition: "Allergic Dermatitis",
        treatment: "Allergy testing and immunotherapy",
        outcome: "Complete resolution of symptoms",
        date: "January 2024",
        image: "/golden-retriever-medical-case.jpg",
    },
    CaseStudy {
        id: 4,
        pet_name: "Princess",
        breed: "Persian Cat",
        age: "6 years",
        condition: "Dental Disease",
        treatment: "Professional cleaning and extractions",
        outcome: "Improved oral health and comfort",
        date: "December 2023",
        image: "/persian-cat-dental-case.jpg",
    },
];

#[must_use]
pub fn case_study(id: u32) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|case| case.id == id)
}
