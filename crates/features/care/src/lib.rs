//! Care feature slice: the pet-owner and veterinarian dashboards.
//!
//! Forms ([`PetRegistration`], [`VetProfile`]) and published pet profiles go through the
//! injected store. Health records, weigh-ins, and the appointment grid live for the session.

mod error;
pub mod health;
pub mod pet;
pub mod triage;
pub mod vet;

pub use crate::error::{CareError, CareErrorExt};
pub use crate::health::{HealthRecords, RecordKind, WeightEntry, WeightLog};
pub use crate::pet::{PetRegistration, PublicCard, PublicProfile, public_card, slugify};
pub use crate::triage::{EMERGENCY_CONTACTS, Symptom, triage};
pub use crate::vet::{CASE_STUDIES, CaseStudy, Schedule, SlotStatus, TimeSlot, VetProfile, case_study};
