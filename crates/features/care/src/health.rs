//! Health records and weight tracking for the registered pet. Kept for the session only.

use crate::error::CareError;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// Most weight entries kept.
pub const MAX_WEIGHTS: usize = 30;

pub const NO_WEIGHTS: &str = "No entries yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RecordKind {
    Vaccinations,
    Medications,
    Allergies,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthRecords {
    pub vaccinations: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl HealthRecords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn list(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::Vaccinations => &self.vaccinations,
            RecordKind::Medications => &self.medications,
            RecordKind::Allergies => &self.allergies,
        }
    }

    /// Adds a trimmed entry at the top of `kind`'s list.
    ///
    /// # Errors
    /// Returns [`CareError::Invalid`] for a blank detail.
    pub fn add(&mut self, kind: RecordKind, detail: &str) -> Result<(), CareError> {
        let detail = detail.trim();
        if detail.is_empty() {
            return Err(CareError::invalid(format!("{kind} entry cannot be blank")));
        }

        let list = match kind {
            RecordKind::Vaccinations => &mut self.vaccinations,
            RecordKind::Medications => &mut self.medications,
            RecordKind::Allergies => &mut self.allergies,
        };
        list.insert(0, detail.to_owned());
        debug!(kind = %kind, entries = list.len(), "Health record added");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    /// As typed, e.g. `2025-04-01`.
    pub date: String,
    pub kg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeightLog {
    entries: Vec<WeightEntry>,
}

impl WeightLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first.
    #[must_use]
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// Parses and records a weigh-in; only the latest [`MAX_WEIGHTS`] are kept.
    ///
    /// # Errors
    /// Returns [`CareError::Invalid`] for a blank date or a weight that is not a positive number.
    pub fn add(&mut self, date: &str, kg: &str) -> Result<&WeightEntry, CareError> {
        let date = date.trim();
        if date.is_empty() {
            return Err(CareError::invalid("weigh-in date is required"));
        }
        let kg = kg
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|kg| kg.is_finite() && *kg > 0.0)
            .ok_or_else(|| CareError::invalid(format!("'{}' is not a weight in kg", kg.trim())))?;

        self.entries.insert(0, WeightEntry { date: date.to_owned(), kg });
        self.entries.truncate(MAX_WEIGHTS);
        Ok(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn records_are_newest_first_per_kind() -> Result<(), CareError> {
        let mut records = HealthRecords::new();
        records.add(RecordKind::Vaccinations, "Rabies 2024")?;
        records.add(RecordKind::Vaccinations, "  DHPP booster ")?;
        records.add(RecordKind::Allergies, "Chicken")?;

        assert_eq!(records.list(RecordKind::Vaccinations), ["DHPP booster", "Rabies 2024"]);
        assert_eq!(records.list(RecordKind::Allergies), ["Chicken"]);
        assert!(records.list(RecordKind::Medications).is_empty());
        assert!(records.add(RecordKind::Medications, "   ").is_err());
        Ok(())
    }

    #[test]
    fn kinds_parse_from_labels() -> Result<(), strum::ParseError> {
        assert_eq!(RecordKind::from_str("Medications")?, RecordKind::Medications);
        assert_eq!(RecordKind::Allergies.to_string(), "allergies");
        Ok(())
    }

    #[test]
    fn weights_validate_and_cap() -> Result<(), CareError> {
        let mut log = WeightLog::new();
        assert!(log.add("", "4.2").is_err());
        assert!(log.add("2025-01-01", "heavy").is_err());
        assert!(log.add("2025-01-01", "NaN").is_err());
        assert!(log.add("2025-01-01", "-5").is_err());
        assert!(log.add("2025-01-01", "0").is_err());
        assert!(log.entries().is_empty());

        for day in 0..MAX_WEIGHTS + 3 {
            log.add(&format!("day {day}"), "4.5")?;
        }
        assert_eq!(log.entries().len(), MAX_WEIGHTS);
        assert_eq!(log.entries()[0].date, format!("day {}", MAX_WEIGHTS + 2));

        let latest = log.add("2025-02-01", " 5.25 ")?;
        assert!((latest.kg - 5.25).abs() < f64::EPSILON);
        Ok(())
    }
}
