//! Micro-donation ledger. Demo only: nothing is charged and nothing is persisted.

use crate::error::CommunityError;
use serde::Serialize;
use tracing::info;

/// One-tap tip amounts, in VND.
pub const TIP_PRESETS: [u64; 3] = [10_000, 20_000, 50_000];

pub const NO_DONATIONS: &str = "No donations yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub id: String,
    pub title: String,
    /// VND.
    pub amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// # Errors
    /// Returns [`CommunityError::Invalid`] for a zero amount, or one that would overflow the
    /// running total.
    pub fn tip(&mut self, amount: u64) -> Result<&LedgerEntry, CommunityError> {
        if amount == 0 {
            return Err(CommunityError::invalid("tip amount must be positive"));
        }
        if self.total().checked_add(amount).is_none() {
            return Err(CommunityError::invalid(format!("tip of {} is too large", format_vnd(amount))));
        }

        let entry =
            LedgerEntry { id: format!("t{}", self.entries.len() + 1), title: "Tip".to_owned(), amount };
        info!(id = %entry.id, amount, "Tip recorded");
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0, |total, entry| total.saturating_add(entry.amount))
    }
}

/// `12,345 VND`.
#[must_use]
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped} VND")
}
