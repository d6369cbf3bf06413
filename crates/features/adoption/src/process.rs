//! Post-match adoption checklist and follow-up visits.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub done: bool,
}

impl ProcessStep {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.done { "Completed" } else { "Mark complete" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowUp {
    /// Days after adoption.
    pub day: u16,
    pub scheduled: bool,
}

/// Checklist state for one adoption. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionProcess {
    steps: Vec<ProcessStep>,
    followups: Vec<FollowUp>,
}

impl Default for AdoptionProcess {
    fn default() -> Self {
        let step = |id, title| ProcessStep { id, title, done: false };
        Self {
            steps: vec![
                step("s1", "Fees reviewed"),
                step("s2", "Vaccination verified"),
                step("s3", "Spay/Neuter confirmed"),
                step("s4", "Contract signed"),
            ],
            followups: [7, 30, 90].map(|day| FollowUp { day, scheduled: false }).to_vec(),
        }
    }
}

impl AdoptionProcess {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn steps(&self) -> &[ProcessStep] {
        &self.steps
    }

    #[must_use]
    pub fn followups(&self) -> &[FollowUp] {
        &self.followups
    }

    /// Flips a step; returns its new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let step = self.steps.iter_mut().find(|step| step.id == id)?;
        step.done = !step.done;
        debug!(step = step.id, done = step.done, "Adoption step toggled");
        Some(step.done)
    }

    /// Marks the follow-up on `day` as scheduled. Scheduling is one-way.
    pub fn schedule(&mut self, day: u16) -> bool {
        match self.followups.iter_mut().find(|followup| followup.day == day) {
            Some(followup) => {
                followup.scheduled = true;
                true
            },
            None => false,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_every_step_completes() {
        let mut process = AdoptionProcess::new();
        assert!(!process.is_complete());
        for id in ["s1", "s2", "s3", "s4"] {
            assert_eq!(process.toggle(id), Some(true));
        }
        assert!(process.is_complete());

        assert_eq!(process.toggle("s2"), Some(false));
        assert_eq!(process.steps()[1].label(), "Mark complete");
        assert!(!process.is_complete());
        assert_eq!(process.toggle("s9"), None);
    }

    #[test]
    fn scheduling_is_sticky() {
        let mut process = AdoptionProcess::new();
        assert!(process.schedule(30));
        assert!(process.schedule(30));
        assert!(!process.schedule(14));

        let scheduled: Vec<u16> =
            process.followups().iter().filter(|f| f.scheduled).map(|f| f.day).collect();
        assert_eq!(scheduled, [30]);
    }
}
