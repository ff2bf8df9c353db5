use crate::types::{Phase, Schedule};

impl Schedule {
    /// Lay out both phases back to back from `now`.
    ///
    /// Returns `None` for zero-length phases or when a boundary overflows.
    pub fn starting_at(now: u64, commit_deadline: u64, reveal_deadline: u64) -> Option<Schedule> {
        if commit_deadline == 0 || reveal_deadline == 0 {
            return None;
        }
        let commit_closes_at = now.checked_add(commit_deadline)?;
        let reveal_closes_at = commit_closes_at.checked_add(reveal_deadline)?;
        Some(Schedule {
            commit_opens_at: now,
            commit_closes_at,
            reveal_closes_at,
        })
    }

    pub fn phase_at(&self, now: u64) -> Phase {
        if now < self.commit_closes_at {
            Phase::Commit
        } else if now < self.reveal_closes_at {
            Phase::Reveal
        } else {
            Phase::Closed
        }
    }

    pub fn is_closed_at(&self, now: u64) -> bool {
        now >= self.reveal_closes_at
    }
}
