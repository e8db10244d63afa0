use crate::models::candidate::{Candidate, CandidateStatus};
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStats {
    pub total: usize,
    pub new: usize,
    pub processed: usize,
    pub rejected: usize,
    pub hired: usize,
    pub applied_this_week: usize,
}

impl CandidateStats {
    /// `today` anchors the "applied this week" window: the last seven days,
    /// inclusive.
    pub fn from_candidates(candidates: &[Candidate], today: NaiveDate) -> Self {
        let week_start = today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN);
        let mut stats = CandidateStats {
            total: candidates.len(),
            ..Default::default()
        };
        for c in candidates {
            match c.status {
                CandidateStatus::New => stats.new += 1,
                CandidateStatus::Processed => stats.processed += 1,
                CandidateStatus::Rejected => stats.rejected += 1,
                CandidateStatus::Hired => stats.hired += 1,
            }
            if c.applied_date >= week_start {
                stats.applied_this_week += 1;
            }
        }
        stats
    }

    pub fn count_for(&self, status: CandidateStatus) -> usize {
        match status {
            CandidateStatus::New => self.new,
            CandidateStatus::Processed => self.processed,
            CandidateStatus::Rejected => self.rejected,
            CandidateStatus::Hired => self.hired,
        }
    }
}
