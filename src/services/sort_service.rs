use crate::models::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Email,
    Role,
    Status,
    Date,
    Assignee,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const DEFAULT: SortSpec = SortSpec {
        key: SortKey::Date,
        direction: SortDirection::Desc,
    };
}

/// Tri-state column sort. `Unset` sorts by the default rule (date, newest
/// first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "key", rename_all = "lowercase")]
pub enum SortState {
    #[default]
    Unset,
    Asc(SortKey),
    Desc(SortKey),
}

impl SortState {
    /// Next state after the header of `column` is clicked.
    pub fn click(self, column: SortKey) -> SortState {
        match self {
            SortState::Asc(current) if current == column => SortState::Desc(column),
            SortState::Desc(current) if current == column => SortState::Unset,
            _ => SortState::Asc(column),
        }
    }

    pub fn spec(&self) -> SortSpec {
        match *self {
            SortState::Unset => SortSpec::DEFAULT,
            SortState::Asc(key) => SortSpec {
                key,
                direction: SortDirection::Asc,
            },
            SortState::Desc(key) => SortSpec {
                key,
                direction: SortDirection::Desc,
            },
        }
    }

    /// Column whose header shows as active; `None` while unset.
    pub fn active_column(&self) -> Option<SortKey> {
        match *self {
            SortState::Unset => None,
            SortState::Asc(key) | SortState::Desc(key) => Some(key),
        }
    }
}

pub fn compare_by(a: &Candidate, b: &Candidate, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.applied_date.cmp(&b.applied_date),
        SortKey::Experience => a.experience.cmp(&b.experience),
        SortKey::Name => cmp_ignore_case(&a.name, &b.name),
        SortKey::Email => cmp_ignore_case(&a.email, &b.email),
        SortKey::Role => cmp_ignore_case(&a.role, &b.role),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        SortKey::Assignee => cmp_ignore_case(&a.assignee, &b.assignee),
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort; rows with equal keys keep their input order in both
/// directions.
pub fn sort_candidates(candidates: &mut [Candidate], spec: SortSpec) {
    candidates.sort_by(|a, b| {
        let ord = compare_by(a, b, spec.key);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

pub fn sorted(candidates: &[Candidate], spec: SortSpec) -> Vec<Candidate> {
    let mut out = candidates.to_vec();
    sort_candidates(&mut out, spec);
    out
}
