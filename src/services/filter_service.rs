use crate::dto::candidate_dto::FilterCriteria;
use crate::models::candidate::Candidate;

/// Keeps the candidates matching every populated criterion, in input order.
pub fn filter_candidates(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    if !criteria.is_active() {
        return candidates.to_vec();
    }
    let search = criteria.search_term().map(|s| s.trim().to_lowercase());
    candidates
        .iter()
        .filter(|c| matches(c, criteria, search.as_deref()))
        .cloned()
        .collect()
}

pub fn matches(candidate: &Candidate, criteria: &FilterCriteria, search: Option<&str>) -> bool {
    if let Some(term) = search {
        let hit = candidate.name.to_lowercase().contains(term)
            || candidate.email.to_lowercase().contains(term);
        if !hit {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if candidate.status != status {
            return false;
        }
    }
    if let Some(role) = criteria.role_filter() {
        if candidate.role != role {
            return false;
        }
    }
    if let Some(assignee) = criteria.assignee_filter() {
        if candidate.assignee != assignee {
            return false;
        }
    }
    // Inclusive on both ends.
    if let Some(from) = criteria.date_from {
        if candidate.applied_date < from {
            return false;
        }
    }
    if let Some(to) = criteria.date_to {
        if candidate.applied_date > to {
            return false;
        }
    }
    true
}
