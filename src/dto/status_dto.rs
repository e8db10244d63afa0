use crate::models::candidate::CandidateStatus;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_status_differs"))]
pub struct StatusChangeForm {
    pub current: CandidateStatus,
    #[validate(required(message = "Please select a status"))]
    pub selected: Option<CandidateStatus>,
}

impl StatusChangeForm {
    pub fn new(current: CandidateStatus) -> Self {
        Self {
            current,
            selected: None,
        }
    }

    pub fn select(&mut self, status: CandidateStatus) {
        self.selected = Some(status);
    }

    /// Options offered in the picker: every status except the current one.
    pub fn available_statuses(&self) -> Vec<CandidateStatus> {
        CandidateStatus::ALL
            .into_iter()
            .filter(|s| *s != self.current)
            .collect()
    }

    /// Validates and hands back the chosen status, clearing the selection.
    pub fn submit(&mut self) -> Result<CandidateStatus, validator::ValidationErrors> {
        crate::utils::validation::validate(&*self)?;
        let status = self.selected.take();
        status.ok_or_else(|| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("selected", ValidationError::new("required"));
            errors
        })
    }
}

fn validate_status_differs(form: &StatusChangeForm) -> Result<(), ValidationError> {
    if form.selected == Some(form.current) {
        let mut err = ValidationError::new("same_status");
        err.message = Some("Please select a different status".into());
        return Err(err);
    }
    Ok(())
}
