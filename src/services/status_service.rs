use crate::dto::status_dto::StatusChangeForm;
use crate::error::{Error, Result, SourceError};
use crate::models::candidate::{Candidate, CandidateId, CandidateStatus};
use crate::services::candidate_source::CandidateSource;
use std::sync::Arc;
use tracing::{info, warn};

pub const STATUS_UPDATE_FAILED: &str = "Failed to update status. Please try again.";

/// Local state of one status-change interaction: in-flight flag and a
/// dismissible error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<String>,
}

impl MutationState {
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

pub struct StatusService<S> {
    source: Arc<S>,
}

impl<S> Clone for StatusService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: CandidateSource> StatusService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Single write to the status collaborator. Failures are returned as-is;
    /// retrying is left to the user.
    pub async fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> std::result::Result<Candidate, SourceError> {
        let updated = self.source.update_status(id, status).await?;
        info!(candidate_id = id, %status, "Candidate status updated");
        Ok(updated)
    }

    /// Validates `form`, then submits the change while tracking it in `state`.
    /// Validation failures never reach the collaborator and leave `state`
    /// untouched.
    pub async fn submit(
        &self,
        id: CandidateId,
        form: &mut StatusChangeForm,
        state: &mut MutationState,
    ) -> Result<Candidate> {
        let status = form.submit().map_err(Error::Validation)?;

        state.loading = true;
        state.error = None;
        let result = self.update_status(id, status).await;
        state.loading = false;

        match result {
            Ok(candidate) => Ok(candidate),
            Err(err) => {
                warn!(candidate_id = id, error = %err, "Status update failed");
                state.error = Some(STATUS_UPDATE_FAILED.to_string());
                Err(Error::Source(err))
            }
        }
    }
}
