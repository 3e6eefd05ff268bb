//! Form Submission
//!
//! Validate → save → navigate, with alerts on mutation failure.

use super::{DreamDraft, FormErrors};
use crate::api::{ApiError, ApiResult, DreamApi, DreamInput};
use crate::host::{Alerter, Navigator};
use crate::models::Dream;
use crate::paths::dream_path;

/// Which mutation a submit dispatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create { event_id: String },
    Edit { dream_id: String },
}

impl SubmitTarget {
    async fn save(&self, api: &dyn DreamApi, input: &DreamInput) -> ApiResult<Dream> {
        match self {
            SubmitTarget::Create { event_id } => api.create_dream(event_id, input).await,
            SubmitTarget::Edit { dream_id } => api.edit_dream(dream_id, input).await,
        }
    }
}

/// How one submit attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Fields need fixing; nothing was sent
    Invalid(FormErrors),
    /// Saved and navigated to `path`
    Saved { dream: Dream, path: String },
    /// The mutation failed and the user was alerted
    Failed(ApiError),
}

/// Run one submit attempt for `draft`.
///
/// On success navigates to the detail page under the slug the server
/// returned, which may differ from the one sent.
pub async fn submit_dream(
    api: &dyn DreamApi,
    navigator: &dyn Navigator,
    alerter: &dyn Alerter,
    target: &SubmitTarget,
    event_slug: &str,
    draft: &DreamDraft,
) -> SubmitOutcome {
    let input = match draft.validate() {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!(fields = errors.len(), "dream form has invalid fields");
            return SubmitOutcome::Invalid(errors);
        }
    };

    match target.save(api, &input).await {
        Ok(dream) => {
            tracing::info!(dream = %dream.id, slug = %dream.slug, "dream saved");
            let path = dream_path(event_slug, &dream.slug);
            navigator.push(&path);
            SubmitOutcome::Saved { dream, path }
        }
        Err(err) => {
            tracing::error!(error = %err, "saving dream failed");
            alerter.alert(&err.to_string());
            SubmitOutcome::Failed(err)
        }
    }
}
