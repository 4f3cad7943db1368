//! Submission pipeline
//!
//! A submission runs in three phases so the UI can keep drawing while the
//! sink works:
//!
//! 1. [`begin_submission`] checks the gate, raises the in-progress flag and
//!    snapshots the payload.
//! 2. [`dispatch`] makes exactly one attempt against the sink and folds every
//!    failure into a [`SubmissionOutcome`].
//! 3. [`finish_submission`] lowers the flag and queues the notice. It runs for
//!    every outcome, including a dispatch task that died.

use super::error::SubmitError;
use super::payload::Payload;
use super::traits::SubmissionSink;
use crate::config::IntakeConfig;
use crate::format::{dial_number, encode_uri_component};
use crate::state::{AppState, Notice};

pub const MAIL_SUBJECT: &str = "New AION Capital Application";
pub const SUCCESS_MESSAGE: &str = "Application sent! AION Capital will contact you shortly.";
pub const FAILURE_MESSAGE: &str = "Could not send the application. Please try again.";

/// Route an application took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// POSTed to the configured endpoint
    Endpoint,
    /// Handed to the mail client as a prefilled draft
    MailDraft,
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent(Channel),
    /// Carries the diagnostic, the applicant sees [`FAILURE_MESSAGE`]
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent(_))
    }

    pub fn notice(&self) -> Notice {
        match self {
            SubmissionOutcome::Sent(_) => Notice::success(SUCCESS_MESSAGE),
            SubmissionOutcome::Failed(_) => Notice::failure(FAILURE_MESSAGE),
        }
    }
}

/// `mailto:` URI with the pretty-printed payload as body
pub fn mail_draft_uri(config: &IntakeConfig, payload: &Payload) -> Result<String, SubmitError> {
    let body = payload.to_json_pretty()?;
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        config.contact_email,
        encode_uri_component(MAIL_SUBJECT),
        encode_uri_component(&body)
    ))
}

/// Bare `mailto:` URI for the "Email Us" action
pub fn contact_mail_uri(config: &IntakeConfig) -> String {
    format!("mailto:{}", config.contact_email)
}

/// `tel:` URI for the "Call Us" action
pub fn contact_dial_uri(config: &IntakeConfig) -> String {
    format!("tel:{}", dial_number(&config.contact_phone))
}

/// Check the submission gate, mark the submission in progress and snapshot
/// the payload. On error nothing is changed.
pub fn begin_submission(state: &mut AppState) -> Result<Payload, SubmitError> {
    if !state.step().is_last() {
        return Err(SubmitError::NotOnReview);
    }
    if state.wizard.submitting {
        return Err(SubmitError::AlreadySubmitting);
    }
    if !state.wizard.consent {
        return Err(SubmitError::ConsentMissing);
    }

    state.wizard.submitting = true;
    Ok(Payload::from_form(&state.form, state.wizard.consent))
}

/// Make one attempt to deliver the payload
pub async fn dispatch(
    sink: &dyn SubmissionSink,
    config: &IntakeConfig,
    payload: Payload,
) -> SubmissionOutcome {
    let result = match config.endpoint() {
        Some(endpoint) => {
            tracing::info!("posting application to {endpoint}");
            sink.post_json(endpoint, &payload)
                .await
                .map(|_| Channel::Endpoint)
        }
        None => {
            tracing::info!("no endpoint configured, opening mail draft");
            match mail_draft_uri(config, &payload) {
                Ok(uri) => sink.open_uri(&uri).await.map(|_| Channel::MailDraft),
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(channel) => {
            tracing::info!("application sent via {channel:?}");
            SubmissionOutcome::Sent(channel)
        }
        Err(e) => {
            tracing::error!("application submission failed: {e}");
            SubmissionOutcome::Failed(e.to_string())
        }
    }
}

/// Release the in-progress flag and queue the acknowledgment
pub fn finish_submission(state: &mut AppState, outcome: &SubmissionOutcome) {
    tracing::debug!("submission finished, sent: {}", outcome.is_sent());
    state.wizard.submitting = false;
    state.push_notice(outcome.notice());
}
