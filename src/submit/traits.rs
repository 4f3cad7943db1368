//! Trait abstraction for the submission sink to enable mocking in tests

use super::error::SubmitError;
use super::payload::Payload;
use async_trait::async_trait;

/// External collaborator receiving applications: an HTTP endpoint or,
/// through `open_uri`, the operating system's mail and phone handlers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// POST the payload as JSON. Only HTTP-level success matters.
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<(), SubmitError>;

    /// Hand a `mailto:` or `tel:` URI to the environment
    async fn open_uri(&self, uri: &str) -> Result<(), SubmitError>;
}
