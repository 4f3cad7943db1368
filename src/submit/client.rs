//! Production submission sink
//!
//! Posts applications over HTTP with reqwest and hands `mailto:`/`tel:` URIs
//! to the platform opener.

use super::error::SubmitError;
use super::payload::Payload;
use super::traits::SubmissionSink;
use crate::platform::UriOpener;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Sink backed by a shared HTTP client and the desktop URI opener
#[derive(Debug, Clone, Default)]
pub struct HttpSink {
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionSink for HttpSink {
    async fn post_json(&self, endpoint: &str, payload: &Payload) -> Result<(), SubmitError> {
        // `json` sets `Content-Type: application/json`
        let response = self.client.post(endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }
        tracing::debug!("endpoint accepted application with {status}");
        Ok(())
    }

    async fn open_uri(&self, uri: &str) -> Result<(), SubmitError> {
        let opener = UriOpener::current();
        let program = opener.program();
        // Keep the opener's chatter off the terminal the UI is drawing on
        let status = Command::new(program)
            .args(opener.args(uri))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        if !status.success() {
            tracing::warn!("{program} exited with {status}");
            return Err(SubmitError::LauncherExit(status.code()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormData;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let sink = HttpSink::new();
        let payload = Payload::from_form(&FormData::new(), true);

        // Port 1 on loopback has no listener
        let result = sink.post_json("http://127.0.0.1:1/leads", &payload).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }

    #[tokio::test]
    async fn test_malformed_endpoint_is_transport_error() {
        let sink = HttpSink::new();
        let payload = Payload::from_form(&FormData::new(), true);

        let result = sink.post_json("not a url", &payload).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
