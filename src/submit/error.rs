//! Submission error taxonomy

use thiserror::Error;

/// Why a submission or contact action did not complete
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please agree to the Privacy & Terms before submitting.")]
    ConsentMissing,
    #[error("applications can only be sent from the Review & Send step")]
    NotOnReview,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("request to submission endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("submission endpoint answered with HTTP {0}")]
    Status(u16),
    #[error("could not encode application: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not launch URI opener: {0}")]
    Launch(#[from] std::io::Error),
    #[error("URI opener exited with {}", exit_label(.0))]
    LauncherExit(Option<i32>),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_message_is_user_facing() {
        assert_eq!(
            SubmitError::ConsentMissing.to_string(),
            "Please agree to the Privacy & Terms before submitting."
        );
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            SubmitError::Status(502).to_string(),
            "submission endpoint answered with HTTP 502"
        );
    }

    #[test]
    fn test_launcher_exit_message() {
        assert_eq!(
            SubmitError::LauncherExit(Some(3)).to_string(),
            "URI opener exited with code 3"
        );
        assert_eq!(
            SubmitError::LauncherExit(None).to_string(),
            "URI opener exited with a signal"
        );
    }
}
