//! Submission sink and pipeline

mod client;
mod error;
mod payload;
mod pipeline;
mod traits;

pub use client::HttpSink;
pub use error::SubmitError;
pub use pipeline::{
    begin_submission, contact_dial_uri, contact_mail_uri, dispatch, finish_submission,
    SubmissionOutcome,
};
pub use traits::SubmissionSink;

#[cfg(test)]
pub use pipeline::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
#[cfg(test)]
pub use traits::MockSubmissionSink;
