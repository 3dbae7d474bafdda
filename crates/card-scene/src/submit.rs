//! Hand-off of collected form values to an external sink.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::form::FieldValues;

/// Payload handed to a [`SubmissionSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// `onSubmitUrl` of the submitting form.
    pub destination: Option<String>,
    pub values: FieldValues,
}

/// User-visible confirmation of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitAck {
    pub destination: Option<String>,
    pub message: String,
}

impl SubmitAck {
    pub fn for_submission(submission: &Submission) -> Self {
        let endpoint = submission.destination.as_deref().unwrap_or("(no endpoint)");
        Self {
            destination: submission.destination.clone(),
            message: format!("Data submitted successfully! Endpoint: {endpoint}"),
        }
    }
}

/// Errors a sink may report. The renderer logs them; they never reach the
/// render tree.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Receiver of form submissions.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError>;
}

impl<F> SubmissionSink for F
where
    F: FnMut(&Submission) -> Result<(), SubmitError>,
{
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        self(submission)
    }
}

/// Sink that only logs the payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        let values = serde_json::to_string(&submission.values)
            .map_err(|err| SubmitError::Other(err.into()))?;
        info!(
            destination = submission.destination.as_deref().unwrap_or("-"),
            %values,
            "form submitted"
        );
        Ok(())
    }
}

/// Sink that keeps every submission it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    submissions: Vec<Submission>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn take(&mut self) -> Vec<Submission> {
        std::mem::take(&mut self.submissions)
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(destination: Option<&str>) -> Submission {
        let mut values = FieldValues::new();
        values.insert("approval_reason".into(), json!("Looks good"));
        Submission {
            destination: destination.map(String::from),
            values,
        }
    }

    #[test]
    fn ack_names_the_endpoint() {
        let ack = SubmitAck::for_submission(&submission(Some("/api/submit-form")));
        assert_eq!(ack.message, "Data submitted successfully! Endpoint: /api/submit-form");

        let ack = SubmitAck::for_submission(&submission(None));
        assert!(ack.message.ends_with("(no endpoint)"));
        assert!(ack.destination.is_none());
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.submit(&submission(Some("/a"))).unwrap();
        sink.submit(&submission(Some("/b"))).unwrap();
        let destinations: Vec<_> = sink
            .submissions()
            .iter()
            .map(|s| s.destination.as_deref())
            .collect();
        assert_eq!(destinations, [Some("/a"), Some("/b")]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.submissions().is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = 0;
        let mut sink = |_: &Submission| -> Result<(), SubmitError> {
            seen += 1;
            Err(SubmitError::Rejected("offline".into()))
        };
        let err = sink.submit(&submission(None)).unwrap_err();
        assert_eq!(err.to_string(), "submission rejected: offline");
        drop(sink);
        assert_eq!(seen, 1);
    }

    #[test]
    fn log_sink_accepts_everything() {
        assert!(LogSink.submit(&submission(Some("/x"))).is_ok());
    }
}
