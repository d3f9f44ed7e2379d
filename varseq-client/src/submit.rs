//! Submission flow: validate input, call the service, hand the result over.

use log::{error, info};
use varseq_core::errors::AnalysisError;

use super::client::AnalysisClient;
use super::handoff::ResultHandoff;
use super::notify::{
    MSG_BUSY, MSG_EMPTY_SEQUENCE, MSG_FILE_REJECTED, MSG_FILE_UNREACHABLE,
    MSG_SEQUENCE_REJECTED, MSG_SEQUENCE_UNREACHABLE, MSG_SUCCESS, Notification, Notifier,
};
use super::source::{SequencePayload, UploadFile};
use super::store::SessionStore;

/// Where the user ends up after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was stored; stay on the submission page.
    Stay,
    /// The result is in the handoff slot; go to the results page.
    NavigateToResults,
}

/// The submission page.
///
/// Holds the `is_uploading` flag that blocks a second submission while one
/// is outstanding, and the handoff a successful result is written to. Every
/// failure is turned into a notification; nothing here returns an error.
pub struct Submitter<S: SessionStore> {
    client: AnalysisClient,
    handoff: ResultHandoff<S>,
    is_uploading: bool,
    file_name: Option<String>,
}

impl<S: SessionStore> Submitter<S> {
    pub fn new(client: AnalysisClient, handoff: ResultHandoff<S>) -> Self {
        Submitter {
            client,
            handoff,
            is_uploading: false,
            file_name: None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    /// Name of the file accepted by the last drop, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn handoff(&self) -> &ResultHandoff<S> {
        &self.handoff
    }

    pub fn into_handoff(self) -> ResultHandoff<S> {
        self.handoff
    }

    /// Submit pasted text.
    pub fn submit_text(&mut self, text: &str, notifier: &mut dyn Notifier) -> Outcome {
        match SequencePayload::from_pasted_text(text) {
            Ok(payload) => self.run(payload, notifier),
            Err(_) => {
                notifier.notify(Notification::error(MSG_EMPTY_SEQUENCE));
                Outcome::Stay
            }
        }
    }

    /// Submit the first of the dropped files; any others are ignored.
    pub fn drop_files(&mut self, files: Vec<UploadFile>, notifier: &mut dyn Notifier) -> Outcome {
        let Some(payload) = SequencePayload::from_files(files) else {
            return Outcome::Stay;
        };
        if let SequencePayload::File(file) = &payload {
            self.file_name = Some(file.filename.clone());
        }
        self.run(payload, notifier)
    }

    fn begin_upload(&mut self) -> Result<(), AnalysisError> {
        if self.is_uploading {
            return Err(AnalysisError::SubmissionInProgress);
        }
        self.is_uploading = true;
        Ok(())
    }

    fn run(&mut self, payload: SequencePayload, notifier: &mut dyn Notifier) -> Outcome {
        if let Err(e) = self.begin_upload() {
            notifier.notify(Notification::error(failure_message(&payload, &e)));
            return Outcome::Stay;
        }

        let outcome = self.client.submit(&payload).and_then(|prediction| {
            self.handoff.store(&prediction)?;
            Ok(prediction)
        });
        self.is_uploading = false;

        match outcome {
            Ok(_) => {
                info!("Analysis of {} completed", payload.describe());
                notifier.notify(Notification::success(MSG_SUCCESS));
                Outcome::NavigateToResults
            }
            Err(e) => {
                error!("Analysis of {} failed: {}", payload.describe(), e);
                notifier.notify(Notification::error(failure_message(&payload, &e)));
                Outcome::Stay
            }
        }
    }
}

fn failure_message(payload: &SequencePayload, err: &AnalysisError) -> &'static str {
    if matches!(err, AnalysisError::SubmissionInProgress) {
        return MSG_BUSY;
    }
    match (payload, err.is_request_failure()) {
        (SequencePayload::File(_), true) => MSG_FILE_REJECTED,
        (SequencePayload::File(_), false) => MSG_FILE_UNREACHABLE,
        (SequencePayload::Sequence { .. }, true) => MSG_SEQUENCE_REJECTED,
        (SequencePayload::Sequence { .. }, false) => MSG_SEQUENCE_UNREACHABLE,
    }
}
