use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No sequence provided")]
    EmptyInput,

    #[error("Prediction service responded with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Can't reach prediction service: {0}")]
    Network(String),

    #[error("Stored analysis result is malformed: {0}")]
    MalformedResult(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Payload does not match endpoint: {0}")]
    InvalidPayload(String),

    #[error("Session store error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    ///
    /// True when the service answered but refused the request, as opposed to a
    /// transport failure. Drives which notification the user sees.
    ///
    pub fn is_request_failure(&self) -> bool {
        matches!(self, AnalysisError::RequestFailed { .. })
    }
}
