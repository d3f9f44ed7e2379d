//! Prediction service client.
//!
//! This module provides [`AnalysisClient`] and its builder. A client submits
//! a [`SequencePayload`] to the matching prediction endpoint and classifies
//! the outcome; it never retries and never validates the returned document.

use log::{debug, info};
use serde_json::{Value, json};
use varseq_core::errors::AnalysisError;
use varseq_core::models::RawPrediction;

use super::consts::{
    FILE_FIELD, HEALTH_ENDPOINT, PREDICT_FILE_ENDPOINT, PREDICT_SEQUENCE_ENDPOINT,
};
use super::source::SequencePayload;
use super::transport::{HttpReply, HttpTransport, Transport};
use super::utils::get_default_api;

/// Builder for constructing an [`AnalysisClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use varseq_client::client::AnalysisClient;
///
/// # fn main() -> Result<(), varseq_core::AnalysisError> {
/// let client = AnalysisClient::builder()
///     .with_api_url("http://localhost:8000".to_string())
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct AnalysisClientBuilder {
    api_url: Option<String>,
    transport: Option<Box<dyn Transport>>,
}

impl AnalysisClientBuilder {
    /// Creates a new, empty AnalysisClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the prediction service.
    pub fn with_api_url(mut self, api: String) -> Self {
        self.api_url = Some(api);
        self
    }

    /// Replaces the HTTP transport (mainly for tests).
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Consumes the builder and creates an AnalysisClient.
    pub fn finish(self) -> Result<AnalysisClient, AnalysisError> {
        let api_url = self.api_url.unwrap_or_else(get_default_api);
        let api_url = api_url.trim_end_matches('/').to_string();

        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };

        Ok(AnalysisClient { api_url, transport })
    }
}

/// Client for the SARS-CoV-2 variant prediction service.
///
/// Both submission modes share a single request/response path: the payload
/// variant picks the endpoint and body encoding, and every reply is
/// classified the same way:
/// - 2xx with a JSON body: the body, verbatim, as a [`RawPrediction`]
/// - any other status: [`AnalysisError::RequestFailed`]
/// - no response at all: [`AnalysisError::Network`]
pub struct AnalysisClient {
    /// Prediction service base URL, without trailing slash
    pub api_url: String,
    transport: Box<dyn Transport>,
}

impl AnalysisClient {
    /// Creates a new builder for constructing an [`AnalysisClient`].
    pub fn builder() -> AnalysisClientBuilder {
        AnalysisClientBuilder::default()
    }

    /// Submit either kind of payload to its endpoint.
    pub fn submit(&self, payload: &SequencePayload) -> Result<RawPrediction, AnalysisError> {
        let endpoint = match payload {
            SequencePayload::Sequence { .. } => PREDICT_SEQUENCE_ENDPOINT,
            SequencePayload::File(_) => PREDICT_FILE_ENDPOINT,
        };
        self.send(endpoint, payload)
    }

    /// Submit an uploaded file as a multipart request.
    pub fn submit_file(&self, payload: &SequencePayload) -> Result<RawPrediction, AnalysisError> {
        match payload {
            SequencePayload::File(_) => self.send(PREDICT_FILE_ENDPOINT, payload),
            SequencePayload::Sequence { .. } => Err(AnalysisError::InvalidPayload(
                "file endpoint needs a file payload".to_string(),
            )),
        }
    }

    /// Submit pasted text as `{"sequence": ...}`.
    pub fn submit_sequence(
        &self,
        payload: &SequencePayload,
    ) -> Result<RawPrediction, AnalysisError> {
        match payload {
            SequencePayload::Sequence { .. } => self.send(PREDICT_SEQUENCE_ENDPOINT, payload),
            SequencePayload::File(_) => Err(AnalysisError::InvalidPayload(
                "sequence endpoint needs a text payload".to_string(),
            )),
        }
    }

    /// Ask the service whether it is up.
    ///
    /// # Returns
    /// - true if the service answered `{"health_check": "OK"}`
    pub fn health_check(&self) -> Result<bool, AnalysisError> {
        let reply = self.transport.get(&self.url_for(HEALTH_ENDPOINT))?;
        if !reply.is_success() {
            return Ok(false);
        }
        let healthy = serde_json::from_str::<Value>(&reply.body)
            .map(|body| body["health_check"] == "OK")
            .unwrap_or(false);
        Ok(healthy)
    }

    fn send(
        &self,
        endpoint: &str,
        payload: &SequencePayload,
    ) -> Result<RawPrediction, AnalysisError> {
        let url = self.url_for(endpoint);
        info!("Submitting {} to {}", payload.describe(), url);

        let reply = match payload {
            SequencePayload::Sequence { sequence } => self
                .transport
                .post_json(&url, &json!({ "sequence": sequence }))?,
            SequencePayload::File(file) => {
                self.transport.post_multipart(&url, FILE_FIELD, file)?
            }
        };

        classify_reply(reply)
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }
}

fn classify_reply(reply: HttpReply) -> Result<RawPrediction, AnalysisError> {
    if !reply.is_success() {
        debug!("Prediction failed with HTTP {}: {}", reply.status, reply.body);
        return Err(AnalysisError::RequestFailed {
            status: reply.status,
            body: reply.body,
        });
    }

    let value: Value =
        serde_json::from_str(&reply.body).map_err(|e| AnalysisError::RequestFailed {
            status: reply.status,
            body: format!("response is not JSON: {}", e),
        })?;

    Ok(RawPrediction::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::UploadFile;
    use crate::test_utils::{FakeTransport, RecordedRequest, omicron_json};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn client_with(transport: FakeTransport) -> AnalysisClient {
        AnalysisClient::builder()
            .with_api_url("http://predict.test/".to_string())
            .with_transport(transport)
            .finish()
            .unwrap()
    }

    #[rstest]
    fn test_sequence_goes_to_json_endpoint() {
        let transport = FakeTransport::replying(200, &omicron_json());
        let client = client_with(transport.clone());
        let payload = SequencePayload::from_pasted_text(">Sample\nATTCT").unwrap();

        let prediction = client.submit(&payload).unwrap();

        assert_eq!(
            prediction.as_value(),
            &serde_json::from_str::<Value>(&omicron_json()).unwrap()
        );
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Json {
                url: "http://predict.test/api/sars-variants/predictSarsSequence".to_string(),
                body: json!({"sequence": ">Sample\nATTCT"}),
            }]
        );
    }

    #[rstest]
    fn test_file_goes_to_multipart_endpoint() {
        let transport = FakeTransport::replying(200, &omicron_json());
        let client = client_with(transport.clone());
        let payload =
            SequencePayload::from_files(vec![UploadFile::new("s.fasta", ">s\nACGT")]).unwrap();

        client.submit(&payload).unwrap();

        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Multipart {
                url: "http://predict.test/api/sars-variants/predictSarsFile".to_string(),
                field: "file".to_string(),
                filename: "s.fasta".to_string(),
                content: b">s\nACGT".to_vec(),
            }]
        );
    }

    #[rstest]
    #[case(500)]
    #[case(400)]
    #[case(404)]
    fn test_non_success_is_request_failure(#[case] status: u16) {
        let client = client_with(FakeTransport::replying(status, r#"{"detail": "boom"}"#));
        let payload = SequencePayload::from_pasted_text("ACGT").unwrap();

        match client.submit(&payload).unwrap_err() {
            AnalysisError::RequestFailed { status: got, body } => {
                assert_eq!(got, status);
                assert_eq!(body, r#"{"detail": "boom"}"#);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[rstest]
    fn test_unreachable_is_network_error() {
        let client = client_with(FakeTransport::unreachable("connection refused"));
        let payload = SequencePayload::from_pasted_text("ACGT").unwrap();

        let err = client.submit(&payload).unwrap_err();
        assert!(matches!(err, AnalysisError::Network(reason) if reason == "connection refused"));
    }

    #[rstest]
    fn test_success_without_json_is_request_failure() {
        let client = client_with(FakeTransport::replying(200, "<html>oops</html>"));
        let payload = SequencePayload::from_pasted_text("ACGT").unwrap();

        let err = client.submit(&payload).unwrap_err();
        assert!(err.is_request_failure());
    }

    #[rstest]
    fn test_response_is_not_validated() {
        let client = client_with(FakeTransport::replying(200, r#"{"unexpected": true}"#));
        let payload = SequencePayload::from_pasted_text("ACGT").unwrap();

        let prediction = client.submit(&payload).unwrap();
        assert_eq!(prediction.as_value(), &json!({"unexpected": true}));
        assert!(prediction.parse().is_err());
    }

    #[rstest]
    fn test_mode_specific_wrappers_reject_wrong_payload() {
        let transport = FakeTransport::replying(200, &omicron_json());
        let client = client_with(transport.clone());
        let text = SequencePayload::from_pasted_text("ACGT").unwrap();
        let file = SequencePayload::from_files(vec![UploadFile::new("a.csv", "x")]).unwrap();

        assert!(matches!(
            client.submit_file(&text),
            Err(AnalysisError::InvalidPayload(_))
        ));
        assert!(matches!(
            client.submit_sequence(&file),
            Err(AnalysisError::InvalidPayload(_))
        ));
        assert!(transport.requests().is_empty());

        assert!(client.submit_file(&file).is_ok());
        assert!(client.submit_sequence(&text).is_ok());
        assert_eq!(transport.requests().len(), 2);
    }

    #[rstest]
    #[case(200, r#"{"health_check": "OK"}"#, true)]
    #[case(200, r#"{"health_check": "DEGRADED"}"#, false)]
    #[case(503, r#"{"health_check": "OK"}"#, false)]
    #[case(200, "OK", false)]
    fn test_health_check(#[case] status: u16, #[case] body: &str, #[case] expected: bool) {
        let transport = FakeTransport::replying(status, body);
        let client = client_with(transport.clone());

        assert_eq!(client.health_check().unwrap(), expected);
        assert_eq!(
            transport.requests(),
            vec![RecordedRequest::Get {
                url: "http://predict.test/".to_string()
            }]
        );
    }
}
