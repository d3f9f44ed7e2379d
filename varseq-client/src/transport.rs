//! HTTP transport used by [`AnalysisClient`](crate::client::AnalysisClient).
//!
//! The client only ever needs three request shapes, so the transport is a
//! small trait. [`HttpTransport`] is the production implementation backed by
//! a blocking `reqwest` client; tests substitute a scripted one.

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use varseq_core::errors::AnalysisError;

use super::source::UploadFile;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpReply {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs requests against the prediction service.
///
/// Implementations return `Ok` for every exchange that produced a response,
/// whatever its status; `Err(AnalysisError::Network)` is reserved for
/// requests that never completed.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpReply, AnalysisError>;

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, AnalysisError>;

    fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &UploadFile,
    ) -> Result<HttpReply, AnalysisError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, AnalysisError> {
        Self::build(false)
    }

    /// A transport that ignores `HTTP_PROXY` and friends, for services on
    /// the local machine.
    pub fn direct() -> Result<Self, AnalysisError> {
        Self::build(true)
    }

    fn build(no_proxy: bool) -> Result<Self, AnalysisError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("varseq/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(network_error)?;

        Ok(Self { client })
    }

    fn read_reply(response: reqwest::blocking::Response) -> Result<HttpReply, AnalysisError> {
        let status = response.status().as_u16();
        let body = response.text().map_err(network_error)?;
        Ok(HttpReply { status, body })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpReply, AnalysisError> {
        let response = self.client.get(url).send().map_err(network_error)?;
        Self::read_reply(response)
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, AnalysisError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(network_error)?;
        Self::read_reply(response)
    }

    fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &UploadFile,
    ) -> Result<HttpReply, AnalysisError> {
        let part = Part::bytes(file.content.clone()).file_name(file.filename.clone());
        let form = Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(network_error)?;
        Self::read_reply(response)
    }
}

fn network_error(err: reqwest::Error) -> AnalysisError {
    AnalysisError::Network(err.to_string())
}
