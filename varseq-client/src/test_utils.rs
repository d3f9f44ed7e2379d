use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use varseq_core::errors::AnalysisError;

use crate::source::UploadFile;
use crate::transport::{HttpReply, Transport};

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    Get {
        url: String,
    },
    Json {
        url: String,
        body: Value,
    },
    Multipart {
        url: String,
        field: String,
        filename: String,
        content: Vec<u8>,
    },
}

/// Transport that answers every request with the same canned outcome and
/// records what it was asked to send. Clones share the same log.
#[derive(Clone)]
pub struct FakeTransport {
    outcome: Result<HttpReply, String>,
    log: Rc<RefCell<Vec<RecordedRequest>>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        FakeTransport {
            outcome: Ok(HttpReply::new(status, body)),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn unreachable(reason: &str) -> Self {
        FakeTransport {
            outcome: Err(reason.to_string()),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.borrow().clone()
    }

    fn answer(&self, request: RecordedRequest) -> Result<HttpReply, AnalysisError> {
        self.log.borrow_mut().push(request);
        self.outcome.clone().map_err(AnalysisError::Network)
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpReply, AnalysisError> {
        self.answer(RecordedRequest::Get {
            url: url.to_string(),
        })
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, AnalysisError> {
        self.answer(RecordedRequest::Json {
            url: url.to_string(),
            body: body.clone(),
        })
    }

    fn post_multipart(
        &self,
        url: &str,
        field: &str,
        file: &UploadFile,
    ) -> Result<HttpReply, AnalysisError> {
        self.answer(RecordedRequest::Multipart {
            url: url.to_string(),
            field: field.to_string(),
            filename: file.filename.clone(),
            content: file.content.clone(),
        })
    }
}

/// The service answer used throughout the tests, as raw JSON text.
pub fn omicron_json() -> String {
    r#"{"variant":"Omicron","mutations":[{"Position":1,"Reference":"A","Mutated":"T"}],"codon_wise_mutations":[{"Codon_Position":1,"Reference_Codon":"ATT","Mutated_Codon":"ATG","Mutation_Type":"Missense"}]}"#
        .to_string()
}
