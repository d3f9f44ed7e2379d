use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AnalysisError;
use crate::models::mutation::{CodonMutation, NucleotideMutation};

/// Outcome of one successful prediction: the lineage label plus the
/// nucleotide- and codon-level mutations that explain it.
///
/// A result is never merged or recomputed; a new submission replaces it
/// wholesale.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Predicted lineage, e.g. `B.1.1.529`. Missing or null labels read as
    /// an empty string; only the two mutation lists are mandatory.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variant: String,
    pub mutations: Vec<NucleotideMutation>,
    pub codon_wise_mutations: Vec<CodonMutation>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnalysisResult {
    pub fn is_clean(&self) -> bool {
        self.mutations.is_empty() && self.codon_wise_mutations.is_empty()
    }
}

impl TryFrom<&Value> for AnalysisResult {
    type Error = AnalysisError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        AnalysisResult::deserialize(value)
            .map_err(|e| AnalysisError::MalformedResult(e.to_string()))
    }
}

impl TryFrom<&str> for AnalysisResult {
    type Error = AnalysisError;

    fn try_from(json: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(json).map_err(|e| AnalysisError::MalformedResult(e.to_string()))
    }
}

///
/// The service's JSON answer, untouched. It is forwarded to the handoff slot
/// as-is and only validated when a results view reads it back.
///
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPrediction(Value);

impl RawPrediction {
    pub fn new(value: Value) -> Self {
        RawPrediction(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Validate the payload into an [`AnalysisResult`].
    pub fn parse(&self) -> Result<AnalysisResult, AnalysisError> {
        AnalysisResult::try_from(&self.0)
    }
}

impl From<Value> for RawPrediction {
    fn from(value: Value) -> Self {
        RawPrediction(value)
    }
}
