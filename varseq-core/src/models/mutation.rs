use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Single-base substitution at a genomic position
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct NucleotideMutation {
    #[serde(rename = "Position")]
    pub position: u64,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Mutated")]
    pub mutated: String,
}

impl Display for NucleotideMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}: {} → {}",
            self.position, self.reference, self.mutated
        )
    }
}

/// Coding effect of a codon substitution, as classified by the prediction service.
///
/// Anything other than the three known classes is kept verbatim in
/// [`MutationType::Other`] (the service emits `"Unknown"` for codons with
/// ambiguous bases).
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MutationType {
    Missense,
    Silent,
    Nonsense,
    Other(String),
}

impl MutationType {
    pub fn as_str(&self) -> &str {
        match self {
            MutationType::Missense => "Missense",
            MutationType::Silent => "Silent",
            MutationType::Nonsense => "Nonsense",
            MutationType::Other(label) => label,
        }
    }
}

impl From<String> for MutationType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Missense" => MutationType::Missense,
            "Silent" => MutationType::Silent,
            "Nonsense" => MutationType::Nonsense,
            _ => MutationType::Other(label),
        }
    }
}

impl From<MutationType> for String {
    fn from(mutation_type: MutationType) -> Self {
        match mutation_type {
            MutationType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Three-base substitution tagged with its coding effect
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct CodonMutation {
    #[serde(rename = "Codon_Position")]
    pub codon_position: u64,
    #[serde(rename = "Reference_Codon")]
    pub reference_codon: String,
    #[serde(rename = "Mutated_Codon")]
    pub mutated_codon: String,
    #[serde(rename = "Mutation_Type")]
    pub mutation_type: MutationType,
}

impl Display for CodonMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}: {} → {} ({})",
            self.codon_position, self.reference_codon, self.mutated_codon, self.mutation_type
        )
    }
}
